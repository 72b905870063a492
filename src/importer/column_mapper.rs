// ==========================================
// Rebanho - mapeamento de colunas
// ==========================================
// Cabeçalhos chegam com grafias variadas (acentos, "Nº", abreviações).
// Normalizamos o rótulo e resolvemos contra uma tabela fixa de
// apelidos por tipo de importação. Cabeçalho desconhecido = coluna
// ignorada, nunca erro.
// ==========================================

use crate::importer::file_parser::SheetData;

/// Tipo de importação selecionado pelo usuário.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImportKind {
    /// Cadastro de vacas ("vacas").
    Cows,
    /// Registro de nascimentos ("nascimentos").
    Births,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CowField {
    Id,
    Animal,
    Origem,
    Farm,
    Lot,
    LoteT,
    Location,
    Status,
    RegistrationStatus,
    Obs1,
    MotivoDoDescarte,
    Mes,
    Ano,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BirthField {
    CowId,
    Date,
    Sex,
    Breed,
    Sire,
    Lot,
    Farm,
    Location,
    Observations,
    Obs1,
    Jvvo,
}

pub struct ColumnMapper;

impl ColumnMapper {
    /// Lowercase, fold diacritics, drop ordinal signs, collapse
    /// punctuation into single spaces. "Brinco Nº (Mãe)" -> "brinco n mae".
    pub fn normalize_header(label: &str) -> String {
        let mut out = String::with_capacity(label.len());
        for c in label.trim().to_lowercase().chars() {
            match c {
                'á' | 'à' | 'â' | 'ã' | 'ä' => out.push('a'),
                'é' | 'è' | 'ê' | 'ë' => out.push('e'),
                'í' | 'ì' | 'î' | 'ï' => out.push('i'),
                'ó' | 'ò' | 'ô' | 'õ' | 'ö' => out.push('o'),
                'ú' | 'ù' | 'û' | 'ü' => out.push('u'),
                'ç' => out.push('c'),
                'ñ' => out.push('n'),
                'º' | '°' | 'ª' => {}
                c if c.is_alphanumeric() => out.push(c),
                _ => out.push(' '),
            }
        }
        out.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    pub fn resolve_cow_header(label: &str) -> Option<CowField> {
        match Self::normalize_header(label).as_str() {
            "brinco n" | "brinco" | "brinco no" | "brinco numero" => Some(CowField::Id),
            "animal" => Some(CowField::Animal),
            "origem" => Some(CowField::Origem),
            "fazenda" => Some(CowField::Farm),
            "lote" => Some(CowField::Lot),
            "lote t" => Some(CowField::LoteT),
            "localizacao" | "local" => Some(CowField::Location),
            "status" => Some(CowField::Status),
            "status do cadastro" => Some(CowField::RegistrationStatus),
            "obs 1" | "obs1" => Some(CowField::Obs1),
            "motivo do descarte" => Some(CowField::MotivoDoDescarte),
            "mes" => Some(CowField::Mes),
            "ano" => Some(CowField::Ano),
            _ => None,
        }
    }

    pub fn resolve_birth_header(label: &str) -> Option<BirthField> {
        match Self::normalize_header(label).as_str() {
            "brinco n mae" | "brinco n vaca" | "brinco n" | "brinco" | "vaca" => {
                Some(BirthField::CowId)
            }
            "data" | "data de nascimento" | "data nascimento" | "nascimento" => {
                Some(BirthField::Date)
            }
            "sexo" => Some(BirthField::Sex),
            "raca" => Some(BirthField::Breed),
            "touro" | "pai" => Some(BirthField::Sire),
            "lote" => Some(BirthField::Lot),
            "fazenda" => Some(BirthField::Farm),
            "localizacao" | "local" => Some(BirthField::Location),
            "observacoes" | "obs" => Some(BirthField::Observations),
            "obs 1" | "obs1" => Some(BirthField::Obs1),
            "jvvo" => Some(BirthField::Jvvo),
            _ => None,
        }
    }

    /// Position-aligned mapping for a whole header row. `None` marks a
    /// column whose data will be ignored.
    pub fn map_cow_columns(sheet: &SheetData) -> Vec<Option<CowField>> {
        sheet
            .headers
            .iter()
            .map(|h| Self::resolve_cow_header(h))
            .collect()
    }

    pub fn map_birth_columns(sheet: &SheetData) -> Vec<Option<BirthField>> {
        sheet
            .headers
            .iter()
            .map(|h| Self::resolve_birth_header(h))
            .collect()
    }
}
