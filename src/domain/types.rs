// ==========================================
// Rebanho - tipos de domínio
// ==========================================
// Rótulos em português espelham os valores exibidos
// nas telas e gravados nas planilhas exportadas.
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// Status reprodutivo da vaca
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CowStatus {
    #[serde(rename = "Vazia")]
    Vazia,
    #[serde(rename = "Prenha")]
    Prenha,
    #[serde(rename = "Com cria")]
    ComCria,
}

impl CowStatus {
    pub fn as_label(&self) -> &'static str {
        match self {
            CowStatus::Vazia => "Vazia",
            CowStatus::Prenha => "Prenha",
            CowStatus::ComCria => "Com cria",
        }
    }

    /// Parse a spreadsheet/form label, case-insensitive, trimmed.
    pub fn parse_label(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "vazia" => Some(CowStatus::Vazia),
            "prenha" => Some(CowStatus::Prenha),
            "com cria" => Some(CowStatus::ComCria),
            _ => None,
        }
    }
}

impl Default for CowStatus {
    fn default() -> Self {
        CowStatus::Vazia
    }
}

impl fmt::Display for CowStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_label())
    }
}

// ==========================================
// Status do cadastro (Ativo / Inativo)
// ==========================================
// Descarte não apaga o registro: marca Inativo e guarda o motivo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegistrationStatus {
    #[serde(rename = "Ativo")]
    Ativo,
    #[serde(rename = "Inativo")]
    Inativo,
}

impl RegistrationStatus {
    pub fn as_label(&self) -> &'static str {
        match self {
            RegistrationStatus::Ativo => "Ativo",
            RegistrationStatus::Inativo => "Inativo",
        }
    }

    pub fn parse_label(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "ativo" => Some(RegistrationStatus::Ativo),
            "inativo" => Some(RegistrationStatus::Inativo),
            _ => None,
        }
    }
}

impl Default for RegistrationStatus {
    fn default() -> Self {
        RegistrationStatus::Ativo
    }
}

impl fmt::Display for RegistrationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_label())
    }
}

// ==========================================
// Sexo do bezerro no registro de nascimento
// ==========================================
// "Aborto" e "Não Definido" entram pelo mesmo campo nas planilhas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BirthSex {
    #[serde(rename = "Macho")]
    Macho,
    #[serde(rename = "Fêmea")]
    Femea,
    #[serde(rename = "Aborto")]
    Aborto,
    #[serde(rename = "Não Definido")]
    NaoDefinido,
}

impl BirthSex {
    pub fn as_label(&self) -> &'static str {
        match self {
            BirthSex::Macho => "Macho",
            BirthSex::Femea => "Fêmea",
            BirthSex::Aborto => "Aborto",
            BirthSex::NaoDefinido => "Não Definido",
        }
    }

    pub fn parse_label(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "macho" | "m" => Some(BirthSex::Macho),
            "fêmea" | "femea" | "f" => Some(BirthSex::Femea),
            "aborto" => Some(BirthSex::Aborto),
            "não definido" | "nao definido" => Some(BirthSex::NaoDefinido),
            _ => None,
        }
    }
}

impl fmt::Display for BirthSex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_label())
    }
}

// ==========================================
// Resultado do diagnóstico de gestação (IATF)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IatfResult {
    #[serde(rename = "Prenha")]
    Prenha,
    #[serde(rename = "Vazia")]
    Vazia,
    #[serde(rename = "Não checado")]
    NaoChecado,
}

impl IatfResult {
    pub fn as_label(&self) -> &'static str {
        match self {
            IatfResult::Prenha => "Prenha",
            IatfResult::Vazia => "Vazia",
            IatfResult::NaoChecado => "Não checado",
        }
    }

    pub fn parse_label(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "prenha" => Some(IatfResult::Prenha),
            "vazia" => Some(IatfResult::Vazia),
            "não checado" | "nao checado" => Some(IatfResult::NaoChecado),
            _ => None,
        }
    }
}

impl Default for IatfResult {
    fn default() -> Self {
        IatfResult::NaoChecado
    }
}

impl fmt::Display for IatfResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_label())
    }
}

// ==========================================
// Categorias de itens de cadastro
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Lots,
    Pastures,
    Farms,
    Breeds,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Lots,
        Category::Pastures,
        Category::Farms,
        Category::Breeds,
    ];

    pub fn as_label(&self) -> &'static str {
        match self {
            Category::Lots => "Lotes",
            Category::Pastures => "Pastos",
            Category::Farms => "Fazendas",
            Category::Breeds => "Raças",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_label())
    }
}
