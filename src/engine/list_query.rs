// ==========================================
// Rebanho - motor de consulta de listas
// ==========================================
// Um único motor genérico serve as três listas (vacas, nascimentos,
// IATF): filtros por valores selecionados, ordenação estável por
// coluna, paginação. O tipo de coluna de cada lista implementa
// `ColumnSpec` e define exibição, valor de data e comparação.
// ==========================================

use chrono::NaiveDate;
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Valor exibido quando a coluna de data está vazia. Entra como
/// balde próprio nos filtros, sempre por último.
pub const MISSING_DATE_LABEL: &str = "Data não informada";

pub trait ColumnSpec: Copy + Eq + Hash {
    type Record;

    /// Texto exibido (e filtrado) para o registro nesta coluna.
    fn display_value(&self, record: &Self::Record) -> String;

    /// Data subjacente quando a coluna é de data.
    fn date_value(&self, _record: &Self::Record) -> Option<NaiveDate> {
        None
    }

    fn is_date(&self) -> bool {
        false
    }

    /// Ordem entre dois registros nesta coluna, sentido ascendente.
    fn compare(&self, a: &Self::Record, b: &Self::Record) -> Ordering {
        self.display_value(a).cmp(&self.display_value(b))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSize {
    Limited(usize),
    /// Todos os registros em uma única página.
    All,
}

impl Default for PageSize {
    fn default() -> Self {
        PageSize::Limited(10)
    }
}

/// Página materializada de uma consulta.
#[derive(Debug)]
pub struct QueryPage<'a, T> {
    pub rows: Vec<&'a T>,
    /// Total após filtros, antes da paginação.
    pub total: usize,
    pub page: usize,
    pub page_count: usize,
}

#[derive(Debug, Clone)]
pub struct ListQuery<C: ColumnSpec> {
    filters: HashMap<C, HashSet<String>>,
    sort: Option<(C, SortDirection)>,
    page: usize,
    page_size: PageSize,
}

impl<C: ColumnSpec> Default for ListQuery<C> {
    fn default() -> Self {
        ListQuery {
            filters: HashMap::new(),
            sort: None,
            page: 1,
            page_size: PageSize::default(),
        }
    }
}

impl<C: ColumnSpec> ListQuery<C> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sort(&self) -> Option<(C, SortDirection)> {
        self.sort
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn filter_values(&self, column: C) -> Option<&HashSet<String>> {
        self.filters.get(&column)
    }

    /// Alterna um valor no filtro da coluna. Filtro que fica vazio é
    /// removido (coluna volta a "sem filtro" = tudo passa).
    pub fn toggle_filter_value(&mut self, column: C, value: &str) {
        let set = self.filters.entry(column).or_default();
        if !set.remove(value) {
            set.insert(value.to_string());
        }
        if set.is_empty() {
            self.filters.remove(&column);
        }
        self.page = 1;
    }

    pub fn set_filter(&mut self, column: C, values: HashSet<String>) {
        if values.is_empty() {
            self.filters.remove(&column);
        } else {
            self.filters.insert(column, values);
        }
        self.page = 1;
    }

    pub fn clear_filter(&mut self, column: C) {
        self.filters.remove(&column);
        self.page = 1;
    }

    /// Seleciona o conjunto completo de valores da coluna, calculado
    /// sobre os registros sem filtro.
    pub fn select_all(&mut self, column: C, records: &[C::Record]) {
        let values: HashSet<String> = records
            .iter()
            .map(|r| column_bucket(column, r))
            .collect();
        self.set_filter(column, values);
    }

    /// Clique na coluna: mesma coluna inverte o sentido, coluna nova
    /// começa ascendente.
    pub fn toggle_sort(&mut self, column: C) {
        self.sort = match self.sort {
            Some((current, direction)) if current == column => {
                Some((column, direction.flipped()))
            }
            _ => Some((column, SortDirection::Ascending)),
        };
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn set_page_size(&mut self, page_size: PageSize) {
        self.page_size = page_size;
        self.page = 1;
    }

    /// Aplica filtros, ordenação e paginação sobre os registros.
    pub fn apply<'a>(&self, records: &'a [C::Record]) -> QueryPage<'a, C::Record> {
        let mut rows: Vec<&C::Record> = records
            .iter()
            .filter(|r| self.matches(r))
            .collect();

        if let Some((column, direction)) = self.sort {
            // sort estável: empates preservam a ordem de inserção
            rows.sort_by(|a, b| {
                let ord = column.compare(a, b);
                match direction {
                    SortDirection::Ascending => ord,
                    SortDirection::Descending => ord.reverse(),
                }
            });
        }

        let total = rows.len();
        let (page, page_count, rows) = match self.page_size {
            PageSize::All => (1, 1, rows),
            PageSize::Limited(size) => {
                let size = size.max(1);
                let page_count = total.div_ceil(size).max(1);
                let page = self.page.min(page_count);
                let start = (page - 1) * size;
                let end = (start + size).min(total);
                (page, page_count, rows[start..end].to_vec())
            }
        };

        QueryPage {
            rows,
            total,
            page,
            page_count,
        }
    }

    fn matches(&self, record: &C::Record) -> bool {
        self.filters.iter().all(|(column, selected)| {
            selected.contains(&column_bucket(*column, record))
        })
    }
}

/// Valor de filtro do registro na coluna: colunas de data agrupam
/// por dia (DD/MM/YYYY), com balde próprio para data ausente.
fn column_bucket<C: ColumnSpec>(column: C, record: &C::Record) -> String {
    if column.is_date() {
        match column.date_value(record) {
            Some(date) => date.format("%d/%m/%Y").to_string(),
            None => MISSING_DATE_LABEL.to_string(),
        }
    } else {
        column.display_value(record)
    }
}

/// Valores distintos da coluna para montar o menu de filtro.
/// Datas em ordem decrescente com o balde de ausentes por último;
/// demais colunas em ordem ascendente. `search` restringe por
/// substring, sem diferenciar maiúsculas.
pub fn unique_values<C: ColumnSpec>(
    records: &[C::Record],
    column: C,
    search: &str,
) -> Vec<String> {
    let mut values: Vec<String> = if column.is_date() {
        let mut dates: Vec<Option<NaiveDate>> = records
            .iter()
            .map(|r| column.date_value(r))
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        dates.sort_by(|a, b| match (a, b) {
            (Some(da), Some(db)) => db.cmp(da),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        });
        dates
            .into_iter()
            .map(|d| match d {
                Some(date) => date.format("%d/%m/%Y").to_string(),
                None => MISSING_DATE_LABEL.to_string(),
            })
            .collect()
    } else {
        let mut distinct: Vec<String> = records
            .iter()
            .map(|r| column.display_value(r))
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        distinct.sort();
        distinct
    };

    if !search.trim().is_empty() {
        let needle = search.trim().to_lowercase();
        values.retain(|v| v.to_lowercase().contains(&needle));
    }
    values
}
