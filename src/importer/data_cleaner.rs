// ==========================================
// Rebanho - limpeza e coerção de valores
// ==========================================
// TRIM / normalização de vazio / datas em múltiplas ordens.
// ==========================================

use chrono::NaiveDate;

/// Empty or whitespace-only becomes None.
pub fn normalize_null(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Aceita DD/MM/YYYY, DD.MM.YYYY, DD-MM-YYYY e YYYY-MM-DD (e as
/// variantes de separador). O segmento de 4 dígitos identifica a
/// posição do ano.
pub fn parse_flexible_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    let parts: Vec<&str> = trimmed.split(['/', '.', '-']).collect();
    if parts.len() != 3 {
        return None;
    }

    let (year, month, day) = if parts[0].len() == 4 {
        (parts[0], parts[1], parts[2])
    } else if parts[2].len() == 4 {
        (parts[2], parts[1], parts[0])
    } else {
        return None;
    };

    let year: i32 = year.parse().ok()?;
    let month: u32 = month.parse().ok()?;
    let day: u32 = day.parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}
