/// Utilities for date and money formatting
///
/// The backend speaks ISO dates (yyyy-MM-dd, sometimes with a time
/// suffix); the UI shows dd/MM/yyyy.

/// Format ISO date string to DD/MM/YYYY
/// Example: "2025-03-09T00:00:00.000Z" -> "09/03/2025"
pub fn format_date(value: &str) -> String {
    let date_part = value.split('T').next().unwrap_or(value);
    let parts: Vec<&str> = date_part.split('-').collect();
    if parts.len() == 3 && parts[0].len() == 4 {
        format!("{}/{}/{}", parts[2], parts[1], parts[0])
    } else {
        // Not an ISO date, show the raw value rather than hiding it
        value.to_string()
    }
}

/// Format an optional ISO date, with a dash for missing values
pub fn format_date_opt(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => format_date(v),
        _ => "-".to_string(),
    }
}

/// Format a money amount with two decimals and a $ prefix
pub fn format_money(amount: f64) -> String {
    format!("$ {:.2}", amount)
}

/// Format an optional average with two decimals, or a dash
pub fn format_avg(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}", v),
        None => "-".to_string(),
    }
}

/// Today's local date as yyyy-MM-dd, for prefilling date inputs
pub fn today_iso() -> String {
    let now = js_sys::Date::new_0();
    format!(
        "{:04}-{:02}-{:02}",
        now.get_full_year(),
        now.get_month() + 1,
        now.get_date()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_iso_date() {
        assert_eq!(format_date("2025-03-09"), "09/03/2025");
    }

    #[test]
    fn strips_time_suffix() {
        assert_eq!(format_date("2025-03-09T00:00:00.000Z"), "09/03/2025");
    }

    #[test]
    fn passes_through_non_iso() {
        assert_eq!(format_date("sin fecha"), "sin fecha");
        assert_eq!(format_date(""), "");
    }

    #[test]
    fn optional_dates() {
        assert_eq!(format_date_opt(Some("2024-12-01")), "01/12/2024");
        assert_eq!(format_date_opt(Some("")), "-");
        assert_eq!(format_date_opt(None), "-");
    }

    #[test]
    fn money_and_averages() {
        assert_eq!(format_money(1500.5), "$ 1500.50");
        assert_eq!(format_avg(Some(4.25)), "4.25");
        assert_eq!(format_avg(Some(4.0)), "4.00");
        assert_eq!(format_avg(None), "-");
    }
}
