//! Display helpers shared by the tables and dialogs.

use chrono::{DateTime, NaiveDate};

use crate::model::order::UNDEFINED_LABEL;

/// `1234.5` -> `"1 234,50 €"`.
pub fn euros(amount: f64) -> String {
    let cents = (amount * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.abs();
    let units = (cents / 100).to_string();

    let mut grouped = String::new();
    for (i, ch) in units.chars().enumerate() {
        if i > 0 && (units.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }
    format!("{}{},{:02} €", sign, grouped, cents % 100)
}

/// `0.055` -> `"5,5 %"`.
pub fn percent(rate: f64) -> String {
    let value = (rate * 1000.0).round() / 10.0;
    if value.fract() == 0.0 {
        format!("{} %", value as i64)
    } else {
        format!("{} %", value).replace('.', ",")
    }
}

/// Renders an ISO date or date-time as `dd/mm/yyyy`, or the placeholder when
/// absent. Unparseable values are shown as received.
pub fn date(value: Option<&str>) -> String {
    let Some(raw) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return UNDEFINED_LABEL.to_string();
    };
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%d/%m/%Y").to_string();
    }
    let day = raw.get(..10).unwrap_or(raw);
    match NaiveDate::parse_from_str(day, "%Y-%m-%d") {
        Ok(d) => d.format("%d/%m/%Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn euro_amounts() {
        assert_eq!(euros(5.79), "5,79 €");
        assert_eq!(euros(1234.5), "1 234,50 €");
        assert_eq!(euros(0.0), "0,00 €");
        assert_eq!(euros(-1.32), "-1,32 €");
    }

    #[test]
    fn percents() {
        assert_eq!(percent(0.10), "10 %");
        assert_eq!(percent(0.055), "5,5 %");
    }

    #[test]
    fn dates() {
        assert_eq!(date(Some("2024-03-05T09:30:00.000Z")), "05/03/2024");
        assert_eq!(date(Some("2024-03-05")), "05/03/2024");
        assert_eq!(date(None), UNDEFINED_LABEL);
        assert_eq!(date(Some("demain")), "demain");
    }
}
