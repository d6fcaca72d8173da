//! Display Formatting
//!
//! Currency, number, date and label formatting in Indonesian conventions.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

const MONTHS_ID: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "Mei", "Jun", "Jul", "Agu", "Sep", "Okt", "Nov", "Des",
];

/// Group a string of decimal digits with `.` every three digits
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

/// Whole rupiah with id-ID grouping, e.g. `Rp 1.500.000`
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return "Rp 0".to_string();
    }
    let rounded = amount.round();
    let grouped = group_thousands(&format!("{:.0}", rounded.abs()));
    if rounded < 0.0 {
        format!("-Rp {}", grouped)
    } else {
        format!("Rp {}", grouped)
    }
}

/// Compact rupiah for chart ticks: `Rp1.5M`, `Rp1.5Jt`, `Rp2.0K`
pub fn format_currency_short(amount: f64) -> String {
    if !amount.is_finite() {
        return "Rp 0".to_string();
    }
    if amount >= 1_000_000_000.0 {
        format!("Rp{:.1}M", amount / 1_000_000_000.0)
    } else if amount >= 1_000_000.0 {
        format!("Rp{:.1}Jt", amount / 1_000_000.0)
    } else if amount >= 1_000.0 {
        format!("Rp{:.1}K", amount / 1_000.0)
    } else {
        format!("Rp{}", format_number(amount))
    }
}

/// Plain number the way a JS template literal prints it (`50`, `12.5`)
pub fn format_number(value: f64) -> String {
    if !value.is_finite() || value == 0.0 {
        return "0".to_string();
    }
    format!("{}", value)
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|dt| dt.date())
}

/// `15 Jan 2024`; `-` when missing; the input unchanged when unparseable
pub fn format_date(raw: Option<&str>) -> String {
    let Some(raw) = raw.filter(|s| !s.trim().is_empty()) else {
        return "-".to_string();
    };
    match parse_date(raw) {
        Some(date) => {
            use chrono::Datelike;
            format!("{:02} {} {}", date.day(), MONTHS_ID[date.month0() as usize], date.year())
        }
        None => raw.to_string(),
    }
}

/// `YYYY-MM-DD` for a date input, empty when missing or unparseable
pub fn date_input_value(raw: Option<&str>) -> String {
    raw.and_then(parse_date)
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

fn css_class(value: Option<&str>, default: &str) -> String {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(v) => v.to_lowercase().split_whitespace().collect::<Vec<_>>().join("-"),
        None => default.to_string(),
    }
}

/// `In Progress` -> `in-progress`
pub fn status_class(status: Option<&str>) -> String {
    css_class(status, "not-started")
}

pub fn priority_class(priority: Option<&str>) -> String {
    css_class(priority, "medium")
}

pub fn status_label(status: Option<&str>) -> &str {
    status.filter(|s| !s.is_empty()).unwrap_or("Not Started")
}

pub fn priority_label(priority: Option<&str>) -> &str {
    priority.filter(|s| !s.is_empty()).unwrap_or("Medium")
}

pub fn category_color(category: Option<&str>) -> &'static str {
    match category {
        Some("Internal") => "#0066CC",
        Some("Meeting") => "#009933",
        Some("Training") => "#FFCC00",
        Some("Maintenance") => "#CC0000",
        _ => "#6c757d",
    }
}

/// Missing or empty text as `-`
pub fn or_dash(value: Option<&str>) -> &str {
    value.filter(|s| !s.is_empty()).unwrap_or("-")
}

pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "Rp 0");
        assert_eq!(format_currency(1_500_000.0), "Rp 1.500.000");
        assert_eq!(format_currency(999.4), "Rp 999");
        assert_eq!(format_currency(1000.0), "Rp 1.000");
        assert_eq!(format_currency(-250_000.0), "-Rp 250.000");
        assert_eq!(format_currency(f64::NAN), "Rp 0");
    }

    #[test]
    fn test_format_currency_beyond_u64() {
        assert_eq!(format_currency(1e20), "Rp 100.000.000.000.000.000.000");
        assert_eq!(format_currency(-2e19), "-Rp 20.000.000.000.000.000.000");
    }

    #[test]
    fn test_format_currency_short() {
        assert_eq!(format_currency_short(1_500_000.0), "Rp1.5Jt");
        assert_eq!(format_currency_short(2_000_000_000.0), "Rp2.0M");
        assert_eq!(format_currency_short(2500.0), "Rp2.5K");
        assert_eq!(format_currency_short(500.0), "Rp500");
        assert_eq!(format_currency_short(0.0), "Rp0");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(50.0), "50");
        assert_eq!(format_number(12.5), "12.5");
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(None), "-");
        assert_eq!(format_date(Some("")), "-");
        assert_eq!(format_date(Some("invalid")), "invalid");
        assert_eq!(format_date(Some("2024-01-15")), "15 Jan 2024");
        assert_eq!(format_date(Some("2024-05-03T10:20:30")), "03 Mei 2024");
        assert_eq!(format_date(Some("2024-12-31T23:00:00+07:00")), "31 Des 2024");
    }

    #[test]
    fn test_date_input_value() {
        assert_eq!(date_input_value(Some("2024-08-17T00:00:00")), "2024-08-17");
        assert_eq!(date_input_value(Some("2024-08-17")), "2024-08-17");
        assert_eq!(date_input_value(Some("soon")), "");
        assert_eq!(date_input_value(None), "");
    }

    #[test]
    fn test_status_and_priority_classes() {
        assert_eq!(status_class(Some("In Progress")), "in-progress");
        assert_eq!(status_class(Some("Not  Started Yet")), "not-started-yet");
        assert_eq!(status_class(None), "not-started");
        assert_eq!(status_class(Some("")), "not-started");
        assert_eq!(priority_class(Some("Critical")), "critical");
        assert_eq!(priority_class(None), "medium");
        assert_eq!(status_label(None), "Not Started");
        assert_eq!(priority_label(Some("High")), "High");
    }

    #[test]
    fn test_category_color() {
        assert_eq!(category_color(Some("Meeting")), "#009933");
        assert_eq!(category_color(Some("Lainnya")), "#6c757d");
        assert_eq!(category_color(None), "#6c757d");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html(r#"<b>"A&B"</b>"#), "&lt;b&gt;&quot;A&amp;B&quot;&lt;/b&gt;");
    }
}
