//! Date patterns used to spot names that carry no subject

use regex::{Regex, RegexSet};
use std::sync::LazyLock;

static DATE_ONLY: LazyLock<RegexSet> = LazyLock::new(|| {
    RegexSet::new([
        r"^\d{4}-\d{2}-\d{2}$", // 2024-01-15
        r"^\d{2}/\d{2}/\d{4}$", // 15/01/2024
        r"^\d{2}-\d{2}-\d{4}$", // 15-01-2024
        r"^\d{8}$",             // 20240115
    ])
    .expect("date patterns are valid")
});

static EMBEDDED_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d{4}[-_]\d{2}[-_]\d{2}|\d{2}[-_]\d{2}[-_]\d{4})").expect("date pattern is valid")
});

/// Whether `s` (trimmed) is nothing but a date
pub fn is_date_only(s: &str) -> bool {
    DATE_ONLY.is_match(s.trim())
}

/// First date-like substring of `s`, e.g. `2024_01_15` in `ata_2024_01_15.pdf`
pub fn embedded_date(s: &str) -> Option<&str> {
    EMBEDDED_DATE.find(s).map(|m| m.as_str())
}
