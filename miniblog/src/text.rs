//! Content string utilities
//!
//! Slug generation, excerpt truncation, reading-time estimation, and
//! date helpers for new articles. These are deliberately small; none of
//! them interpret markdown structure.

use once_cell::sync::Lazy;
use regex::Regex;
use std::time::{SystemTime, UNIX_EPOCH};

/// Matches an ISO calendar date, YYYY-MM-DD
static ISO_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("static regex did not compile"));

/// Words per minute assumed for the reading-time estimate
const WORDS_PER_MINUTE: usize = 200;

/// Number of characters kept when deriving an excerpt from the body
const EXCERPT_CHARS: usize = 150;

/// Portuguese month abbreviations, indexed by month - 1
const MONTH_ABBREV: [&str; 12] = [
    "jan", "fev", "mar", "abr", "mai", "jun", "jul", "ago", "set", "out", "nov", "dez",
];

/// Derive a URL-safe slug from an article title
///
/// Lowercases, folds common Latin accents to ASCII, drops everything
/// but letters, digits, spaces and hyphens, then joins words with a
/// single hyphen.
pub fn slugify(title: &str) -> String {
    let folded: String = title.chars().map(fold_accent).collect();

    let cleaned: String = folded
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == ' ' || *c == '-')
        .collect();

    cleaned
        .split([' ', '-'])
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// Fold one character's common Latin accents to their ASCII base
fn fold_accent(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ã' | 'ä' | 'Á' | 'À' | 'Â' | 'Ã' | 'Ä' => 'a',
        'é' | 'è' | 'ê' | 'ë' | 'É' | 'È' | 'Ê' | 'Ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' | 'Í' | 'Ì' | 'Î' | 'Ï' => 'i',
        'ó' | 'ò' | 'ô' | 'õ' | 'ö' | 'Ó' | 'Ò' | 'Ô' | 'Õ' | 'Ö' => 'o',
        'ú' | 'ù' | 'û' | 'ü' | 'Ú' | 'Ù' | 'Û' | 'Ü' => 'u',
        'ç' | 'Ç' => 'c',
        'ñ' | 'Ñ' => 'n',
        other => other,
    }
}

/// Derive a listing excerpt from a raw article body
///
/// First 150 characters of the trimmed content with newlines flattened
/// to spaces, followed by an ellipsis.
pub fn excerpt(content: &str) -> String {
    let flat: String = content
        .trim()
        .chars()
        .take(EXCERPT_CHARS)
        .map(|c| if c == '\n' { ' ' } else { c })
        .collect();
    format!("{}...", flat)
}

/// Estimate reading time from a raw article body
///
/// Whitespace-separated word count at 200 words per minute, never less
/// than one minute.
pub fn reading_time(content: &str) -> String {
    let words = content.split_whitespace().count();
    let minutes = std::cmp::max(1, words.div_ceil(WORDS_PER_MINUTE));
    format!("{} min", minutes)
}

/// Current date as ISO `YYYY-MM-DD`
///
/// Derived from the system clock; days since the Unix epoch are
/// converted to a civil date without a calendar dependency.
pub fn today() -> String {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_secs());
    let days = (secs / 86_400) as i64;
    let (year, month, day) = civil_from_days(days);
    format!("{:04}-{:02}-{:02}", year, month, day)
}

/// Convert days since 1970-01-01 to a (year, month, day) civil date
///
/// Standard era-based conversion; valid far beyond any date this tool
/// will ever stamp.
fn civil_from_days(days: i64) -> (i64, u32, u32) {
    let z = days + 719_468;
    let era = if z >= 0 { z } else { z - 146_096 } / 146_097;
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let year = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let month = if mp < 10 { mp + 3 } else { mp - 9 } as u32;
    (if month <= 2 { year + 1 } else { year }, month, day)
}

/// Whether a string has the ISO `YYYY-MM-DD` shape
pub fn is_iso_date(s: &str) -> bool {
    ISO_DATE.is_match(s)
}

/// Format an ISO `YYYY-MM-DD` date for display, e.g. `"15 dez 2025"`
///
/// Dates that do not match the expected shape are returned unchanged.
pub fn format_date(iso: &str) -> String {
    let parts: Vec<&str> = iso.splitn(3, '-').collect();
    if parts.len() != 3 {
        return iso.to_string();
    }

    let month: usize = match parts[1].parse() {
        Ok(m) if (1..=12).contains(&m) => m,
        _ => return iso.to_string(),
    };
    let day: u32 = match parts[2].parse() {
        Ok(d) => d,
        Err(_) => return iso.to_string(),
    };

    format!("{} {} {}", day, MONTH_ABBREV[month - 1], parts[0])
}
