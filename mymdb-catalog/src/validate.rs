//! Value-domain checks for movie fields.
//!
//! The store only enforces types; these enforce what the values mean.

/// Lowest and highest accepted personal rating.
pub const RATING_RANGE: std::ops::RangeInclusive<f64> = 1.0..=10.0;

/// A parsed release year or year range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearSpan {
    pub start: u16,
    /// Final year of a serial work. `None` for a single-year release.
    pub end: Option<u16>,
}

/// Parse `"YYYY"` or `"YYYY-YYYY"`.
///
/// Returns `None` for anything else, including ranges that run backwards.
/// No trimming is done.
pub fn parse_year(year: &str) -> Option<YearSpan> {
    match year.split_once('-') {
        None => Some(YearSpan {
            start: four_digits(year)?,
            end: None,
        }),
        Some((start, end)) => {
            let start = four_digits(start)?;
            let end = four_digits(end)?;
            (end >= start).then_some(YearSpan {
                start,
                end: Some(end),
            })
        }
    }
}

fn four_digits(s: &str) -> Option<u16> {
    if s.len() == 4 && s.bytes().all(|b| b.is_ascii_digit()) {
        s.parse().ok()
    } else {
        None
    }
}

pub fn is_valid_year(year: &str) -> bool {
    parse_year(year).is_some()
}

pub fn is_valid_rating(rating: f64) -> bool {
    rating.is_finite() && RATING_RANGE.contains(&rating)
}

pub fn is_valid_runtime(runtime: i32) -> bool {
    runtime >= 0
}
