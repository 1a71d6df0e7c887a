//! Locale resolution and built-in locale data.
//!
//! Callers hand over the short code their i18n layer uses (`en`, `zh`);
//! constant tables map it to a concrete tag, which then selects a built-in
//! data bundle. Unknown codes pass through the tables verbatim and fall
//! back to the default bundle when no bundle matches.

mod builtin;

pub use builtin::{DateNotation, Locale, RelativeGrammar};

/// Code→tag table for absolute dates.
const DATE_LOCALES: &[(&str, &str)] = &[("en", "en-GB"), ("zh", "zh-HK")];

/// Code→tag table for date-times. Kept separate from [`DATE_LOCALES`] so
/// the two surfaces can diverge; lookups fall back to the date table.
const DATETIME_LOCALES: &[(&str, &str)] = &[("en", "en-GB"), ("zh", "zh-HK")];

fn map_code(table: &[(&'static str, &'static str)], code: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(short, _)| short.eq_ignore_ascii_case(code))
        .map(|&(_, tag)| tag)
}

/// Select the bundle whose language matches the tag's primary subtag.
fn for_tag(tag: &str) -> Option<Locale> {
    let lang = tag.split(['-', '_']).next().unwrap_or(tag);
    if lang.eq_ignore_ascii_case("en") {
        Some(Locale::en_gb())
    } else if lang.eq_ignore_ascii_case("zh") {
        Some(Locale::zh_hk())
    } else {
        None
    }
}

/// Resolve the locale for absolute-date formatting.
pub fn resolve_date(code: Option<&str>) -> Locale {
    match code {
        None => Locale::default(),
        Some(c) => {
            let tag = map_code(DATE_LOCALES, c).unwrap_or(c);
            for_tag(tag).unwrap_or_default()
        }
    }
}

/// Resolve the locale for date-time formatting.
///
/// Tries the date-time table, then the date table, then the raw code.
pub fn resolve_datetime(code: Option<&str>) -> Locale {
    match code {
        None => Locale::default(),
        Some(c) => {
            let tag = map_code(DATETIME_LOCALES, c)
                .or_else(|| map_code(DATE_LOCALES, c))
                .unwrap_or(c);
            for_tag(tag).unwrap_or_default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_codes_map_through_the_table() {
        assert_eq!(resolve_date(Some("en")).tag, "en-GB");
        assert_eq!(resolve_date(Some("zh")).tag, "zh-HK");
        assert_eq!(resolve_datetime(Some("zh")).tag, "zh-HK");
    }

    #[test]
    fn full_tags_pass_through() {
        assert_eq!(resolve_date(Some("zh-HK")).tag, "zh-HK");
        assert_eq!(resolve_date(Some("en_US")).tag, "en-GB");
    }

    #[test]
    fn unknown_and_absent_fall_back_to_default() {
        assert_eq!(resolve_date(None).tag, "en-GB");
        assert_eq!(resolve_date(Some("xx-YY")).tag, "en-GB");
    }
}
