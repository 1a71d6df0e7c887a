//! Table-driven display cases loaded from a JSON fixture.
//!
//! All absolute cases render in UTC so expectations are stable across
//! machines.

use serde::Deserialize;
use tdfmt::{format_date, format_date_time, DateStyle, DisplayZone, FormatOptions};

#[derive(Debug, Deserialize)]
struct DisplayCase {
    timestamp: String,
    locale: Option<String>,
    mode: String,
    style: Option<String>,
    expected: String,
}

fn load_cases() -> Vec<DisplayCase> {
    let json = include_str!("fixtures/display_cases.json");
    serde_json::from_str(json).expect("fixture must be valid JSON")
}

fn style_from(name: Option<&str>) -> DateStyle {
    match name {
        Some("short") => DateStyle::Short,
        Some("long") => DateStyle::Long,
        _ => DateStyle::Medium,
    }
}

#[test]
fn test_display_fixture_cases() {
    for case in load_cases() {
        let opts = FormatOptions {
            locale: case.locale.clone(),
            zone: DisplayZone::Utc,
        };
        let actual = match case.mode.as_str() {
            "date" => format_date(&case.timestamp, style_from(case.style.as_deref()), &opts),
            "datetime" => format_date_time(&case.timestamp, &opts),
            other => panic!("unknown fixture mode '{other}'"),
        };
        assert_eq!(
            actual, case.expected,
            "case failed: {:?} ({} {:?})",
            case.timestamp, case.mode, case.style
        );
    }
}
