use tdfmt::{format_date_time, DisplayZone, FormatOptions};

fn opts(locale: &str) -> FormatOptions {
    FormatOptions {
        locale: Some(locale.to_string()),
        zone: DisplayZone::Utc,
    }
}

#[test]
fn test_en_morning() {
    let result = format_date_time("2026-02-04T09:08:32Z", &opts("en"));
    assert_eq!(result, "4 February 2026 at 09:08 am");
}

#[test]
fn test_en_evening() {
    let result = format_date_time("2026-02-04T21:08:32Z", &opts("en"));
    assert_eq!(result, "4 February 2026 at 09:08 pm");
}

#[test]
fn test_zh_meridiem_precedes_time() {
    let result = format_date_time("2026-02-04T09:08:32Z", &opts("zh"));
    assert_eq!(result, "2026年2月4日 上午09:08");

    let result = format_date_time("2026-02-04T21:08:32Z", &opts("zh"));
    assert_eq!(result, "2026年2月4日 下午09:08");
}

#[test]
fn test_noon_is_twelve_pm() {
    let result = format_date_time("2026-02-04T12:00:00Z", &opts("en"));
    assert_eq!(result, "4 February 2026 at 12:00 pm");
}

#[test]
fn test_midnight_is_twelve_am() {
    let result = format_date_time("2026-02-04T00:08:00Z", &opts("en"));
    assert_eq!(result, "4 February 2026 at 12:08 am");
}

#[test]
fn test_naive_timestamp_matches_zulu() {
    let naive = format_date_time("2026-02-04T09:08:32", &opts("en"));
    let zulu = format_date_time("2026-02-04T09:08:32Z", &opts("en"));
    assert_eq!(naive, zulu);
}

#[test]
fn test_offset_zone_shifts_time_of_day() {
    let opts = FormatOptions {
        locale: Some("zh".to_string()),
        zone: DisplayZone::Offset(480),
    };
    // 09:08 UTC is 17:08 in Hong Kong.
    let result = format_date_time("2026-02-04T09:08:32Z", &opts);
    assert_eq!(result, "2026年2月4日 下午05:08");
}
