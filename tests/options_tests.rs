use tdfmt::{DateStyle, DisplayZone, FormatOptions};

#[test]
fn test_default_options() {
    let opts = FormatOptions::default();
    assert_eq!(opts.locale, None);
    assert_eq!(opts.zone, DisplayZone::Local);
}

#[test]
fn test_default_style_is_medium() {
    assert_eq!(DateStyle::default(), DateStyle::Medium);
}

#[test]
fn test_with_locale_constructor() {
    let opts = FormatOptions::with_locale("zh");
    assert_eq!(opts.locale.as_deref(), Some("zh"));
    assert_eq!(opts.zone, DisplayZone::Local);
}
