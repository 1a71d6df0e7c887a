//! Formatting options and configuration.

/// Verbosity of an absolute date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateStyle {
    /// Numeric day/month/year (e.g. "04/02/2026")
    Short,
    /// Abbreviated month name (e.g. "4 Feb 2026")
    #[default]
    Medium,
    /// Full month name plus weekday (e.g. "Wednesday, 4 February 2026")
    Long,
}

/// The timezone an absolute date is rendered in.
///
/// Parsed instants are always UTC internally; this only affects display.
/// Relative formatting ignores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayZone {
    /// The host machine's local timezone (viewer's wall clock).
    #[default]
    Local,
    /// Coordinated Universal Time.
    Utc,
    /// A fixed offset east of UTC, in minutes (e.g. 480 for UTC+08:00).
    Offset(i32),
}

/// Options for formatting timestamps.
#[derive(Debug, Clone, Default)]
pub struct FormatOptions {
    /// Locale code from the caller's i18n layer (e.g. "en", "zh"), or a
    /// full tag. `None` uses the default locale.
    pub locale: Option<String>,
    /// The timezone to render absolute dates in.
    pub zone: DisplayZone,
}

impl FormatOptions {
    /// Options for the given locale code, rendering in the local timezone.
    pub fn with_locale(locale: impl Into<String>) -> Self {
        FormatOptions {
            locale: Some(locale.into()),
            zone: DisplayZone::default(),
        }
    }
}
