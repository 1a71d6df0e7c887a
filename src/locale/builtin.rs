//! Built-in locale data.

/// Layout convention for absolute dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateNotation {
    /// Western day-first layout ("4 Feb 2026", "04/02/2026").
    DayMonthYear,
    /// CJK year-first layout with calendar literals ("2026年2月4日").
    YearMonthDay,
}

/// Grammar table for relative-time phrasing.
///
/// Unit arrays are indexed second, minute, hour, day, week, month, year.
/// `last_words`/`next_words` hold the idiomatic word for a value of
/// exactly -1/+1 ("yesterday", "last week") where the locale has one.
#[derive(Debug, Clone)]
pub struct RelativeGrammar {
    pub now_string: &'static str,
    pub unit_one: [&'static str; 7],
    pub unit_many: [&'static str; 7],
    pub last_words: [Option<&'static str>; 7],
    pub next_words: [Option<&'static str>; 7],
    /// Separator between the number and the unit name ("3 days" vs "3日").
    pub joiner: &'static str,
    pub past_prefix: &'static str,
    pub past_suffix: &'static str,
    pub future_prefix: &'static str,
    pub future_suffix: &'static str,
}

/// Locale settings for display formatting.
#[derive(Debug, Clone)]
pub struct Locale {
    /// The BCP 47 tag this bundle renders for.
    pub tag: &'static str,
    pub notation: DateNotation,
    pub month_names_short: [&'static str; 12],
    pub month_names_full: [&'static str; 12],
    pub day_names_full: [&'static str; 7],
    pub am_string: &'static str,
    pub pm_string: &'static str,
    /// Placed before the time when true ("上午09:08"), after otherwise.
    pub meridiem_first: bool,
    /// Connector between date and time in date-time output.
    pub datetime_connector: &'static str,
    pub relative: RelativeGrammar,
}

impl Default for Locale {
    fn default() -> Self {
        Self::en_gb()
    }
}

impl Locale {
    /// British English locale (the `en` mapping target).
    pub fn en_gb() -> Self {
        Locale {
            tag: "en-GB",
            notation: DateNotation::DayMonthYear,
            month_names_short: [
                "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
            ],
            month_names_full: [
                "January",
                "February",
                "March",
                "April",
                "May",
                "June",
                "July",
                "August",
                "September",
                "October",
                "November",
                "December",
            ],
            day_names_full: [
                "Sunday",
                "Monday",
                "Tuesday",
                "Wednesday",
                "Thursday",
                "Friday",
                "Saturday",
            ],
            am_string: "am",
            pm_string: "pm",
            meridiem_first: false,
            datetime_connector: " at ",
            relative: RelativeGrammar {
                now_string: "now",
                unit_one: ["second", "minute", "hour", "day", "week", "month", "year"],
                unit_many: [
                    "seconds", "minutes", "hours", "days", "weeks", "months", "years",
                ],
                last_words: [
                    None,
                    None,
                    None,
                    Some("yesterday"),
                    Some("last week"),
                    Some("last month"),
                    Some("last year"),
                ],
                next_words: [
                    None,
                    None,
                    None,
                    Some("tomorrow"),
                    Some("next week"),
                    Some("next month"),
                    Some("next year"),
                ],
                joiner: " ",
                past_prefix: "",
                past_suffix: " ago",
                future_prefix: "in ",
                future_suffix: "",
            },
        }
    }

    /// Traditional Chinese (Hong Kong) locale (the `zh` mapping target).
    pub fn zh_hk() -> Self {
        Locale {
            tag: "zh-HK",
            notation: DateNotation::YearMonthDay,
            month_names_short: [
                "1月", "2月", "3月", "4月", "5月", "6月", "7月", "8月", "9月", "10月", "11月",
                "12月",
            ],
            month_names_full: [
                "1月", "2月", "3月", "4月", "5月", "6月", "7月", "8月", "9月", "10月", "11月",
                "12月",
            ],
            day_names_full: [
                "星期日",
                "星期一",
                "星期二",
                "星期三",
                "星期四",
                "星期五",
                "星期六",
            ],
            am_string: "上午",
            pm_string: "下午",
            meridiem_first: true,
            datetime_connector: " ",
            relative: RelativeGrammar {
                now_string: "現在",
                unit_one: ["秒", "分鐘", "小時", "日", "星期", "個月", "年"],
                unit_many: ["秒", "分鐘", "小時", "日", "星期", "個月", "年"],
                last_words: [
                    None,
                    None,
                    None,
                    Some("昨日"),
                    Some("上星期"),
                    Some("上個月"),
                    Some("去年"),
                ],
                next_words: [
                    None,
                    None,
                    None,
                    Some("明日"),
                    Some("下星期"),
                    Some("下個月"),
                    Some("明年"),
                ],
                joiner: "",
                past_prefix: "",
                past_suffix: "前",
                future_prefix: "",
                future_suffix: "後",
            },
        }
    }
}
