use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, Utc};
use regex::Regex;

/// `<camera>-<epoch milliseconds>.<ext>`, e.g. `c10-1623871124416.png`.
static EPOCH_MILLIS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<camera>[A-Za-z0-9]+)-(?P<millis>\d{13})\.(?i:png|jpe?g)$")
        .expect("valid regex")
});

/// `<camera>_<YYYY>_<MM>_<DD>__<HH>_<MM>_<SS>.<ext>`, e.g. `c21_2021_03_27__10_36_36.png`.
static CALENDAR_FIELDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<camera>[A-Za-z0-9]+)_(?P<year>\d{4})_(?P<month>\d{2})_(?P<day>\d{2})__(?P<hour>\d{2})_(?P<minute>\d{2})_(?P<second>\d{2})\.(?i:png|jpe?g)$",
    )
    .expect("valid regex")
});

const KEY_FORMAT: &str = "%Y%m%d%H%M%S";

/// Which filename shape a snapshot name matched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NameShape {
    EpochMillis,
    CalendarFields,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedName {
    pub camera_id: String,
    /// `YYYYMMDDHHMMSS` in UTC.
    pub timestamp_key: String,
    pub shape: NameShape,
}

/// Parse a snapshot filename into camera id and canonical timestamp key.
///
/// Returns `None` for names that match neither shape or whose calendar
/// fields do not form a valid date and time.
pub fn parse_filename(name: &str) -> Option<ParsedName> {
    if let Some(caps) = EPOCH_MILLIS.captures(name) {
        let millis: i64 = caps["millis"].parse().ok()?;
        let time = DateTime::<Utc>::from_timestamp_millis(millis)?;
        return Some(ParsedName {
            camera_id: caps["camera"].to_string(),
            timestamp_key: time.format(KEY_FORMAT).to_string(),
            shape: NameShape::EpochMillis,
        });
    }

    let caps = CALENDAR_FIELDS.captures(name)?;
    let field = |key: &str| caps[key].parse::<u32>().ok();
    let year = caps["year"].parse::<i32>().ok()?;
    let time = NaiveDate::from_ymd_opt(year, field("month")?, field("day")?)?.and_hms_opt(
        field("hour")?,
        field("minute")?,
        field("second")?,
    )?;
    Some(ParsedName {
        camera_id: caps["camera"].to_string(),
        timestamp_key: time.format(KEY_FORMAT).to_string(),
        shape: NameShape::CalendarFields,
    })
}
