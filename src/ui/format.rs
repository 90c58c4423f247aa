use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone, Utc};

/// India Standard Time. Kickoffs are always displayed in this zone.
pub fn ist() -> FixedOffset {
    FixedOffset::east_opt(5 * 3600 + 30 * 60).expect("UTC+05:30 is a valid offset")
}

/// Today's calendar date in IST.
pub fn today_ist() -> NaiveDate {
    ist_date(Utc::now())
}

pub fn ist_date<Tz: TimeZone>(instant: DateTime<Tz>) -> NaiveDate {
    instant.with_timezone(&ist()).date_naive()
}

/// Split a kickoff into IST `dd/mm/yyyy` and `hh:mm am` strings.
pub fn format_kickoff(kickoff: &DateTime<FixedOffset>) -> (String, String) {
    let local = kickoff.with_timezone(&ist());
    (
        local.format("%d/%m/%Y").to_string(),
        local.format("%I:%M %P").to_string(),
    )
}

pub fn format_day(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}
