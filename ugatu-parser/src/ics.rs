use std::fmt;
use std::io;

use chrono::NaiveDate;

use crate::{Calendar, Event};

impl Calendar {
    /// Writes the calendar in the same form as its `Display` output.
    pub fn write_to<W: io::Write>(&self, mut writer: W) -> io::Result<()> {
        write!(writer, "{self}")?;
        writer.flush()
    }
}

impl fmt::Display for Calendar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BEGIN:VCALENDAR")?;

        for event in &self.events {
            write!(f, "{event}")?;
        }

        write!(f, "END:VCALENDAR")
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let date = compact_date(&self.date);

        writeln!(f, "BEGIN:VEVENT")?;
        writeln!(f, "SUMMARY:{}", self.summary())?;
        writeln!(
            f,
            "DTSTART;VALUE=DATE-TIME:{date}T{}",
            compact_time(&self.time_start)
        )?;
        writeln!(
            f,
            "DTEND;VALUE=DATE-TIME:{date}T{}",
            compact_time(&self.time_end)
        )?;
        writeln!(f, "END:VEVENT")
    }
}

impl Event {
    /// Auditory, type, name and teacher joined by single spaces, empty parts included.
    pub fn summary(&self) -> String {
        [&self.auditory, &self.kind, &self.name, &self.teacher]
            .map(String::as_str)
            .join(" ")
    }
}

/// `DD.MM.YYYY` to `YYYYMMDD`. Unparsable dates fall back to `0001-01-01`.
fn compact_date(date: &str) -> String {
    NaiveDate::parse_from_str(date, "%d.%m.%Y")
        .ok()
        .or_else(|| NaiveDate::from_ymd_opt(1, 1, 1))
        .map(|date| date.format("%Y.%m.%d").to_string())
        .unwrap_or_default()
        .replace('.', "")
}

fn compact_time(time: &str) -> String {
    time.replace(':', "")
}
