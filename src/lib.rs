use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use log::{debug, info, warn};

use ugatu_parser::{parse_max_week, parse_week, Calendar};

pub mod error;
pub mod fetch;
pub mod link;

pub use error::{Error, Result};
pub use fetch::{IsuClient, PageSource};
pub use link::ScheduleLink;

/// Counters of a finished export.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportSummary {
    pub weeks: u32,
    pub events: usize,
    pub skipped: usize,
}

/// Scrapes the whole semester behind `link` and writes it to `output`.
///
/// The output file is only touched once the link is known to be valid.
pub async fn export<P: AsRef<Path>>(link: &str, output: P) -> Result<ExportSummary> {
    info!("Schedule link: {link}");
    let link = ScheduleLink::parse(link)?;

    let (calendar, summary) = collect_calendar(&IsuClient::new(link)).await?;
    write_calendar(&calendar, output)?;

    Ok(summary)
}

/// Fetches week `0` to learn the week count, then weeks `1..=count` in order.
pub async fn collect_calendar<P: PageSource>(source: &P) -> Result<(Calendar, ExportSummary)> {
    let weeks = match fetch_page(source, 0).await? {
        Some(page) => parse_max_week(page),
        None => None,
    };

    let Some(weeks) = weeks else {
        warn!("Week selector not found, nothing to parse");
        return Ok((Calendar::default(), ExportSummary::default()));
    };
    info!("Weeks to parse: {weeks}");

    let mut calendar = Calendar::default();
    let mut summary = ExportSummary {
        weeks,
        ..Default::default()
    };

    for week in 1..=weeks {
        info!("Parsing week {week}");

        let Some(page) = fetch_page(source, week).await? else {
            continue;
        };

        let parsed = parse_week(page);
        for (row, reason) in &parsed.skipped {
            debug!("Week {week}, row {row} dropped: {reason:?}");
        }

        summary.events += parsed.events.len();
        summary.skipped += parsed.skipped.len();
        calendar.events.extend(parsed.events);
    }

    info!(
        "Collected {} events, dropped {} rows",
        summary.events, summary.skipped
    );

    Ok((calendar, summary))
}

/// Transport failures leave the week empty, anything fatal is passed on.
async fn fetch_page<P: PageSource>(source: &P, week: u32) -> Result<Option<String>> {
    match source.fetch_week(week).await {
        Ok(page) => Ok(Some(page)),
        Err(err) if err.is_fatal() => Err(err),
        Err(err) => {
            warn!("Week {week} unavailable: {err}");
            Ok(None)
        }
    }
}

pub fn write_calendar<P: AsRef<Path>>(calendar: &Calendar, path: P) -> Result<()> {
    let file = File::create(path.as_ref())?;
    calendar.write_to(BufWriter::new(file))?;

    info!("Calendar written to {}", path.as_ref().display());
    Ok(())
}
