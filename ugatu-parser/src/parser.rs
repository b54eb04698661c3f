use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::Event;

macro_rules! selector {
    ($query:expr) => {{
        static SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse($query).unwrap());
        &SELECTOR
    }};
}

macro_rules! regex {
    ($pattern:expr) => {{
        static REGEX: Lazy<Regex> = Lazy::new(|| Regex::new($pattern).unwrap());
        &REGEX
    }};
}

/// Day, time, name, type, teacher, auditory and the trailing trigger cell.
const COLUMNS: usize = 7;

/// Why a table row did not turn into an [`Event`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The time cell held fewer than two `H:MM` tokens.
    MissingTimes,
    /// The row ended before the trigger column.
    MissingColumns,
}

/// Result of scanning the table of a single week.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeekParse {
    pub events: Vec<Event>,
    /// Index of the dropped row within the table body, with the reason.
    pub skipped: Vec<(usize, SkipReason)>,
}

enum RowOutcome {
    Event(Event),
    Skipped(SkipReason),
}

/// Reads the highest selectable week number from the week dropdown.
pub fn parse_max_week<S: AsRef<str>>(s: S) -> Option<u32> {
    let html = Html::parse_document(s.as_ref());

    html.select(selector!(".col-lg-10 option"))
        .last()?
        .text()
        .collect::<String>()
        .trim()
        .parse::<u32>()
        .ok()
}

pub fn parse_week<S: AsRef<str>>(s: S) -> WeekParse {
    let html = Html::parse_document(s.as_ref());

    let mut week = WeekParse::default();
    // Merged day cells only carry text on the first row of the day.
    let mut day = String::new();

    for (idx, row) in html.select(selector!("tbody tr")).enumerate() {
        match parse_row(row, &mut day) {
            Some(RowOutcome::Event(event)) => week.events.push(event),
            Some(RowOutcome::Skipped(reason)) => week.skipped.push((idx, reason)),
            None => {}
        }
    }

    week
}

fn parse_row(row: ElementRef, day: &mut String) -> Option<RowOutcome> {
    let cells = row
        .select(selector!("td"))
        .map(cell_text)
        .collect::<Vec<_>>();

    let label = cells.first()?;
    if !label.is_empty() {
        day.clone_from(label);
    }

    if cells.len() < COLUMNS {
        return Some(RowOutcome::Skipped(SkipReason::MissingColumns));
    }

    let mut times = regex!(r"\d+:\d+")
        .find_iter(&cells[1])
        .map(|time| time.as_str());

    let (Some(start), Some(end)) = (times.next(), times.next()) else {
        return Some(RowOutcome::Skipped(SkipReason::MissingTimes));
    };

    let date = regex!(r"\d[^+]+")
        .find(day)
        .map(|date| date.as_str().to_string())
        .unwrap_or_default();

    Some(RowOutcome::Event(Event {
        date,
        kind: cells[3].clone(),
        name: cells[2].clone(),
        time_start: format!("{start}00"),
        time_end: format!("{end}00"),
        auditory: cells[5].clone(),
        teacher: cells[4].clone(),
    }))
}

fn cell_text(cell: ElementRef) -> String {
    cell.select(selector!("p"))
        .flat_map(|p| p.text())
        .collect::<String>()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(day: &str, time: &str, name: &str) -> String {
        format!(
            "<tr><td><p>{day}</p></td><td><p>{time}</p></td><td><p>{name}</p></td>\
             <td><p>Лекция</p></td><td><p>Иванов И.И.</p></td><td><p>3-301</p></td><td></td></tr>"
        )
    }

    fn table(rows: &[String]) -> String {
        format!(
            "<html><body><table><thead><tr><th>День</th></tr></thead><tbody>{}</tbody></table></body></html>",
            rows.concat()
        )
    }

    #[test]
    fn extracts_all_columns() {
        let html = table(&[row("Понедельник 15.09.2025", "9:00 - 10:30", "Физика")]);
        let week = parse_week(html);

        assert!(week.skipped.is_empty());
        assert_eq!(
            week.events,
            vec![Event {
                date: "15.09.2025".into(),
                kind: "Лекция".into(),
                name: "Физика".into(),
                time_start: "9:0000".into(),
                time_end: "10:3000".into(),
                auditory: "3-301".into(),
                teacher: "Иванов И.И.".into(),
            }]
        );
    }

    #[test]
    fn day_label_carries_forward() {
        let html = table(&[
            row("Вторник 16.09.2025", "9:00-10:30", "Физика"),
            row("", "10:40-12:10", "Химия"),
            row("", "12:40-14:10", "История"),
        ]);
        let week = parse_week(html);

        assert_eq!(week.events.len(), 3);
        assert!(week.events.iter().all(|event| event.date == "16.09.2025"));
    }

    #[test]
    fn new_day_label_replaces_carried_one() {
        let html = table(&[
            row("Среда 17.09.2025", "9:00-10:30", "Физика"),
            row("", "10:40-12:10", "Химия"),
            row("Четверг 18.09.2025", "9:00-10:30", "История"),
        ]);
        let dates = parse_week(html)
            .events
            .into_iter()
            .map(|event| event.date)
            .collect::<Vec<_>>();

        assert_eq!(dates, ["17.09.2025", "17.09.2025", "18.09.2025"]);
    }

    #[test]
    fn rows_without_two_times_are_skipped() {
        let html = table(&[
            row("Пятница 19.09.2025", "9:00", "Физика"),
            row("", "", "Химия"),
            row("", "12:40 - 14:10", "История"),
        ]);
        let week = parse_week(html);

        assert_eq!(week.events.len(), 1);
        assert_eq!(week.events[0].name, "История");
        assert_eq!(
            week.skipped,
            vec![(0, SkipReason::MissingTimes), (1, SkipReason::MissingTimes)]
        );
    }

    #[test]
    fn short_rows_still_update_the_day() {
        let html = table(&[
            "<tr><td><p>Суббота 20.09.2025</p></td><td><p>9:00-10:30</p></td></tr>".to_string(),
            row("", "10:40-12:10", "Химия"),
        ]);
        let week = parse_week(html);

        assert_eq!(week.skipped, vec![(0, SkipReason::MissingColumns)]);
        assert_eq!(week.events.len(), 1);
        assert_eq!(week.events[0].date, "20.09.2025");
    }

    #[test]
    fn rows_without_cells_are_ignored() {
        let html = table(&[
            "<tr><th>Header</th></tr>".to_string(),
            row("Понедельник 22.09.2025", "9:00-10:30", "Физика"),
        ]);
        let week = parse_week(html);

        assert!(week.skipped.is_empty());
        assert_eq!(week.events.len(), 1);
    }

    #[test]
    fn garbage_yields_empty_week() {
        assert_eq!(parse_week("not even html"), WeekParse::default());
    }

    #[test]
    fn max_week_is_last_option() {
        let html = r#"<div class="col-lg-10"><select name="weeks">
            <option value="1">1</option>
            <option value="2">2</option>
            <option value="18"> 18 </option>
        </select></div>"#;

        assert_eq!(parse_max_week(html), Some(18));
    }

    #[test]
    fn max_week_absent_without_numeric_option() {
        assert_eq!(parse_max_week("<div class=\"col-lg-10\"></div>"), None);
        assert_eq!(
            parse_max_week("<div class=\"col-lg-10\"><option>все</option></div>"),
            None
        );
        assert_eq!(parse_max_week("<option>5</option>"), None);
    }
}
