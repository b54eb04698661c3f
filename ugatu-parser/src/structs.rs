/// A single lesson as it appears in one row of the weekly schedule table.
///
/// Fields hold the scraped text as-is. `date` is `DD.MM.YYYY`, the times are
/// the raw `H:MM` tokens with a literal `00` seconds suffix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Event {
    pub date: String,
    pub kind: String,
    pub name: String,
    pub time_start: String,
    pub time_end: String,
    pub auditory: String,
    pub teacher: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Calendar {
    pub events: Vec<Event>,
}

impl Calendar {
    pub fn new(events: Vec<Event>) -> Self {
        Self { events }
    }
}

impl From<Vec<Event>> for Calendar {
    fn from(events: Vec<Event>) -> Self {
        Self::new(events)
    }
}
