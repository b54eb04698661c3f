mod ics;
mod parser;
mod structs;

pub use parser::{parse_max_week, parse_week, SkipReason, WeekParse};
pub use structs::{Calendar, Event};
