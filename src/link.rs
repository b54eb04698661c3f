use log::info;
use url::{ParseError, Url};

use crate::error::{Error, Result};

const SEMESTER_PARAM: &str = "schedule_semestr_id";
const GROUP_PARAM: &str = "student_group_id";

/// Resolves links copied without a scheme, e.g. `isu.ugatu.su/schedule/?...`.
const BASE: &str = "https://isu.ugatu.su/";

/// Identifiers of one group's schedule, taken from a browser-facing schedule link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleLink {
    pub semester_id: String,
    pub group_id: String,
}

impl ScheduleLink {
    pub fn parse(link: &str) -> Result<Self> {
        let url = match Url::parse(link) {
            Err(ParseError::RelativeUrlWithoutBase) => {
                Url::parse(BASE).and_then(|base| base.join(link))
            }
            parsed => parsed,
        }
        .map_err(|err| Error::InvalidInput(format!("{link:?}: {err}")))?;

        let param = |name: &str| {
            url.query_pairs()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.into_owned())
                .ok_or_else(|| Error::InvalidInput(format!("missing `{name}` query parameter")))
        };

        let link = Self {
            semester_id: param(SEMESTER_PARAM)?,
            group_id: param(GROUP_PARAM)?,
        };

        info!(
            "Semester {}, group {}",
            link.semester_id, link.group_id
        );

        Ok(link)
    }
}
