use std::env;

use log::debug;
use reqwest::Client;

use crate::error::{Error, Result};
use crate::link::ScheduleLink;

pub const DEFAULT_ENDPOINT: &str = "https://isu.ugatu.su/api/new_schedule_api/";
pub const ENDPOINT_VAR: &str = "UGATU_ICS_ENDPOINT";

/// Anything that can hand out the schedule page of a given week.
#[allow(async_fn_in_trait)]
pub trait PageSource {
    /// Returns the decoded HTML of `week`, where `0` selects the current week.
    async fn fetch_week(&self, week: u32) -> Result<String>;
}

pub struct IsuClient {
    client: Client,
    endpoint: String,
    link: ScheduleLink,
}

impl IsuClient {
    /// Uses the endpoint from `UGATU_ICS_ENDPOINT`, falling back to the public API.
    pub fn new(link: ScheduleLink) -> Self {
        let endpoint = env::var(ENDPOINT_VAR).unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
        Self::with_endpoint(link, endpoint)
    }

    pub fn with_endpoint<S: Into<String>>(link: ScheduleLink, endpoint: S) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            link,
        }
    }

    fn week_url(&self, week: u32) -> String {
        format!(
            "{}?schedule_semestr_id={}&WhatShow=1&student_group_id={}&weeks={week}",
            self.endpoint, self.link.semester_id, self.link.group_id
        )
    }
}

impl PageSource for IsuClient {
    async fn fetch_week(&self, week: u32) -> Result<String> {
        let url = self.week_url(week);

        debug!("Sending HTTP request to {url}");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(Error::Transport)?;

        debug!("Reading response body ({})", response.status());
        // Decoded according to the charset of the `Content-Type` header.
        response.text().await.map_err(Error::Decode)
    }
}
