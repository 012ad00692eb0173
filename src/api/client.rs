//! Authenticated gateway to the FTC Events API.
//!
//! One blocking HTTP client, basic auth, season-scoped paths. Retries and
//! timeouts are the transport's concern; callers treat every error as
//! fatal for the event being narrated.

use chrono::{NaiveDate, NaiveDateTime};
use log::debug;
use thiserror::Error;

use crate::api::models::{
    AllianceList, AllianceRecord, AwardList, AwardRecord, EventList, EventRecord, PlayoffMatch,
    PlayoffSchedule, QualMatch, QualSchedule, RankingList, RankingRecord, TeamPage, TeamRecord,
};

pub const BASE_API_URL: &str = "https://ftc-api.firstinspires.org/v2.0";

/// Season the event data is fetched from.
pub const DEFAULT_SEASON: u16 = 2021;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("no events exist with the code {0}")]
    EventNotFound(String),
    #[error("unparseable timestamp: {0}")]
    DateParse(#[from] chrono::ParseError),
}

/// Blocking FTC Events API client for one season.
pub struct EventsClient {
    http: reqwest::blocking::Client,
    username: String,
    token: String,
    season: u16,
}

impl EventsClient {
    pub fn new(username: impl Into<String>, token: impl Into<String>) -> Self {
        Self::with_season(username, token, DEFAULT_SEASON)
    }

    pub fn with_season(username: impl Into<String>, token: impl Into<String>, season: u16) -> Self {
        Self {
            http: reqwest::blocking::Client::new(),
            username: username.into(),
            token: token.into(),
            season,
        }
    }

    pub fn season(&self) -> u16 {
        self.season
    }

    fn fetch<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let url = format!("{}/{}/{}", BASE_API_URL, self.season, path);
        debug!("GET {} {:?}", url, query);
        let response = self
            .http
            .get(&url)
            .basic_auth(&self.username, Some(&self.token))
            .query(query)
            .send()?
            .error_for_status()?;
        Ok(response.json()?)
    }

    /// Event metadata for one event code. Unknown codes come back as an
    /// empty list from the API and surface as [`ApiError::EventNotFound`].
    pub fn event(&self, event_code: &str) -> Result<EventRecord, ApiError> {
        let list: EventList = self.fetch("events", &[("eventCode", event_code.to_string())])?;
        list.events
            .into_iter()
            .next()
            .ok_or_else(|| ApiError::EventNotFound(event_code.to_string()))
    }

    /// Every team at the event, pages merged in listing order.
    pub fn teams(&self, event_code: &str) -> Result<Vec<TeamRecord>, ApiError> {
        let mut teams = Vec::new();
        let mut page = 1u32;
        loop {
            let batch: TeamPage = self.fetch(
                "teams",
                &[
                    ("eventCode", event_code.to_string()),
                    ("page", page.to_string()),
                ],
            )?;
            teams.extend(batch.teams);
            if page >= batch.page_total {
                break;
            }
            page += 1;
        }
        debug!("fetched {} teams for {}", teams.len(), event_code);
        Ok(teams)
    }

    /// Qualification matches with per-station detail and final scores.
    pub fn qual_matches(&self, event_code: &str) -> Result<Vec<QualMatch>, ApiError> {
        let schedule: QualSchedule =
            self.fetch(&format!("schedule/{}/qual/hybrid", event_code), &[])?;
        Ok(schedule.schedule)
    }

    /// Playoff matches with series identifiers and final scores.
    pub fn playoff_matches(&self, event_code: &str) -> Result<Vec<PlayoffMatch>, ApiError> {
        let schedule: PlayoffSchedule =
            self.fetch(&format!("schedule/{}/playoff/hybrid", event_code), &[])?;
        Ok(schedule.schedule)
    }

    pub fn alliances(&self, event_code: &str) -> Result<Vec<AllianceRecord>, ApiError> {
        let list: AllianceList = self.fetch(&format!("alliances/{}", event_code), &[])?;
        Ok(list.alliances)
    }

    pub fn awards(&self, event_code: &str) -> Result<Vec<AwardRecord>, ApiError> {
        let list: AwardList = self.fetch(&format!("awards/{}", event_code), &[])?;
        Ok(list.awards)
    }

    /// Official event rankings, as published by the API.
    pub fn rankings(&self, event_code: &str) -> Result<Vec<RankingRecord>, ApiError> {
        let list: RankingList = self.fetch(&format!("rankings/{}", event_code), &[])?;
        Ok(list.rankings)
    }

    /// Parse the API's timestamp format down to a date.
    pub fn parse_date(timestamp: &str) -> Result<NaiveDate, ApiError> {
        let parsed = NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%S")?;
        Ok(parsed.date())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_date_accepts_api_timestamps() {
        let date = EventsClient::parse_date("2021-06-05T00:00:00").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2021, 6, 5).unwrap());
    }

    #[test]
    fn parse_date_rejects_bare_dates() {
        assert!(EventsClient::parse_date("2021-06-05").is_err());
    }

    #[test]
    fn client_carries_season() {
        let client = EventsClient::with_season("user", "token", 2022);
        assert_eq!(client.season(), 2022);
        assert_eq!(EventsClient::new("user", "token").season(), DEFAULT_SEASON);
    }
}
