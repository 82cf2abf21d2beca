use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Contest {
    pub id: u32,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub phase: String,
    pub duration_seconds: u64,
    pub start_time_seconds: Option<i64>,
}
impl Contest {
    pub fn contest_url(&self) -> String {
        format!("https://codeforces.com/contest/{}", self.id)
    }
    pub fn registration_url(&self) -> String {
        format!("https://codeforces.com/contestRegistration/{}", self.id)
    }
    pub fn is_rated(&self) -> bool {
        self.kind.to_lowercase().contains("rated") || self.name.to_lowercase().contains("rated")
    }
    /// Contests without a scheduled start sort as if they began at the epoch.
    pub fn start_time(&self) -> DateTime<Utc> {
        Utc.timestamp_opt(self.start_time_seconds.unwrap_or(0), 0)
            .single()
            .unwrap_or_default()
    }
    pub fn duration(&self) -> String {
        let hours = self.duration_seconds / 3600;
        let minutes = (self.duration_seconds % 3600) / 60;
        format!("{}h {}m", hours, minutes)
    }
    pub fn is_upcoming(&self) -> bool {
        self.phase == "BEFORE"
    }
}

/// Contests that have not started yet, soonest first.
pub fn upcoming(contests: Vec<Contest>) -> Vec<Contest> {
    let mut ret: Vec<Contest> = contests.into_iter().filter(Contest::is_upcoming).collect();
    ret.sort_by_key(Contest::start_time);
    ret
}

pub fn search_contests<'a>(contests: &'a [Contest], text: &str) -> Vec<&'a Contest> {
    let text = text.to_lowercase();
    contests
        .iter()
        .filter(|c| text.is_empty() || c.name.to_lowercase().contains(&text))
        .collect()
}
