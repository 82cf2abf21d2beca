use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub handle: String,
    pub rank: Option<String>,
    pub rating: Option<i32>,
    pub max_rating: Option<i32>,
    pub contribution: Option<i32>,
}
impl User {
    pub fn rank_tier(&self) -> Option<RankTier> {
        self.rank.as_deref().map(RankTier::from_rank)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RatingChange {
    pub contest_id: u32,
    pub contest_name: String,
    pub handle: String,
    pub rank: u32,
    pub rating_update_time_seconds: i64,
    pub old_rating: i32,
    pub new_rating: i32,
}
impl RatingChange {
    pub fn delta(&self) -> i32 {
        self.new_rating - self.old_rating
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RankTier {
    LegendaryGrandmaster,
    Master,
    Candidate,
    Expert,
    Other,
}
impl RankTier {
    /// Order matters: "grandmaster" and "international master" both contain "master".
    pub fn from_rank(rank: &str) -> Self {
        let rank = rank.to_lowercase();
        if rank.contains("legendary grandmaster") {
            Self::LegendaryGrandmaster
        } else if rank.contains("master") {
            Self::Master
        } else if rank.contains("candidate") {
            Self::Candidate
        } else if rank.contains("expert") {
            Self::Expert
        } else {
            Self::Other
        }
    }
}
