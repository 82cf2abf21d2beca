use serde::{Deserialize, Serialize};
use std::fmt;

/// A problem record as the api sends it. Every field may be missing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RawProblem {
    pub contest_id: Option<u32>,
    pub index: Option<String>,
    pub name: Option<String>,
    pub rating: Option<u32>,
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProblemSet {
    pub(crate) problems: Vec<RawProblem>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Problem {
    pub id: String,
    pub contest_id: u32,
    pub index: String,
    pub title: String,
    pub rating: Option<u32>,
    pub tags: Vec<String>,
}
impl Problem {
    pub fn new(
        contest_id: u32,
        index: impl Into<String>,
        title: impl Into<String>,
        rating: Option<u32>,
        tags: Vec<String>,
    ) -> Self {
        let index = index.into();
        Problem {
            id: format!("{}{}", contest_id, index),
            contest_id,
            index,
            title: title.into(),
            rating,
            tags,
        }
    }
    pub fn from_raw(raw: RawProblem) -> Option<Self> {
        Some(Self::new(
            raw.contest_id?,
            raw.index?,
            raw.name?,
            raw.rating,
            raw.tags?,
        ))
    }
    pub fn url(&self) -> String {
        format!(
            "https://codeforces.com/contest/{}/problem/{}",
            self.contest_id, self.index
        )
    }
    pub fn difficulty(&self) -> Option<Difficulty> {
        self.rating.map(Difficulty::from_rating)
    }
}
impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.id, self.title)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}
impl Difficulty {
    pub fn from_rating(rating: u32) -> Self {
        match rating {
            0..=999 => Self::Beginner,
            1000..=1499 => Self::Intermediate,
            1500..=1999 => Self::Advanced,
            _ => Self::Expert,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(contest_id: Option<u32>, index: Option<&str>) -> RawProblem {
        RawProblem {
            contest_id,
            index: index.map(String::from),
            name: Some("Ehab and xor".to_string()),
            rating: Some(1200),
            tags: Some(vec!["greedy".to_string()]),
        }
    }

    #[test]
    fn id_joins_contest_and_index() {
        let problem = Problem::from_raw(raw(Some(1325), Some("A"))).unwrap();
        assert_eq!(problem.id, "1325A");
        assert_eq!(problem.title, "Ehab and xor");
        assert_eq!(problem.url(), "https://codeforces.com/contest/1325/problem/A");
    }

    #[test]
    fn missing_required_fields_are_rejected() {
        assert!(Problem::from_raw(raw(None, Some("A"))).is_none());
        assert!(Problem::from_raw(raw(Some(1), None)).is_none());
        let mut untagged = raw(Some(1), Some("A"));
        untagged.tags = None;
        assert!(Problem::from_raw(untagged).is_none());
    }

    #[test]
    fn unrated_problem_is_kept() {
        let mut unrated = raw(Some(4), Some("C"));
        unrated.rating = None;
        let problem = Problem::from_raw(unrated).unwrap();
        assert_eq!(problem.rating, None);
        assert_eq!(problem.difficulty(), None);
    }

    #[test]
    fn difficulty_tiers() {
        assert_eq!(Difficulty::from_rating(800), Difficulty::Beginner);
        assert_eq!(Difficulty::from_rating(1000), Difficulty::Intermediate);
        assert_eq!(Difficulty::from_rating(1999), Difficulty::Advanced);
        assert_eq!(Difficulty::from_rating(3500), Difficulty::Expert);
    }

    #[test]
    fn decodes_camel_case_record() {
        let raw: RawProblem = serde_json::from_str(
            r#"{"contestId":4,"index":"C","name":"Registration system","type":"PROGRAMMING","rating":1500,"tags":["data structures","hashing"]}"#,
        )
        .unwrap();
        assert_eq!(raw.contest_id, Some(4));
        assert_eq!(raw.tags.unwrap().len(), 2);
    }
}
