use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, fmt};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    Failed,
    Ok,
    Partial,
    CompilationError,
    RuntimeError,
    WrongAnswer,
    PresentationError,
    TimeLimitExceeded,
    MemoryLimitExceeded,
    IdlenessLimitExceeded,
    SecurityViolated,
    Crashed,
    InputPreparationCrashed,
    Challenged,
    Skipped,
    Testing,
    Rejected,
    #[serde(other)]
    Unknown,
}
impl Verdict {
    pub fn is_accepted(self) -> bool {
        self == Self::Ok
    }
    pub fn is_pending(self) -> bool {
        self == Self::Testing
    }
    /// Judging stopped on a concrete test.
    pub fn fails_on_test(self) -> bool {
        matches!(
            self,
            Self::WrongAnswer
                | Self::RuntimeError
                | Self::PresentationError
                | Self::TimeLimitExceeded
                | Self::MemoryLimitExceeded
                | Self::IdlenessLimitExceeded
                | Self::SecurityViolated
        )
    }
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Failed => "Failed",
            Self::Ok => "Accepted",
            Self::Partial => "Partial",
            Self::CompilationError => "Compilation Error",
            Self::RuntimeError => "Runtime Error",
            Self::WrongAnswer => "Wrong Answer",
            Self::PresentationError => "Presentation Error",
            Self::TimeLimitExceeded => "Time Limit Exceeded",
            Self::MemoryLimitExceeded => "Memory Limit Exceeded",
            Self::IdlenessLimitExceeded => "Idleness Limit Exceeded",
            Self::SecurityViolated => "Security Violated",
            Self::Crashed => "Crashed",
            Self::InputPreparationCrashed => "Input Preparation Crashed",
            Self::Challenged => "Hacked",
            Self::Skipped => "Skipped",
            Self::Testing => "Testing",
            Self::Rejected => "Rejected",
            Self::Unknown => "Unknown",
        }
    }
}
impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionProblem {
    pub contest_id: Option<u32>,
    pub index: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: u64,
    pub contest_id: Option<u32>,
    pub creation_time_seconds: i64,
    pub problem: SubmissionProblem,
    #[serde(default)]
    pub programming_language: String,
    /// Absent while the submission waits in the queue.
    pub verdict: Option<Verdict>,
    #[serde(default)]
    pub passed_test_count: u32,
    #[serde(default)]
    pub time_consumed_millis: u64,
    #[serde(default)]
    pub memory_consumed_bytes: u64,
}
impl Submission {
    pub fn problem_id(&self) -> String {
        let contest = self.problem.contest_id.or(self.contest_id).unwrap_or(0);
        format!("{}{}", contest, self.problem.index)
    }
    pub fn created_at(&self) -> DateTime<Utc> {
        Utc.timestamp_opt(self.creation_time_seconds, 0)
            .single()
            .unwrap_or_default()
    }
    /// Number of the test the submission failed on, if judging stopped on one.
    pub fn failed_test(&self) -> Option<u32> {
        match self.verdict {
            Some(v) if v.fails_on_test() => Some(self.passed_test_count + 1),
            _ => None,
        }
    }
}

pub fn solved_count(submissions: &[Submission]) -> usize {
    submissions
        .iter()
        .filter(|s| s.verdict.map_or(false, Verdict::is_accepted))
        .map(Submission::problem_id)
        .collect::<HashSet<_>>()
        .len()
}
