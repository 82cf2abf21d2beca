pub mod contest;
pub mod problem;
pub mod submission;
pub mod user;

pub use contest::Contest;
pub use problem::{Difficulty, Problem, RawProblem};
pub use submission::{Submission, Verdict};
pub use user::{RankTier, RatingChange, User};
