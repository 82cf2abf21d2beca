use crate::{
    error::Result,
    model::{RawProblem, Submission},
};
use async_trait::async_trait;

#[async_trait]
pub trait ProblemService: Send + Sync + 'static {
    async fn fetch_problems(&self) -> Result<Vec<RawProblem>>;
    async fn fetch_contest_submissions(
        &self,
        contest_id: u32,
        handle: &str,
    ) -> Result<Vec<Submission>>;
}
