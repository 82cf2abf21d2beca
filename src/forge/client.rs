mod api;
mod retry;

use crate::{
    config::api::{BASE_URL, BASE_URL_ENV, STATUS_COUNT, SUBMISSION_COUNT, TIMEOUT},
    error::{from_status, Error, Result},
    model::{problem::ProblemSet, Contest, RatingChange, RawProblem, Submission, User},
    service::ProblemService,
};
use async_trait::async_trait;
use log::{debug, error};
use regex::Regex;
use reqwest::{Client, RequestBuilder};
use retry::async_retry;
use serde::de::DeserializeOwned;
use std::env;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

async fn fetch<T: DeserializeOwned>(request: RequestBuilder) -> Result<T> {
    let response = request.send().await?;
    let status = response.status();
    if !status.is_success() {
        error!(target: "cforge::network", "Server error: {}", status.as_u16());
        return Err(from_status(status.as_u16()));
    }
    api::decode(&response.bytes().await?)
}

#[derive(Clone)]
pub struct Codeforces {
    client: Client,
    base: String,
    handle: Regex,
}
impl Codeforces {
    /// Uses `CFORGE_API` as base url when it is set.
    pub fn new() -> Result<Self> {
        Self::with_base_url(env::var(BASE_URL_ENV).unwrap_or_else(|_| BASE_URL.to_string()))
    }
    pub fn with_base_url(base: impl Into<String>) -> Result<Self> {
        let mut base = base.into();
        if !base.ends_with('/') {
            base.push('/');
        }
        Ok(Codeforces {
            client: Client::builder()
                .user_agent(USER_AGENT)
                .timeout(TIMEOUT)
                .build()?,
            base,
            handle: Regex::new(r"^[[:word:].\-]{1,24}$")
                .map_err(|e| Error::InvalidRequest(e.to_string()))?,
        })
    }

    fn check_handle(&self, handle: &str) -> Result<()> {
        if self.handle.is_match(handle) {
            Ok(())
        } else {
            Err(Error::InvalidRequest(format!("invalid handle {:?}", handle)))
        }
    }

    async fn call<T: DeserializeOwned>(&self, method: &str, query: &[(&str, String)]) -> Result<T> {
        let url = format!("{}{}", self.base, method);
        debug!(target: "cforge::network", "Fetching {} {:?}", url, query);
        async_retry(|| fetch(self.client.get(&url).query(query))).await
    }

    pub async fn problems(&self) -> Result<Vec<RawProblem>> {
        let set: ProblemSet = self.call("problemset.problems", &[]).await?;
        Ok(set.problems)
    }
    pub async fn contest_submissions(
        &self,
        contest_id: u32,
        handle: &str,
    ) -> Result<Vec<Submission>> {
        self.check_handle(handle)?;
        self.call(
            "contest.status",
            &[
                ("contestId", contest_id.to_string()),
                ("handle", handle.to_string()),
                ("from", String::from("1")),
                ("count", SUBMISSION_COUNT.to_string()),
            ],
        )
        .await
    }
    pub async fn contests(&self) -> Result<Vec<Contest>> {
        self.call("contest.list", &[]).await
    }
    pub async fn user_info(&self, handle: &str) -> Result<User> {
        self.check_handle(handle)?;
        let users: Vec<User> = self
            .call("user.info", &[("handles", handle.to_string())])
            .await?;
        users.into_iter().next().ok_or(Error::NoData)
    }
    pub async fn rating_history(&self, handle: &str) -> Result<Vec<RatingChange>> {
        self.check_handle(handle)?;
        let mut ret: Vec<RatingChange> = self
            .call("user.rating", &[("handle", handle.to_string())])
            .await?;
        ret.sort_by_key(|c| c.rating_update_time_seconds);
        Ok(ret)
    }
    pub async fn user_status(&self, handle: &str) -> Result<Vec<Submission>> {
        self.check_handle(handle)?;
        self.call(
            "user.status",
            &[
                ("handle", handle.to_string()),
                ("from", String::from("1")),
                ("count", STATUS_COUNT.to_string()),
            ],
        )
        .await
    }
}

#[async_trait]
impl ProblemService for Codeforces {
    async fn fetch_problems(&self) -> Result<Vec<RawProblem>> {
        self.problems().await
    }
    async fn fetch_contest_submissions(
        &self,
        contest_id: u32,
        handle: &str,
    ) -> Result<Vec<Submission>> {
        self.contest_submissions(contest_id, handle).await
    }
}
