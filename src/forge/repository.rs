use crate::{
    cache::Snapshot,
    config::cache::TTL,
    error::{Error, Result},
    model::{Problem, RawProblem, Submission},
    service::ProblemService,
};
use futures::future::{BoxFuture, FutureExt, Shared};
use log::{debug, error};
use std::sync::Arc;
use tokio::sync::Mutex;

pub type Catalog = Arc<Vec<Problem>>;
type SharedFetch = Shared<BoxFuture<'static, Result<Catalog>>>;

struct State {
    snapshot: Option<Snapshot<Vec<Problem>>>,
    ongoing: Option<SharedFetch>,
}

/// Serves the problem catalog from memory, refreshing it at most every `TTL`
/// with at most one fetch in flight.
pub struct ProblemRepository<S> {
    service: Arc<S>,
    state: Arc<Mutex<State>>,
}

impl<S> Clone for ProblemRepository<S> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
            state: Arc::clone(&self.state),
        }
    }
}

pub fn ingest(raw: Vec<RawProblem>) -> Vec<Problem> {
    let total = raw.len();
    let ret: Vec<Problem> = raw.into_iter().filter_map(Problem::from_raw).collect();
    if ret.len() != total {
        debug!(
            target: "cforge::cache",
            "Skipped {} problems with missing fields",
            total - ret.len()
        );
    }
    ret
}

impl<S: ProblemService> ProblemRepository<S> {
    pub fn new(service: S) -> Self {
        Self {
            service: Arc::new(service),
            state: Arc::new(Mutex::new(State {
                snapshot: None,
                ongoing: None,
            })),
        }
    }

    /// Returns the cached catalog while it is fresh, otherwise joins the
    /// running fetch or starts one. `force_refresh` skips the freshness check
    /// but still joins a running fetch.
    pub async fn get_problems(&self, force_refresh: bool) -> Result<Catalog> {
        let fetch = {
            let mut state = self.state.lock().await;
            if !force_refresh {
                if let Some(snapshot) = &state.snapshot {
                    if snapshot.is_fresh(TTL) {
                        debug!(target: "cforge::cache", "Returning problems from cache");
                        return Ok(snapshot.value());
                    }
                    debug!(target: "cforge::cache", "Cache expired. Fetching fresh data.");
                }
            }
            // a finished fetch still registered here died before it could clear itself
            match state.ongoing.clone().filter(|fetch| fetch.peek().is_none()) {
                Some(fetch) => {
                    debug!(target: "cforge::network", "Joining ongoing problems fetch");
                    fetch
                }
                None => {
                    let fetch = self.spawn_fetch();
                    state.ongoing = Some(fetch.clone());
                    fetch
                }
            }
        };
        fetch.await
    }

    /// Must be called with the state lock held: the task takes the same lock
    /// to publish its result, so it cannot finish before `ongoing` is set.
    fn spawn_fetch(&self) -> SharedFetch {
        let service = Arc::clone(&self.service);
        let state = Arc::clone(&self.state);
        debug!(target: "cforge::network", "Starting problems fetch");
        let task = tokio::spawn(async move {
            let result = service.fetch_problems().await.map(ingest).map(Arc::new);
            let mut state = state.lock().await;
            state.ongoing = None;
            match &result {
                Ok(problems) => {
                    debug!(target: "cforge::cache", "Cached {} problems", problems.len());
                    state.snapshot = Some(Snapshot::new(Arc::clone(problems)));
                }
                Err(e) => error!(target: "cforge::network", "Problems fetch failed: {}", e),
            }
            result
        });
        task.map(|joined| {
            joined.unwrap_or_else(|e| {
                error!(target: "cforge::network", "Problems fetch task died: {}", e);
                Err(Error::Interrupted)
            })
        })
        .boxed()
        .shared()
    }

    /// Always asks the service; submissions are never cached.
    pub async fn get_contest_submissions(
        &self,
        contest_id: u32,
        handle: &str,
    ) -> Result<Vec<Submission>> {
        self.service
            .fetch_contest_submissions(contest_id, handle)
            .await
    }
}
