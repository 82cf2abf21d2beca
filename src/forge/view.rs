//! Observable state for front-ends: the problem list with its filtered view,
//! and the submissions of one problem.

use crate::{
    error::Error,
    filter::{all_tags, filter},
    model::Submission,
    repository::{Catalog, ProblemRepository},
    service::ProblemService,
};
use log::{debug, error};
use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc, Mutex, PoisonError,
};
use tokio::{
    sync::watch,
    task::{spawn_blocking, JoinHandle},
};

#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Loaded(T),
    Failed(String),
}
impl<T> ViewState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Hands out increasing tickets. Only the holder of the newest ticket may
/// publish its result.
#[derive(Debug, Clone, Default)]
pub struct Generation(Arc<AtomicU64>);
impl Generation {
    pub fn next(&self) -> u64 {
        self.0.fetch_add(1, Ordering::SeqCst) + 1
    }
    pub fn is_latest(&self, ticket: u64) -> bool {
        self.0.load(Ordering::SeqCst) == ticket
    }
}

/// Stores `value` unless a newer ticket was issued. The check runs under the
/// channel's lock, so a stale result can never overwrite a newer one.
fn publish<T>(dest: &watch::Sender<T>, generation: &Generation, ticket: u64, value: T) -> bool {
    dest.send_if_modified(|current| {
        if !generation.is_latest(ticket) {
            return false;
        }
        *current = value;
        true
    })
}

/// Leaves `Loading` when a load future is dropped before it settles.
struct Pending<'a, T> {
    state: &'a watch::Sender<ViewState<T>>,
    settled: bool,
}
impl<T> Pending<'_, T> {
    fn settle(&mut self, state: ViewState<T>) {
        self.settled = true;
        self.state.send_replace(state);
    }
}
impl<T> Drop for Pending<'_, T> {
    fn drop(&mut self) {
        if !self.settled {
            debug!(target: "cforge::ui", "Load dropped before it finished");
            self.state
                .send_replace(ViewState::Failed(Error::Interrupted.to_string()));
        }
    }
}

pub struct ProblemCatalog<S> {
    repository: ProblemRepository<S>,
    state: watch::Sender<ViewState<Catalog>>,
    all: watch::Sender<Catalog>,
    filtered: Arc<watch::Sender<Catalog>>,
    generation: Generation,
    filter_task: Mutex<Option<JoinHandle<()>>>,
}

impl<S: ProblemService> ProblemCatalog<S> {
    pub fn new(repository: ProblemRepository<S>) -> Self {
        let empty: Catalog = Arc::new(Vec::new());
        Self {
            repository,
            state: watch::channel(ViewState::Idle).0,
            all: watch::channel(Arc::clone(&empty)).0,
            filtered: Arc::new(watch::channel(empty).0),
            generation: Generation::default(),
            filter_task: Mutex::new(None),
        }
    }

    pub fn state(&self) -> watch::Receiver<ViewState<Catalog>> {
        self.state.subscribe()
    }
    pub fn filtered(&self) -> watch::Receiver<Catalog> {
        self.filtered.subscribe()
    }
    pub fn problems(&self) -> Catalog {
        self.all.borrow().clone()
    }
    pub fn tags(&self) -> Vec<String> {
        all_tags(&self.all.borrow())
    }

    /// Does nothing while a load is already running. A successful load
    /// resets the filtered view to the whole catalog.
    pub async fn load(&self, force_refresh: bool) {
        let started = self.state.send_if_modified(|state| {
            if state.is_loading() {
                return false;
            }
            *state = ViewState::Loading;
            true
        });
        if !started {
            debug!(target: "cforge::ui", "Problems are already loading");
            return;
        }
        let mut pending = Pending {
            state: &self.state,
            settled: false,
        };
        debug!(target: "cforge::ui", "Loading problems (force: {})", force_refresh);
        let state = match self.repository.get_problems(force_refresh).await {
            Ok(problems) => {
                debug!(target: "cforge::ui", "Problems loaded. Count: {}", problems.len());
                self.all.send_replace(Arc::clone(&problems));
                // a filter scheduled before the load must not overwrite the reset
                let ticket = self.generation.next();
                publish(&*self.filtered, &self.generation, ticket, Arc::clone(&problems));
                ViewState::Loaded(problems)
            }
            Err(e) => {
                error!(target: "cforge::ui", "Load error: {}", e);
                ViewState::Failed(e.to_string())
            }
        };
        pending.settle(state);
    }

    /// Schedules filtering of the last loaded catalog off the async workers.
    /// Any earlier pending filter is cancelled and its result discarded.
    pub fn filter(&self, query: impl Into<String>, tag: Option<String>) -> u64 {
        let query = query.into();
        let ticket = self.generation.next();
        let source = self.problems();
        let generation = self.generation.clone();
        let filtered = Arc::clone(&self.filtered);
        let task = tokio::spawn(async move {
            let result = spawn_blocking(move || filter(&source, &query, tag.as_deref())).await;
            match result {
                Ok(result) => {
                    let count = result.len();
                    if publish(&*filtered, &generation, ticket, Arc::new(result)) {
                        debug!(target: "cforge::ui", "Filter applied. Count: {}", count);
                    } else {
                        debug!(target: "cforge::ui", "Filter {} superseded", ticket);
                    }
                }
                Err(e) => error!(target: "cforge::ui", "Filter task failed: {}", e),
            }
        });
        let previous = self
            .filter_task
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .replace(task);
        if let Some(previous) = previous {
            previous.abort();
        }
        ticket
    }
}

pub struct SubmissionList<S> {
    repository: ProblemRepository<S>,
    state: watch::Sender<ViewState<Vec<Submission>>>,
}

impl<S: ProblemService> SubmissionList<S> {
    pub fn new(repository: ProblemRepository<S>) -> Self {
        Self {
            repository,
            state: watch::channel(ViewState::Idle).0,
        }
    }
    pub fn state(&self) -> watch::Receiver<ViewState<Vec<Submission>>> {
        self.state.subscribe()
    }

    pub async fn load(
        &self,
        contest_id: u32,
        index: &str,
        handle: &str,
    ) -> ViewState<Vec<Submission>> {
        if handle.is_empty() {
            let state = ViewState::Failed(String::from(
                "Not signed in. Set a handle to see your attempts.",
            ));
            self.state.send_replace(state.clone());
            return state;
        }
        self.state.send_replace(ViewState::Loading);
        let mut pending = Pending {
            state: &self.state,
            settled: false,
        };
        debug!(
            target: "cforge::ui",
            "Fetching submissions for {} in contest {}", handle, contest_id
        );
        let state = match self
            .repository
            .get_contest_submissions(contest_id, handle)
            .await
        {
            Ok(list) => {
                let list: Vec<Submission> = list
                    .into_iter()
                    .filter(|s| s.problem.index == index)
                    .collect();
                debug!(target: "cforge::ui", "Loaded {} submissions", list.len());
                ViewState::Loaded(list)
            }
            Err(e) => {
                error!(target: "cforge::ui", "Submissions error: {}", e);
                ViewState::Failed(e.to_string())
            }
        };
        pending.settle(state.clone());
        state
    }
}
