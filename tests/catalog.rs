use async_trait::async_trait;
use cforge::{
    model::{RawProblem, Submission},
    view::{ProblemCatalog, SubmissionList, ViewState},
    Catalog, Error, ProblemRepository, ProblemService, Result,
};
use std::{
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    },
    time::Duration,
};
use tokio::{sync::watch, sync::Notify, time::timeout};

fn raw(contest_id: u32, index: &str, name: &str, rating: u32, tags: &[&str]) -> RawProblem {
    RawProblem {
        contest_id: Some(contest_id),
        index: Some(index.to_string()),
        name: Some(name.to_string()),
        rating: Some(rating),
        tags: Some(tags.iter().map(|t| t.to_string()).collect()),
    }
}

fn submission(id: u64, index: &str, verdict: &str) -> Submission {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "contestId": 1325,
        "creationTimeSeconds": 1584628800,
        "problem": { "contestId": 1325, "index": index, "name": "x" },
        "programmingLanguage": "GNU C++17",
        "verdict": verdict,
        "passedTestCount": 3,
        "timeConsumedMillis": 15,
        "memoryConsumedBytes": 0
    }))
    .unwrap()
}

#[derive(Default)]
struct Judge {
    problem_calls: Arc<AtomicUsize>,
    failure: Mutex<Option<Error>>,
    gate: Option<Arc<Notify>>,
}

#[async_trait]
impl ProblemService for Judge {
    async fn fetch_problems(&self) -> Result<Vec<RawProblem>> {
        self.problem_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        if let Some(e) = self.failure.lock().unwrap().take() {
            return Err(e);
        }
        Ok(vec![
            raw(1325, "A", "EhAb AnD gCd", 1200, &["greedy"]),
            raw(4, "C", "Registration system", 2500, &["dsu", "graphs"]),
        ])
    }
    async fn fetch_contest_submissions(
        &self,
        _contest_id: u32,
        _handle: &str,
    ) -> Result<Vec<Submission>> {
        Ok(vec![
            submission(3, "A", "WRONG_ANSWER"),
            submission(2, "B", "OK"),
            submission(1, "A", "OK"),
        ])
    }
}

fn ids(problems: &Catalog) -> Vec<String> {
    problems.iter().map(|p| p.id.clone()).collect()
}

/// Waits until the filtered view holds exactly `expected`.
async fn wait_for(rx: &mut watch::Receiver<Catalog>, expected: &[&str]) {
    let wait = async {
        loop {
            if ids(&rx.borrow_and_update()) == expected {
                return;
            }
            rx.changed().await.unwrap();
        }
    };
    timeout(Duration::from_secs(5), wait)
        .await
        .expect("filtered view never reached the expected problems");
}

#[tokio::test]
async fn load_publishes_catalog_and_resets_view() {
    let catalog = ProblemCatalog::new(ProblemRepository::new(Judge::default()));
    assert_eq!(*catalog.state().borrow(), ViewState::Idle);

    catalog.load(false).await;
    match &*catalog.state().borrow() {
        ViewState::Loaded(p) => assert_eq!(ids(p), vec!["1325A", "4C"]),
        other => panic!("unexpected state {:?}", other),
    }
    assert_eq!(ids(&catalog.filtered().borrow()), vec!["1325A", "4C"]);
    assert_eq!(catalog.tags(), vec!["dsu", "graphs", "greedy"]);
}

#[tokio::test]
async fn filters_the_loaded_catalog() {
    let catalog = ProblemCatalog::new(ProblemRepository::new(Judge::default()));
    catalog.load(false).await;
    let mut rx = catalog.filtered();

    catalog.filter("25", None);
    wait_for(&mut rx, &["1325A", "4C"]).await;
    catalog.filter("", Some(String::from("dsu")));
    wait_for(&mut rx, &["4C"]).await;
    catalog.filter("xyz", None);
    wait_for(&mut rx, &[]).await;
    catalog.filter("", None);
    wait_for(&mut rx, &["1325A", "4C"]).await;
}

#[tokio::test]
async fn latest_filter_wins() {
    let catalog = ProblemCatalog::new(ProblemRepository::new(Judge::default()));
    catalog.load(false).await;
    let mut rx = catalog.filtered();

    let first = catalog.filter("ehab", None);
    let second = catalog.filter("4c", None);
    assert!(second > first);
    wait_for(&mut rx, &["4C"]).await;

    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(ids(&rx.borrow()), vec!["4C"]);
}

#[tokio::test]
async fn reload_overrides_pending_filter() {
    let catalog = ProblemCatalog::new(ProblemRepository::new(Judge::default()));
    catalog.load(false).await;
    let mut rx = catalog.filtered();
    catalog.filter("4c", None);
    catalog.load(true).await;
    wait_for(&mut rx, &["1325A", "4C"]).await;

    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(ids(&rx.borrow()), vec!["1325A", "4C"]);
}

#[tokio::test]
async fn load_is_ignored_while_loading() {
    let gate = Arc::new(Notify::new());
    let judge = Judge {
        gate: Some(Arc::clone(&gate)),
        ..Judge::default()
    };
    let calls = Arc::clone(&judge.problem_calls);
    let catalog = ProblemCatalog::new(ProblemRepository::new(judge));
    let mut state = catalog.state();

    let second = async {
        while !state.borrow_and_update().is_loading() {
            state.changed().await.unwrap();
        }
        catalog.load(true).await;
        assert!(catalog.state().borrow().is_loading());
        gate.notify_one();
    };
    tokio::join!(catalog.load(false), second);

    assert!(matches!(*catalog.state().borrow(), ViewState::Loaded(_)));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn dropped_load_can_be_retried() {
    let gate = Arc::new(Notify::new());
    let judge = Judge {
        gate: Some(Arc::clone(&gate)),
        ..Judge::default()
    };
    let calls = Arc::clone(&judge.problem_calls);
    let catalog = ProblemCatalog::new(ProblemRepository::new(judge));

    assert!(timeout(Duration::from_millis(20), catalog.load(false))
        .await
        .is_err());
    assert_eq!(
        *catalog.state().borrow(),
        ViewState::Failed(Error::Interrupted.to_string())
    );

    gate.notify_one();
    tokio::time::sleep(Duration::from_millis(50)).await;
    catalog.load(false).await;
    match &*catalog.state().borrow() {
        ViewState::Loaded(p) => assert_eq!(ids(p), vec!["1325A", "4C"]),
        other => panic!("unexpected state {:?}", other),
    }
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn failed_load_reports_message() {
    let judge = Judge::default();
    *judge.failure.lock().unwrap() = Some(Error::Api(String::from("Call limit exceeded")));
    let catalog = ProblemCatalog::new(ProblemRepository::new(judge));

    catalog.load(false).await;
    assert_eq!(
        *catalog.state().borrow(),
        ViewState::Failed(String::from("Codeforces API Error: Call limit exceeded"))
    );
    assert!(catalog.problems().is_empty());

    catalog.load(false).await;
    assert!(matches!(*catalog.state().borrow(), ViewState::Loaded(_)));
}

#[tokio::test]
async fn submissions_keep_only_the_problem() {
    let list = SubmissionList::new(ProblemRepository::new(Judge::default()));
    match list.load(1325, "A", "tourist").await {
        ViewState::Loaded(v) => {
            assert_eq!(v.iter().map(|s| s.id).collect::<Vec<_>>(), vec![3, 1]);
            assert_eq!(v[0].failed_test(), Some(4));
        }
        other => panic!("unexpected state {:?}", other),
    }
    assert!(matches!(*list.state().borrow(), ViewState::Loaded(_)));
}

#[tokio::test]
async fn submissions_need_a_handle() {
    let list = SubmissionList::new(ProblemRepository::new(Judge::default()));
    let state = list.load(1325, "A", "").await;
    assert!(matches!(state, ViewState::Failed(ref m) if m.starts_with("Not signed in")));
    assert_eq!(*list.state().borrow(), state);
}
