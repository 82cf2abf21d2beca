extern crate termcolor;

use crate::{
    read::{read_line, read_optional, read_problem_id},
    write::{write_problem, write_submission},
};
use cforge::{
    profile::Profile,
    view::{ProblemCatalog, SubmissionList, ViewState},
    Catalog, ProblemService,
};
use std::io::Write;
use termcolor::StandardStream;

const SHOWN: usize = 50;

#[allow(unused_must_use)]
fn write_problems(stdout: &mut StandardStream, problems: &Catalog) {
    for p in problems.iter().take(SHOWN) {
        write_problem(stdout, p);
    }
    if problems.len() > SHOWN {
        write_info!(stdout, "Info", "{} more problems not shown", problems.len() - SHOWN);
    }
    write_ok!(stdout, "Finish", "{} problems", problems.len());
}

#[allow(unused_must_use)]
pub async fn load<S: ProblemService>(
    stdout: &mut StandardStream,
    catalog: &ProblemCatalog<S>,
    force_refresh: bool,
) {
    write_progress!(stdout, "Loading", "Fetching problem list...");
    catalog.load(force_refresh).await;
    let state = catalog.state().borrow().clone();
    match state {
        ViewState::Loaded(problems) => write_problems(stdout, &problems),
        ViewState::Failed(e) => write_error!(stdout, "Error", "{}", e),
        ViewState::Loading => write_info!(stdout, "Info", "Problems are already loading"),
        ViewState::Idle => (),
    }
}

#[allow(unused_must_use)]
pub async fn search<S: ProblemService>(stdout: &mut StandardStream, catalog: &ProblemCatalog<S>) {
    if catalog.problems().is_empty() {
        write_error!(stdout, "Error", "No problems loaded. Run problems first");
        return;
    }
    let query = match read_line(stdout, b"Query: ") {
        Some(v) => v,
        None => return,
    };
    let tag = read_optional(stdout, b"Tag (empty for any): ");
    let mut rx = catalog.filtered();
    rx.borrow_and_update();
    catalog.filter(query.trim(), tag);
    if rx.changed().await.is_err() {
        write_error!(stdout, "Error", "Filter result was dropped");
        return;
    }
    let result = rx.borrow_and_update().clone();
    write_problems(stdout, &result);
}

#[allow(unused_must_use)]
pub fn tags<S: ProblemService>(stdout: &mut StandardStream, catalog: &ProblemCatalog<S>) {
    let tags = catalog.tags();
    if tags.is_empty() {
        write_error!(stdout, "Error", "No problems loaded. Run problems first");
    } else {
        write_info!(stdout, "Tags", "{}", tags.join(", "));
    }
}

#[allow(unused_must_use)]
pub async fn submissions<S: ProblemService>(
    stdout: &mut StandardStream,
    list: &SubmissionList<S>,
    profile: &Profile,
) {
    let (contest, index) = match read_problem_id(stdout) {
        Some(v) => v,
        None => return,
    };
    write_progress!(
        stdout,
        "Loading",
        "Submissions of {} for {}{}",
        profile.handle(),
        contest,
        index
    );
    match list.load(contest, &index, profile.handle()).await {
        ViewState::Loaded(v) if v.is_empty() => {
            write_info!(stdout, "Info", "No attempts on {}{}", contest, index)
        }
        ViewState::Loaded(v) => {
            v.iter().for_each(|s| write_submission(stdout, s));
            write_ok!(stdout, "Finish", "{} submissions", v.len());
        }
        ViewState::Failed(e) => write_error!(stdout, "Error", "{}", e),
        _ => (),
    }
}
