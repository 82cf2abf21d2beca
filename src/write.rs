extern crate termcolor;

use crate::color::{difficulty_color, rank_color, reset_fg, set_fg, verdict_color};
use cforge::model::{Contest, Problem, RatingChange, Submission, User};
use std::{fmt::Display, io::Write};
use termcolor::{Color, StandardStream};

#[allow(unused_must_use)]
pub fn write_result<E: Display>(stdout: &mut StandardStream, result: Result<(), E>, success: &str) {
    match result {
        Ok(_) => write_ok!(stdout, "Success", "{}", success),
        Err(e) => write_error!(stdout, "Error", "{}", e),
    }
}

#[allow(unused_must_use)]
pub fn write_problem(stdout: &mut StandardStream, problem: &Problem) {
    write!(stdout, "{:>8} ", problem.id);
    set_fg(stdout, difficulty_color(problem.difficulty()));
    match problem.rating {
        Some(r) => write!(stdout, "{:>5}", r),
        None => write!(stdout, "{:>5}", "-"),
    };
    reset_fg(stdout);
    writeln!(
        stdout,
        "  {}  [{}]  {}",
        problem.title,
        problem.tags.join(", "),
        problem.url()
    );
}

#[allow(unused_must_use)]
pub fn write_submission(stdout: &mut StandardStream, submission: &Submission) {
    write!(
        stdout,
        "{:>10} {} {:>8} ",
        submission.id,
        submission.created_at().format("%Y-%m-%d %H:%M"),
        submission.problem_id()
    );
    set_fg(stdout, verdict_color(submission.verdict));
    match (submission.verdict, submission.failed_test()) {
        (Some(v), Some(test)) => write!(stdout, "{} on test {}", v, test),
        (Some(v), None) => write!(stdout, "{}", v),
        (None, _) => write!(stdout, "In queue"),
    };
    reset_fg(stdout);
    writeln!(
        stdout,
        "  {} ms  {} KB  {}",
        submission.time_consumed_millis,
        submission.memory_consumed_bytes / 1024,
        submission.programming_language
    );
}

#[allow(unused_must_use)]
pub fn write_contest(stdout: &mut StandardStream, contest: &Contest) {
    write!(stdout, "{:>6} ", contest.id);
    if contest.is_rated() {
        set_fg(stdout, Color::Yellow);
        write!(stdout, "rated ");
        reset_fg(stdout);
    }
    writeln!(
        stdout,
        "{}  {}  {}",
        contest.name,
        contest.start_time().format("%Y-%m-%d %H:%M UTC"),
        contest.duration()
    );
    writeln!(
        stdout,
        "       {}  register: {}",
        contest.contest_url(),
        contest.registration_url()
    );
}

#[allow(unused_must_use)]
pub fn write_user(stdout: &mut StandardStream, user: &User, solved: usize) {
    set_fg(stdout, rank_color(user.rank_tier()));
    write!(stdout, "{}", user.handle);
    reset_fg(stdout);
    writeln!(
        stdout,
        " {}  rating {} (max {})  contribution {}  solved {}",
        user.rank.as_deref().unwrap_or("unrated"),
        user.rating.map_or_else(|| String::from("-"), |r| r.to_string()),
        user.max_rating.map_or_else(|| String::from("-"), |r| r.to_string()),
        user.contribution.unwrap_or(0),
        solved
    );
}

#[allow(unused_must_use)]
pub fn write_rating_change(stdout: &mut StandardStream, change: &RatingChange) {
    let delta = change.delta();
    write!(stdout, "{:>6} {:>5} -> {:>5} ", change.contest_id, change.old_rating, change.new_rating);
    set_fg(stdout, if delta >= 0 { Color::Green } else { Color::Red });
    write!(stdout, "{:+}", delta);
    reset_fg(stdout);
    writeln!(stdout, "  #{} {}", change.rank, change.contest_name);
}
