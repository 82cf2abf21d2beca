extern crate termcolor;

use regex::Regex;
use std::io::{stdin, BufRead, Write};
use termcolor::{StandardStream, WriteColor};

/// Returns `false` at end of input.
fn read_line_from<R: BufRead>(
    stdout: &mut StandardStream,
    rdr: &mut R,
    prompt: &[u8],
    dest: &mut String,
) -> bool {
    dest.clear();
    let _ = stdout.write_all(prompt);
    let _ = stdout.flush();
    match rdr.read_line(dest) {
        Ok(0) => false,
        Ok(_) => {
            dest.truncate(dest.trim_end().len());
            true
        }
        Err(e) => {
            write_error!(stdout, "Error", "Read: {}", e.to_string());
            let _ = stdout.reset();
            false
        }
    }
}
pub fn read_line(stdout: &mut StandardStream, prompt: &[u8]) -> Option<String> {
    let mut ret = String::new();
    if read_line_from(stdout, &mut stdin().lock(), prompt, &mut ret) {
        Some(ret)
    } else {
        None
    }
}
/// Empty input and end of input both read as `None`.
pub fn read_optional(stdout: &mut StandardStream, prompt: &[u8]) -> Option<String> {
    let ret = read_line(stdout, prompt)?;
    let trim = ret.trim();
    if trim.is_empty() {
        None
    } else {
        Some(trim.to_string())
    }
}

/// Splits a problem id such as `1325A` or `1512B1` into contest and index.
pub fn parse_problem_id(id: &str) -> Option<(u32, String)> {
    let regex = Regex::new(r"^([[:digit:]]+)([[:alpha:]][[:alnum:]]*)$").ok()?;
    let captures = regex.captures(id.trim())?;
    let contest = captures.get(1)?.as_str().parse().ok()?;
    Some((contest, captures.get(2)?.as_str().to_uppercase()))
}

fn problem_id_from<R: BufRead>(
    stdout: &mut StandardStream,
    rdr: &mut R,
) -> Option<(u32, String)> {
    let mut buf = String::new();
    loop {
        if !read_line_from(stdout, rdr, b"Problem (e.g. 1325A): ", &mut buf) {
            return None;
        }
        match parse_problem_id(&buf) {
            Some(v) => return Some(v),
            None => write_error!(stdout, "Error", "parse: {:?} is not a problem id", buf),
        }
        let _ = stdout.reset();
    }
}
pub fn read_problem_id(stdout: &mut StandardStream) -> Option<(u32, String)> {
    problem_id_from(stdout, &mut stdin().lock())
}
