extern crate termcolor;

use crate::{
    read::{read_line, read_optional},
    write::{write_contest, write_rating_change, write_result, write_user},
};
use cforge::{
    model::{
        contest::{search_contests, upcoming},
        submission::solved_count,
    },
    profile::{Profile, StorageError},
    Codeforces,
};
use std::{
    fs::File,
    io::{BufReader, Write},
    path::Path,
};
use termcolor::StandardStream;

const SHOWN_CHANGES: usize = 10;

#[allow(unused_must_use)]
pub fn load_profile(stdout: &mut StandardStream, path: &Path) -> Profile {
    match File::open(path) {
        Ok(f) => match Profile::from_reader(BufReader::new(f)) {
            Ok(p) => {
                write_info!(stdout, "Info", "Signed in as {:?}", p.handle());
                p
            }
            Err(e) => {
                write_error!(stdout, "Error", "Error load profile: {}", e);
                Profile::default()
            }
        },
        Err(e) => {
            write_error!(stdout, "Error", "Error open {}: {}", path.display(), e);
            Profile::default()
        }
    }
}

fn save_profile(profile: &Profile, path: &Path) -> Result<(), String> {
    let f = File::create(path).map_err(|e| format!("Error create {}: {}", path.display(), e))?;
    profile
        .to_writer(f)
        .map_err(|e: StorageError| e.to_string())
}

#[allow(unused_must_use)]
pub fn set_handle(stdout: &mut StandardStream, profile: &mut Profile, path: Option<&Path>) {
    let handle = match read_line(stdout, b"Handle (empty to sign out): ") {
        Some(v) => v,
        None => return,
    };
    profile.set_handle(&handle);
    if profile.handle().is_empty() {
        write_info!(stdout, "Info", "Signed out");
    } else {
        write_ok!(stdout, "Success", "Signed in as {}", profile.handle());
    }
    if let Some(path) = path {
        write_result(stdout, save_profile(profile, path), "Saved profile");
    }
}

#[allow(unused_must_use)]
pub async fn show_profile(stdout: &mut StandardStream, client: &Codeforces, profile: &Profile) {
    let handle = profile.handle();
    if handle.is_empty() {
        write_error!(stdout, "Error", "Not signed in. Run handle first");
        return;
    }
    write_progress!(stdout, "Loading", "Profile of {}", handle);
    let user = match client.user_info(handle).await {
        Ok(u) => u,
        Err(e) => {
            write_error!(stdout, "Error", "user: {}", e);
            return;
        }
    };
    let solved = match client.user_status(handle).await {
        Ok(v) => solved_count(&v),
        Err(e) => {
            write_error!(stdout, "Error", "status: {}", e);
            0
        }
    };
    write_user(stdout, &user, solved);
    match client.rating_history(handle).await {
        Ok(history) => {
            let skip = history.len().saturating_sub(SHOWN_CHANGES);
            history
                .iter()
                .skip(skip)
                .for_each(|c| write_rating_change(stdout, c));
        }
        Err(e) => write_error!(stdout, "Error", "rating: {}", e),
    }
}

#[allow(unused_must_use)]
pub async fn contests(stdout: &mut StandardStream, client: &Codeforces) {
    let text = read_optional(stdout, b"Name contains (empty for all): ").unwrap_or_default();
    write_progress!(stdout, "Loading", "Fetching contest list...");
    match client.contests().await {
        Ok(list) => {
            let list = upcoming(list);
            let found = search_contests(&list, &text);
            found.iter().for_each(|c| write_contest(stdout, c));
            write_ok!(stdout, "Finish", "{} upcoming contests", found.len());
        }
        Err(e) => write_error!(stdout, "Error", "contests: {}", e),
    }
}
