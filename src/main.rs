extern crate clap;
extern crate pretty_env_logger;
extern crate termcolor;
extern crate tokio;

use cforge::{
    profile::Profile,
    view::{ProblemCatalog, SubmissionList},
    Codeforces, ProblemRepository,
};
use clap::{crate_description, crate_name, value_parser, Arg, Command};
use pretty_env_logger::init_timed;
use std::{io::Write, path::PathBuf};
use termcolor::{ColorChoice, StandardStream, WriteColor};

#[macro_use]
mod color;
mod command {
    pub mod problem;
    pub mod profile;
}
mod read;
mod write;

use command::{
    problem::{load, search, submissions, tags},
    profile::{contests, load_profile, set_handle, show_profile},
};
use read::read_line;

#[allow(unused_must_use)]
#[tokio::main]
async fn main() {
    init_timed();
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    let app = Command::new(crate_name!())
        .about(crate_description!())
        .version(get_version!("version"))
        .long_version(get_version!("long_version"))
        .arg(
            Arg::new("profile")
                .help("Path to profile file holding the handle")
                .takes_value(true)
                .env("CFORGE_PROFILE")
                .value_parser(value_parser!(PathBuf)),
        )
        .get_matches();
    let path = app.get_one::<PathBuf>("profile").cloned();
    let mut profile = match &path {
        Some(p) if p.exists() => load_profile(&mut stdout, p),
        _ => Profile::default(),
    };
    stdout.reset();

    let client = match Codeforces::new() {
        Ok(c) => c,
        Err(e) => {
            write_error!(&mut stdout, "Error", "Error create client: {}", e);
            stdout.reset();
            return;
        }
    };
    let repository = ProblemRepository::new(client.clone());
    let catalog = ProblemCatalog::new(repository.clone());
    let attempts = SubmissionList::new(repository);
    loop {
        let line = match read_line(&mut stdout, b"cforge> ") {
            Some(v) => v,
            None => break,
        };
        match line.trim() {
            "problems" => load(&mut stdout, &catalog, false).await,
            "refresh" => load(&mut stdout, &catalog, true).await,
            "search" => search(&mut stdout, &catalog).await,
            "tags" => tags(&mut stdout, &catalog),
            "submissions" => submissions(&mut stdout, &attempts, &profile).await,
            "contests" => contests(&mut stdout, &client).await,
            "profile" => show_profile(&mut stdout, &client, &profile).await,
            "handle" => set_handle(&mut stdout, &mut profile, path.as_deref()),
            "exit" => break,
            "" => (),
            unknown => write_error!(
                &mut stdout,
                "Error",
                r#"cforge: unknown command "{}""#,
                unknown
            ),
        }
        stdout.reset();
    }
    stdout.reset();
}
