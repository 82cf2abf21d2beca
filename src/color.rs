extern crate termcolor;

use cforge::model::{Difficulty, RankTier, Verdict};
use termcolor::{Color, ColorSpec, StandardStream, WriteColor};

macro_rules! get_version {
    ($file:expr) => {
        concat!(
            env!("CARGO_PKG_VERSION"),
            " ",
            include_str!(concat!(env!("OUT_DIR"), "/", $file))
        )
    };
}

pub fn set_fg(stdout: &mut StandardStream, color: Color) {
    stdout
        .set_color(ColorSpec::new().set_fg(Some(color)).set_intense(true))
        .expect("Error: can't set output color");
}
pub fn reset_fg(stdout: &mut StandardStream) {
    stdout
        .set_color(ColorSpec::new().set_fg(None).set_intense(true))
        .expect("Error: Can't reset color");
}

pub fn difficulty_color(difficulty: Option<Difficulty>) -> Color {
    match difficulty {
        None => Color::White,
        Some(Difficulty::Beginner) => Color::White,
        Some(Difficulty::Intermediate) => Color::Green,
        Some(Difficulty::Advanced) => Color::Blue,
        Some(Difficulty::Expert) => Color::Red,
    }
}
pub fn verdict_color(verdict: Option<Verdict>) -> Color {
    match verdict {
        Some(Verdict::Ok) => Color::Green,
        Some(Verdict::TimeLimitExceeded) | Some(Verdict::MemoryLimitExceeded) => Color::Yellow,
        Some(v) if v.is_pending() => Color::Cyan,
        None => Color::Cyan,
        Some(v) if v.fails_on_test() || v == Verdict::CompilationError => Color::Red,
        Some(_) => Color::White,
    }
}
pub fn rank_color(tier: Option<RankTier>) -> Color {
    match tier {
        Some(RankTier::LegendaryGrandmaster) => Color::Red,
        Some(RankTier::Master) => Color::Yellow,
        Some(RankTier::Candidate) => Color::Magenta,
        Some(RankTier::Expert) => Color::Blue,
        Some(RankTier::Other) | None => Color::Green,
    }
}

macro_rules! write_color {
    ($dest:expr, $color:expr,$typ:expr,  $($arg:tt)*) => { {
        $crate::color::set_fg($dest, $color);
        let _ = write!($dest,"{:>7}: ", $typ);
        $crate::color::reset_fg($dest);
        writeln!($dest, $($arg)*).expect("Failed to write output");
    }
    };
}

macro_rules! write_error {
    ($dest:expr,$typ:expr, $($arg:tt)*) => {
        write_color!($dest, termcolor::Color::Red, $typ, $($arg)*)
    };
}

macro_rules! write_info {
    ($dest:expr,$typ:expr, $($arg:tt)*) => {
        write_color!($dest, termcolor::Color::Blue, $typ, $($arg)*)
    };
}

macro_rules! write_ok {
    ($dest:expr,$typ:expr, $($arg:tt)*) => {
        write_color!($dest, termcolor::Color::Green, $typ, $($arg)*)
    };
}

macro_rules! write_progress {
    ($dest:expr, $typ:expr, $($arg:tt)*) => {
        write_color!($dest, termcolor::Color::Cyan, $typ, $($arg)*)
    };
}
