//! User-facing console messages.
//! Labels are colored only on a TTY. Everything except [`print_user`] is muted in
//! silent mode; the log file still records what happened.

use owo_colors::{AnsiColors, OwoColorize};
use std::sync::atomic::{AtomicBool, Ordering};

static SILENT: AtomicBool = AtomicBool::new(false);

pub fn set_silent(silent: bool) {
    SILENT.store(silent, Ordering::Relaxed);
}

pub fn is_silent() -> bool {
    SILENT.load(Ordering::Relaxed)
}

#[derive(Clone, Copy)]
enum Stream {
    Stdout,
    Stderr,
}

fn emit(stream: Stream, label: &str, color: AnsiColors, msg: &str) {
    if is_silent() {
        return;
    }
    let tty = match stream {
        Stream::Stdout => atty::is(atty::Stream::Stdout),
        Stream::Stderr => atty::is(atty::Stream::Stderr),
    };
    let line = if tty {
        format!("{} {msg}", label.color(color).bold())
    } else {
        format!("{label} {msg}")
    };
    match stream {
        Stream::Stdout => println!("{line}"),
        Stream::Stderr => eprintln!("{line}"),
    }
}

pub fn print_info(msg: &str) {
    emit(Stream::Stdout, "info:", AnsiColors::Cyan, msg);
}

pub fn print_success(msg: &str) {
    emit(Stream::Stdout, "ok:", AnsiColors::Green, msg);
}

pub fn print_warn(msg: &str) {
    emit(Stream::Stderr, "warn:", AnsiColors::Yellow, msg);
}

pub fn print_error(msg: &str) {
    emit(Stream::Stderr, "error:", AnsiColors::Red, msg);
}

/// Plain line with no prefix, for output meant to be piped (e.g. the sample config).
pub fn print_user(msg: &str) {
    println!("{msg}");
}
