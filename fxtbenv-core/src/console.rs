use std::env;
use std::io::{self, IsTerminal, Write};
use std::path::Path;
use std::sync::OnceLock;
use std::time::Instant;

static START_TIME: OnceLock<Instant> = OnceLock::new();

#[derive(Clone, Copy)]
enum Stream {
    Stdout,
    Stderr,
}

fn no_color() -> bool {
    static NO_COLOR: OnceLock<bool> = OnceLock::new();
    *NO_COLOR.get_or_init(|| env::var_os("NO_COLOR").is_some())
}

fn use_color(stream: Stream) -> bool {
    static STDOUT_TTY: OnceLock<bool> = OnceLock::new();

    if no_color() {
        return false;
    }

    match stream {
        Stream::Stdout => *STDOUT_TTY.get_or_init(|| io::stdout().is_terminal()),
        Stream::Stderr => is_tty(),
    }
}

fn is_tty() -> bool {
    static IS_TTY: OnceLock<bool> = OnceLock::new();
    *IS_TTY.get_or_init(|| io::stderr().is_terminal())
}

fn paint(stream: Stream, code: &str, text: &str) -> String {
    if use_color(stream) {
        format!("\u{1b}[{}m{}\u{1b}[0m", code, text)
    } else {
        text.to_string()
    }
}

fn dim(stream: Stream, text: &str) -> String {
    paint(stream, "2", text)
}

fn green(stream: Stream, text: &str) -> String {
    paint(stream, "32", text)
}

fn yellow(stream: Stream, text: &str) -> String {
    paint(stream, "33", text)
}

fn red(stream: Stream, text: &str) -> String {
    paint(stream, "31", text)
}

pub fn header(command: &str, version: &str) {
    START_TIME.get_or_init(Instant::now);
    eprintln!("{}", dim(Stream::Stderr, &format!("fxtbenv {} v{}", command, version)));
    eprintln!();
}

pub fn step(message: &str) {
    if is_tty() {
        eprint!("\r\u{1b}[K{}\n", dim(Stream::Stderr, message));
        let _ = io::stderr().flush();
    } else {
        eprintln!("{}", dim(Stream::Stderr, message));
    }
}

pub fn created(path: &Path) {
    eprintln!("{} {}", dim(Stream::Stderr, "create"), path.display());
}

pub fn installed(product: &str, version: &str, path: &Path) {
    let mark = green(Stream::Stdout, "+");
    let elapsed = START_TIME
        .get()
        .map(|t| t.elapsed().as_secs_f32())
        .unwrap_or(0.0);
    println!(
        "{} {} {} {} {}",
        mark,
        product,
        version,
        dim(Stream::Stdout, &path.display().to_string()),
        dim(Stream::Stdout, &format!("[{:.2}s]", elapsed))
    );
}

pub fn warn(message: &str) {
    let tag = yellow(Stream::Stderr, "warn");
    eprintln!("{} {}", tag, message);
}

pub fn error(message: &str) {
    let tag = red(Stream::Stderr, "error");
    eprintln!("{} {}", tag, message);
}

pub fn info(message: &str) {
    println!("{}", message);
}
