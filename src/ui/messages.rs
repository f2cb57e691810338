//! Colored one-line status messages.
//!
//! Set `NO_COLOR` to get plain text (the icons stay).

use ansi_term::{Colour, Style};
use std::env;
use std::fmt;
use std::sync::OnceLock;

const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

fn color_enabled() -> bool {
    static ENABLED: OnceLock<bool> = OnceLock::new();
    *ENABLED.get_or_init(|| env::var_os("NO_COLOR").is_none_or(|v| v.is_empty()))
}

/// Bold, colored icon followed by the plain message.
fn line<T: fmt::Display>(colour: Colour, icon: &str, msg: T) -> String {
    if color_enabled() {
        format!("{} {}", colour.bold().paint(icon), msg)
    } else {
        format!("{icon} {msg}")
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", line(Colour::Blue, ICON_INFO, msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", line(Colour::Green, ICON_OK, msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", line(Colour::Yellow, ICON_WARN, msg));
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", line(Colour::Red, ICON_ERR, msg));
}

/// Section title, e.g. the room shown by `seating` and `roll`.
pub fn header<T: fmt::Display>(msg: T) {
    let text = format!("====================== {msg}");
    if color_enabled() {
        println!("{}\n", Style::new().bold().fg(Colour::Blue).paint(text));
    } else {
        println!("{text}\n");
    }
}
