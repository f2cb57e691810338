use crate::errors::AppResult;
use crate::storage::log::{LogRow, load_log};
use ansi_term::Colour;
use regex::Regex;
use rusqlite::Connection;
use std::sync::OnceLock;

const OP_TARGET_WIDTH: usize = 60;

fn strip_ansi(s: &str) -> String {
    static ANSI: OnceLock<Option<Regex>> = OnceLock::new();
    match ANSI.get_or_init(|| Regex::new(r"\x1B\[[0-9;]*[mK]").ok()) {
        Some(re) => re.replace_all(s, "").into_owned(),
        None => s.to_string(),
    }
}

/// ANSI color for an audit operation.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "attendance_add" => Colour::Green,
        "guest_add" => Colour::Cyan,
        "export" => Colour::Blue,
        "signature" => Colour::Yellow,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

/// Render one audit row; the operation word is colored and `op (target)` is
/// cut to 60 visible characters.
pub fn format_row(row: &LogRow, id_w: usize, date_w: usize) -> String {
    let color = color_for_operation(&row.operation);

    let date = chrono::DateTime::parse_from_rfc3339(&row.date)
        .map(|dt| dt.format("%FT%T%:z").to_string())
        .unwrap_or_else(|_| row.date.clone());

    let op_target = if row.target.is_empty() {
        row.operation.clone()
    } else {
        format!("{} ({})", row.operation, row.target)
    };

    let visible = if op_target.chars().count() > OP_TARGET_WIDTH {
        let mut s = op_target.chars().take(OP_TARGET_WIDTH - 3).collect::<String>();
        s.push_str("...");
        s
    } else {
        op_target
    };

    let recolored = match visible.split_once(' ') {
        Some((op_word, rest)) => format!("{} {}", color.paint(op_word), rest),
        None => color.paint(visible.as_str()).to_string(),
    };

    let padding = " ".repeat(OP_TARGET_WIDTH.saturating_sub(strip_ansi(&recolored).chars().count()));

    format!(
        "{:>id_w$}: {:<date_w$} | {}{} => {}",
        row.id,
        date,
        recolored,
        padding,
        row.message,
        id_w = id_w,
        date_w = date_w
    )
}

pub struct LogLogic;

impl LogLogic {
    /// Print the audit log, optionally only the rows of one operation.
    pub fn print_log(conn: &Connection, operation: Option<&str>) -> AppResult<()> {
        let entries: Vec<LogRow> = load_log(conn)?
            .into_iter()
            .filter(|r| operation.is_none_or(|op| r.operation == op))
            .collect();

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let id_w = entries
            .iter()
            .map(|r| r.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries.iter().map(|r| r.date.len()).max().unwrap_or(10);

        println!("📜 Internal log:\n");
        for row in &entries {
            println!("{}", format_row(row, id_w, date_w));
        }

        Ok(())
    }
}
