use crate::config::Config;
use crate::core::SeatingPlan;
use crate::core::roster::rooms;
use crate::errors::AppResult;
use crate::export::Tabular;
use crate::import::{ImportVariant, import_file};
use crate::models::Participant;
use crate::ui::messages::{header, info, warning};
use crate::utils::path::expand_tilde;
use crate::utils::table::Table;
use unicode_width::UnicodeWidthStr;

/// Width of one seat cell in the printed grid.
const SEAT_CELL: usize = 22;

pub fn handle(file: &str, room: Option<&str>, _cfg: &Config) -> AppResult<()> {
    let path = expand_tilde(file);
    let participants = import_file(&path, ImportVariant::Seating)?;

    if participants.is_empty() {
        warning(format!("No participants found in {}", path.display()));
        return Ok(());
    }

    let all_rooms = rooms(&participants);
    info(format!(
        "{} participants, rooms: {}",
        participants.len(),
        if all_rooms.is_empty() { "-".to_string() } else { all_rooms.join(", ") }
    ));

    let selected = match room.map(str::trim).filter(|r| !r.is_empty()) {
        Some(r) => r.to_string(),
        None => match all_rooms.first() {
            Some(first) => first.clone(),
            None => {
                warning("No room labels found: nothing to seat.");
                return Ok(());
            }
        },
    };
    if !all_rooms.contains(&selected) {
        warning(format!("Unknown room '{selected}'."));
    }

    let plan = SeatingPlan::new(&participants, &selected);
    header(format!("Ruang {}", plan.room));

    if plan.is_empty() {
        println!("Tidak ada peserta di ruang ini.");
        return Ok(());
    }

    let mut table = Table::with_headers(&Participant::headers()[..6]);
    for p in &plan.roster {
        let mut row = p.to_row();
        row.truncate(6);
        table.add_row(row);
    }
    print!("{}", table.render());

    println!();
    print!("{}", render_seats(&plan));
    Ok(())
}

/// Seat grid: one line of NIS and one line of names per row.
fn render_seats(plan: &SeatingPlan<'_>) -> String {
    let mut out = String::new();
    for row in &plan.seats {
        let nis: Vec<String> = row.iter().map(|p| cell(&p.nis)).collect();
        let names: Vec<String> = row.iter().map(|p| cell(&p.nama)).collect();
        out.push_str(&format!("| {} |\n", nis.join(" | ")));
        out.push_str(&format!("| {} |\n", names.join(" | ")));
        out.push('\n');
    }
    out
}

fn cell(text: &str) -> String {
    let mut s = String::new();
    for ch in text.chars() {
        if UnicodeWidthStr::width(s.as_str()) + 1 > SEAT_CELL {
            break;
        }
        s.push(ch);
    }
    let w = UnicodeWidthStr::width(s.as_str());
    format!("{s}{}", " ".repeat(SEAT_CELL.saturating_sub(w)))
}
