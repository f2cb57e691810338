use crate::cli::parser::Mark;
use crate::config::Config;
use crate::core::Roll;
use crate::errors::{AppError, AppResult};
use crate::export::{ExportFormat, ExportLogic, Tabular, resolve_output_path};
use crate::import::{ImportVariant, import_file, is_truthy};
use crate::models::Participant;
use crate::ui::messages::{header, info, warning};
use crate::utils::path::expand_tilde;
use crate::utils::table::Table;
use std::path::Path;

/// Room label that selects every participant.
const ALL_ROOMS: &str = "all";

/// Options of the `roll` command.
pub struct RollArgs<'a> {
    pub file: &'a str,
    pub room: Option<&'a str>,
    pub all: Option<Mark>,
    pub set: &'a [String],
    pub export: Option<&'a str>,
    pub format: Option<ExportFormat>,
    pub force: bool,
}

pub fn handle(args: &RollArgs<'_>, cfg: &Config) -> AppResult<()> {
    let path = expand_tilde(args.file);
    let participants = import_file(&path, ImportVariant::Roll)?;

    if participants.is_empty() {
        warning(format!("No participants found in {}", path.display()));
        return Ok(());
    }

    let mut roll = Roll::new();
    roll.load(participants);

    //
    // 1. Room selection
    //
    match args.room {
        Some(r) if r.eq_ignore_ascii_case(ALL_ROOMS) => roll.select_room(None),
        Some(r) => {
            if !roll.rooms().iter().any(|x| x == r) {
                warning(format!("Unknown room '{r}'."));
            }
            roll.select_room(Some(r));
        }
        None => {}
    }

    //
    // 2. Bulk and single updates
    //
    if let Some(mark) = args.all {
        roll.set_all(mark == Mark::Present);
    }

    for assignment in args.set {
        let (nis, value) = parse_assignment(assignment)?;
        if roll.toggle(nis, is_truthy(value)) == 0 {
            warning(format!("No participant with NIS {nis}."));
        }
    }

    //
    // 3. Summary
    //
    header(format!(
        "Ruang {}",
        roll.selected_room().unwrap_or("(semua)")
    ));

    let counts = roll.counts();
    let visible: Vec<Participant> = roll.visible().into_iter().cloned().collect();

    if visible.is_empty() {
        println!("Tidak ada peserta di ruang ini.");
    } else {
        let mut table = Table::with_headers(Participant::headers());
        for p in &visible {
            table.add_row(p.to_row());
        }
        print!("{}", table.render());
    }

    info(format!(
        "Total: {}  Hadir: {}  Tidak Hadir: {}",
        counts.total, counts.present, counts.absent
    ));

    //
    // 4. Optional export
    //
    if let Some(file) = args.export {
        let default_name = Path::new(file)
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "presensi_ujian.csv".to_string());
        let out = resolve_output_path(Some(file), &default_name, &cfg.export_dir);
        let format = args.format.unwrap_or_else(|| ExportFormat::from_path(&out));

        ExportLogic::export(&visible, format, &out, "Presensi Ujian", args.force)?;
    }

    Ok(())
}

/// Split `NIS=VALUE`.
pub fn parse_assignment(assignment: &str) -> AppResult<(&str, &str)> {
    match assignment.split_once('=') {
        Some((nis, value)) if !nis.trim().is_empty() => Ok((nis.trim(), value.trim())),
        _ => Err(AppError::InvalidPresence(assignment.to_string())),
    }
}
