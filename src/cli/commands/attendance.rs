use crate::cli::commands::{default_file_name, open_store};
use crate::cli::parser::AttendanceAction;
use crate::config::Config;
use crate::core::{AttendanceFilter, AttendanceLogic};
use crate::errors::{AppError, AppResult};
use crate::export::{ExportLogic, Tabular, resolve_output_path};
use crate::models::{AttendanceDraft, AttendanceEntry};
use crate::ui::messages::{success, warning};
use crate::utils::{date, time};
use crate::utils::table::Table;

pub fn handle(action: &AttendanceAction, cfg: &Config) -> AppResult<()> {
    let mut store = open_store(cfg)?;

    match action {
        AttendanceAction::Add {
            name,
            category,
            status,
            date: date_arg,
            remark,
        } => {
            //
            // 1. Date (default today)
            //
            let tanggal = match date_arg {
                Some(d) => {
                    date::normalize_date(d).ok_or_else(|| AppError::InvalidDate(d.to_string()))?
                }
                None => date::today().format("%Y-%m-%d").to_string(),
            };

            //
            // 2. Validate + store
            //
            let draft = AttendanceDraft::new(name.as_str(), tanggal)
                .with_category(*category)
                .with_status(*status)
                .with_remark(remark.as_str());

            match AttendanceLogic::add(&mut store, draft, time::now())? {
                Some(entry) => {
                    success(format!(
                        "Attendance saved: {} ({}, {}) on {} at {}",
                        entry.nama,
                        entry.tipe.label(),
                        entry.status.label(),
                        entry.tanggal,
                        entry.waktu
                    ));
                    store.backend().audit(
                        "attendance_add",
                        &entry.id,
                        &format!("{} {} {}", entry.tanggal, entry.nama, entry.status.as_str()),
                    );

                    let all = AttendanceLogic::list(&store, &AttendanceFilter::new());
                    print_entries(&all);
                }
                None => warning("Name is required: nothing was saved."),
            }
        }

        AttendanceAction::List {
            name,
            category,
            date: date_arg,
        } => {
            let mut filter = AttendanceFilter::new().name(name.clone().unwrap_or_default());
            if let Some(c) = category {
                filter = filter.category(*c);
            }
            if let Some(d) = date_arg {
                let d = date::normalize_date(d).ok_or_else(|| AppError::InvalidDate(d.to_string()))?;
                filter = filter.date(d);
            }

            let rows = AttendanceLogic::list(&store, &filter);
            print_entries(&rows);
        }

        AttendanceAction::Export {
            file,
            format,
            force,
        } => {
            let path = resolve_output_path(
                file.as_deref(),
                &default_file_name("presensi", *format),
                &cfg.export_dir,
            );

            ExportLogic::export(store.attendance(), *format, &path, "Presensi", *force)?;

            store.backend().audit(
                "export",
                "attendance",
                &format!("{} entries to {}", store.attendance().len(), path.display()),
            );
        }
    }

    Ok(())
}

fn print_entries(entries: &[&AttendanceEntry]) {
    if entries.is_empty() {
        println!("No attendance entries.");
        return;
    }

    let mut table = Table::with_headers(AttendanceEntry::headers());
    for e in entries {
        table.add_row(e.to_row());
    }
    print!("{}", table.render());
    println!("{} entr{}", entries.len(), if entries.len() == 1 { "y" } else { "ies" });
}
