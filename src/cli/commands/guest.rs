use crate::cli::commands::{default_file_name, open_store};
use crate::cli::parser::GuestAction;
use crate::config::Config;
use crate::core::{RecordStore, VisitorFilter, VisitorLogic};
use crate::errors::{AppError, AppResult};
use crate::export::{ExportLogic, Tabular, resolve_output_path};
use crate::models::{VisitorEntry, VisitorForm};
use crate::signature::{SignatureScript, decode_data_uri};
use crate::storage::SqliteStore;
use crate::ui::messages::{info, success, warning};
use crate::utils::path::expand_tilde;
use crate::utils::table::Table;
use crate::utils::{date, time};
use std::fs;

/// Characters of the id shown in listings.
const SHORT_ID: usize = 8;

pub fn handle(action: &GuestAction, cfg: &Config) -> AppResult<()> {
    let mut store = open_store(cfg)?;

    match action {
        GuestAction::Add {
            name,
            org,
            purpose,
            signature,
        } => {
            let mut pad = cfg.signature.create_pad();

            if let Some(script_path) = signature {
                let script = SignatureScript::from_path(&expand_tilde(script_path))?;
                script.replay(pad.as_mut());
            }

            let form = VisitorForm::new(name.as_str())
                .with_organization(org.as_str())
                .with_purpose(purpose.as_str());

            match VisitorLogic::submit(&mut store, &form, pad.as_mut(), time::now())? {
                Some(entry) => {
                    success(format!(
                        "Visit saved: {} ({}) on {} at {}{}",
                        entry.nama,
                        if entry.instansi.is_empty() { "-" } else { entry.instansi.as_str() },
                        entry.tanggal,
                        entry.waktu,
                        if entry.has_signature() { ", signed" } else { "" }
                    ));
                    store.backend().audit(
                        "guest_add",
                        &entry.id,
                        &format!("{} {} {}", entry.tanggal, entry.nama, entry.instansi),
                    );

                    let all = VisitorLogic::list(&store, &VisitorFilter::new());
                    print_entries(&all);
                }
                None => warning("Name is required: nothing was saved."),
            }
        }

        GuestAction::List { query, date: date_arg } => {
            let mut filter = VisitorFilter::new().query(query.clone().unwrap_or_default());
            if let Some(d) = date_arg {
                let d = date::normalize_date(d).ok_or_else(|| AppError::InvalidDate(d.to_string()))?;
                filter = filter.date(d);
            }

            let rows = VisitorLogic::list(&store, &filter);
            print_entries(&rows);
        }

        GuestAction::Export {
            file,
            format,
            force,
        } => {
            let path = resolve_output_path(
                file.as_deref(),
                &default_file_name("buku_tamu", *format),
                &cfg.export_dir,
            );

            ExportLogic::export(store.visitors(), *format, &path, "Buku Tamu", *force)?;

            store.backend().audit(
                "export",
                "visitors",
                &format!("{} entries to {}", store.visitors().len(), path.display()),
            );
        }

        GuestAction::Signature { id, out } => {
            let entry = find_visitor(&store, id)?;

            if !entry.has_signature() {
                warning(format!("Visit {} has no signature.", entry.id));
                return Ok(());
            }

            let png = decode_data_uri(&entry.ttd)?;
            let path = expand_tilde(out);
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                fs::create_dir_all(parent)?;
            }
            fs::write(&path, png)?;

            success(format!("Signature of {} saved to {}", entry.nama, path.display()));
            store
                .backend()
                .audit("signature", &entry.id, &format!("saved to {}", path.display()));
        }
    }

    Ok(())
}

/// Look a visit up by full id or by a unique id prefix.
fn find_visitor<'a>(store: &'a RecordStore<SqliteStore>, id: &str) -> AppResult<&'a VisitorEntry> {
    if let Some(e) = store.find_visitor(id) {
        return Ok(e);
    }

    let matches: Vec<&VisitorEntry> = store
        .visitors()
        .iter()
        .filter(|v| !id.is_empty() && v.id.starts_with(id))
        .collect();

    match matches.as_slice() {
        [only] => Ok(*only),
        [] => Err(AppError::UnknownEntry(id.to_string())),
        _ => {
            info(format!("{} visits share the prefix '{}'.", matches.len(), id));
            Err(AppError::UnknownEntry(id.to_string()))
        }
    }
}

fn print_entries(entries: &[&VisitorEntry]) {
    if entries.is_empty() {
        println!("No visits recorded.");
        return;
    }

    let mut headers = vec!["ID"];
    headers.extend_from_slice(VisitorEntry::headers());
    headers.push("TTD");

    let mut table = Table::with_headers(&headers);
    for e in entries {
        let mut row = vec![e.id.chars().take(SHORT_ID).collect::<String>()];
        row.extend(e.to_row());
        row.push(if e.has_signature() { "✓" } else { "-" }.to_string());
        table.add_row(row);
    }
    print!("{}", table.render());
    println!("{} visit{}", entries.len(), if entries.len() == 1 { "" } else { "s" });
}
