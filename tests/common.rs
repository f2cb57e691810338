#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rust_xlsxwriter::Workbook;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rti() -> Command {
    cargo_bin_cmd!("presensi")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_presensi.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_presensi_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize a test DB (no config file is written)
pub fn init_db(db_path: &str) {
    rti()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Initialize DB and add a small attendance dataset
pub fn init_db_with_data(db_path: &str) {
    init_db(db_path);

    rti()
        .args([
            "--db",
            db_path,
            "attendance",
            "add",
            "--name",
            "Siti Aminah",
            "--category",
            "guru",
            "--status",
            "hadir",
            "--date",
            "2025-09-01",
        ])
        .assert()
        .success();

    rti()
        .args([
            "--db",
            db_path,
            "attendance",
            "add",
            "--name",
            "Joko",
            "--category",
            "pegawai",
            "--status",
            "izin",
            "--date",
            "2025-09-02",
            "--remark",
            "Izin, sakit\"ringan\"",
        ])
        .assert()
        .success();
}

/// Cell value of a participant fixture.
pub enum Cell<'a> {
    Text(&'a str),
    Number(f64),
    Bool(bool),
}

/// Build an .xlsx workbook in memory: first row headers, then data rows.
pub fn xlsx_bytes(headers: &[&str], rows: &[Vec<Cell<'_>>]) -> Vec<u8> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    for (c, h) in headers.iter().enumerate() {
        sheet.write_string(0, c as u16, *h).expect("write header");
    }

    for (r, row) in rows.iter().enumerate() {
        let r = (r + 1) as u32;
        for (c, cell) in row.iter().enumerate() {
            let c = c as u16;
            match cell {
                Cell::Text(s) => {
                    if !s.is_empty() {
                        sheet.write_string(r, c, *s).expect("write text");
                    }
                }
                Cell::Number(n) => {
                    sheet.write_number(r, c, *n).expect("write number");
                }
                Cell::Bool(b) => {
                    sheet.write_boolean(r, c, *b).expect("write bool");
                }
            }
        }
    }

    workbook.save_to_buffer().expect("save workbook")
}

/// Write a fixture spreadsheet to the temp dir and return its path.
pub fn write_xlsx(name: &str, headers: &[&str], rows: &[Vec<Cell<'_>>]) -> String {
    let path = temp_out(name, "xlsx");
    fs::write(&path, xlsx_bytes(headers, rows)).expect("write fixture");
    path
}

/// Roll fixture: two rooms, mixed presence encodings.
pub fn roll_fixture(name: &str) -> String {
    use Cell::*;
    write_xlsx(
        name,
        &["NIS", "Nama Siswa", "Ruang", "Kelas", "Ket", "Hadir"],
        &[
            vec![Number(1001.0), Text("Andi"), Text("R1"), Text("XII IPA 1"), Text(""), Text("Hadir")],
            vec![Number(1002.0), Text("Budi"), Text("R1"), Text("XII IPA 1"), Text("Sakit"), Text("Tidak")],
            vec![Number(1003.0), Text("Citra"), Text("R2"), Text("XII IPS 2"), Text(""), Bool(true)],
            vec![Number(1004.0), Text("Dewi"), Text("R2"), Text("XII IPS 2"), Text(""), Number(0.0)],
        ],
    )
}

/// A signature session drawing one diagonal stroke.
pub fn signature_script(name: &str) -> String {
    let path = temp_out(name, "json");
    let script = r#"{
        "rect": { "left": 10, "top": 20, "width": 300, "height": 110 },
        "events": [
            { "type": "pointerdown", "x": 30, "y": 40 },
            { "type": "pointermove", "x": 60, "y": 60 },
            { "type": "pointermove", "x": 120, "y": 90 },
            { "type": "pointermove", "x": 200, "y": 100 },
            { "type": "pointerup" }
        ]
    }"#;
    fs::write(&path, script).expect("write script");
    path
}
