use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use presensi::core::RecordStore;
use presensi::storage::SqliteStore;
use std::fs;

mod common;
use common::{
    init_db, init_db_with_data, rti, roll_fixture, setup_test_db, signature_script, temp_out,
    write_xlsx, Cell,
};

fn first_visitor_id(db_path: &str) -> String {
    let store = RecordStore::open(SqliteStore::open(db_path).expect("open db")).expect("store");
    store.visitors()[0].id.clone()
}

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("cli_init");

    rti()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"))
        .stdout(contains("data version 1.0.0"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_attendance_list_filters() {
    let db_path = setup_test_db("cli_attendance_list");
    init_db_with_data(&db_path);

    rti()
        .args(["--db", &db_path, "attendance", "list", "--name", "SITI"])
        .assert()
        .success()
        .stdout(contains("Siti Aminah"))
        .stdout(contains("Joko").not());

    rti()
        .args([
            "--db",
            &db_path,
            "presensi",
            "list",
            "--category",
            "pegawai",
            "--date",
            "2025-09-02",
        ])
        .assert()
        .success()
        .stdout(contains("Joko"))
        .stdout(contains("Siti Aminah").not());

    rti()
        .args(["--db", &db_path, "attendance", "list", "--date", "2030-01-01"])
        .assert()
        .success()
        .stdout(contains("No attendance entries."));
}

#[test]
fn test_attendance_add_without_name_saves_nothing() {
    let db_path = setup_test_db("cli_attendance_empty_name");
    init_db(&db_path);

    rti()
        .args(["--db", &db_path, "attendance", "add", "--name", "   "])
        .assert()
        .success()
        .stdout(contains("nothing was saved"));

    let store = RecordStore::open(SqliteStore::open(&db_path).expect("db")).expect("store");
    assert!(store.attendance().is_empty());
}

#[test]
fn test_attendance_add_rejects_bad_date() {
    let db_path = setup_test_db("cli_attendance_bad_date");
    init_db(&db_path);

    rti()
        .args([
            "--db", &db_path, "attendance", "add", "--name", "Ani", "--date", "01/09/2025",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn test_attendance_export_csv_ignores_filters() {
    let db_path = setup_test_db("cli_attendance_csv");
    init_db_with_data(&db_path);

    let out = temp_out("cli_attendance_csv", "csv");

    rti()
        .args(["--db", &db_path, "attendance", "export", "--file", &out])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read exported csv");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "Tanggal,Waktu,Nama,Tipe,Status,Keterangan");
    assert!(lines[1].starts_with("2025-09-02,"));
    assert!(lines[1].ends_with(",Joko,pegawai,izin,\"Izin, sakit\"\"ringan\"\"\""));
    assert!(lines[2].contains("Siti Aminah,guru,hadir,"));
}

#[test]
fn test_attendance_export_json_and_xlsx() {
    let db_path = setup_test_db("cli_attendance_json_xlsx");
    init_db_with_data(&db_path);

    let json_out = temp_out("cli_attendance_json", "json");
    rti()
        .args([
            "--db", &db_path, "attendance", "export", "--format", "json", "--file", &json_out,
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&json_out).expect("read exported json");
    let value: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    assert_eq!(value.as_array().map(Vec::len), Some(2));
    assert_eq!(value[0]["nama"], "Joko");
    assert_eq!(value[1]["tipe"], "guru");

    let xlsx_out = temp_out("cli_attendance_xlsx", "xlsx");
    rti()
        .args([
            "--db", &db_path, "attendance", "export", "--format", "xlsx", "--file", &xlsx_out,
            "--force",
        ])
        .assert()
        .success()
        .stdout(contains("XLSX export completed"));

    let bytes = fs::read(&xlsx_out).expect("read xlsx");
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn test_guest_add_with_signature_and_extract_png() {
    let db_path = setup_test_db("cli_guest_signature");
    init_db(&db_path);
    let script = signature_script("cli_guest_signature");

    rti()
        .args([
            "--db",
            &db_path,
            "guest",
            "add",
            "--name",
            "Sari",
            "--org",
            "Komite Sekolah",
            "--purpose",
            "Rapat",
            "--signature",
            &script,
        ])
        .assert()
        .success()
        .stdout(contains("Visit saved: Sari (Komite Sekolah)"))
        .stdout(contains("signed"));

    let id = first_visitor_id(&db_path);
    let png_out = temp_out("cli_guest_signature", "png");

    rti()
        .args(["--db", &db_path, "tamu", "signature", "--id", &id[..8], "--out", &png_out])
        .assert()
        .success()
        .stdout(contains("Signature of Sari saved"));

    let bytes = fs::read(&png_out).expect("read png");
    assert!(bytes.starts_with(b"\x89PNG\r\n\x1a\n"));
}

#[test]
fn test_guest_without_signature_stores_empty_ttd() {
    let db_path = setup_test_db("cli_guest_no_signature");
    init_db(&db_path);

    rti()
        .args(["--db", &db_path, "guest", "add", "--name", "Budi"])
        .assert()
        .success()
        .stdout(contains("Visit saved: Budi (-)"));

    let store = RecordStore::open(SqliteStore::open(&db_path).expect("db")).expect("store");
    assert_eq!(store.visitors()[0].ttd, "");

    let id = first_visitor_id(&db_path);
    let png_out = temp_out("cli_guest_no_signature", "png");
    rti()
        .args(["--db", &db_path, "guest", "signature", "--id", &id, "--out", &png_out])
        .assert()
        .success()
        .stdout(contains("has no signature"));
    assert!(!std::path::Path::new(&png_out).exists());
}

#[test]
fn test_guest_signature_unknown_id_fails() {
    let db_path = setup_test_db("cli_guest_unknown");
    init_db(&db_path);

    rti()
        .args(["--db", &db_path, "guest", "signature", "--id", "nope", "--out", "x.png"])
        .assert()
        .failure()
        .stderr(contains("No visitor entry with id nope"));
}

#[test]
fn test_guest_list_and_export() {
    let db_path = setup_test_db("cli_guest_list");
    init_db(&db_path);

    for (name, org) in [("Budi", "Dinas Pendidikan"), ("Ani", "PT Maju, Tbk")] {
        rti()
            .args(["--db", &db_path, "guest", "add", "--name", name, "--org", org])
            .assert()
            .success();
    }

    rti()
        .args(["--db", &db_path, "guest", "list", "--query", "dinas"])
        .assert()
        .success()
        .stdout(contains("Budi"))
        .stdout(contains("Ani").not())
        .stdout(contains("1 visit"));

    let out = temp_out("cli_guest_list", "csv");
    rti()
        .args(["--db", &db_path, "guest", "export", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "Tanggal,Waktu,Nama,Instansi,Keperluan");
    assert_eq!(lines.len(), 3);
    assert!(lines[1].contains(",Ani,\"PT Maju, Tbk\","));
}

#[test]
fn test_roll_counts_and_export() {
    let db_path = setup_test_db("cli_roll");
    let file = roll_fixture("cli_roll");
    let out = temp_out("cli_roll", "csv");

    rti()
        .args([
            "--db", &db_path, "roll", "--file", &file, "--room", "all", "--set", "1002=ya",
            "--export", &out,
        ])
        .assert()
        .success()
        .stdout(contains("Total: 4  Hadir: 3  Tidak Hadir: 1"));

    let content = fs::read_to_string(&out).expect("read roll csv");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "No.,NIS,Nama,Ruang,Kelas,Keterangan,Hadir");
    assert_eq!(lines.len(), 5);
    assert!(lines[2].starts_with("2,1002,Budi,R1,"));
    assert!(lines[2].ends_with(",Hadir"));
    assert!(lines[4].ends_with(",Tidak Hadir"));
}

#[test]
fn test_roll_room_and_mark_all() {
    let db_path = setup_test_db("cli_roll_room");
    let file = roll_fixture("cli_roll_room");

    rti()
        .args(["--db", &db_path, "roll", "--file", &file, "--room", "R2", "--all", "absent"])
        .assert()
        .success()
        .stdout(contains("Citra"))
        .stdout(contains("Andi").not())
        .stdout(contains("Total: 2  Hadir: 0  Tidak Hadir: 2"));

    rti()
        .args(["--db", &db_path, "roll", "--file", &file, "--set", "9999=hadir"])
        .assert()
        .success()
        .stdout(contains("No participant with NIS 9999"));
}

#[test]
fn test_roll_rejects_malformed_assignment() {
    let db_path = setup_test_db("cli_roll_bad_set");
    let file = roll_fixture("cli_roll_bad_set");

    rti()
        .args(["--db", &db_path, "roll", "--file", &file, "--set", "1001"])
        .assert()
        .failure()
        .stderr(contains("Invalid presence value"));
}

#[test]
fn test_seating_prints_room_grid() {
    use Cell::*;
    let db_path = setup_test_db("cli_seating");
    let file = write_xlsx(
        "cli_seating",
        &["NIS", "Nama Siswa", "Ruang", "Kelas"],
        &[
            vec![Text("A1"), Text("Eka"), Text("Lab"), Text("X-1")],
            vec![Text("A2"), Text("Fajar"), Text("Lab"), Text("X-1")],
            vec![Text("B1"), Text("Gita"), Text("Aula"), Text("X-2")],
        ],
    );

    rti()
        .args(["--db", &db_path, "seating", "--file", &file])
        .assert()
        .success()
        .stdout(contains("Ruang Lab"))
        .stdout(contains("Fajar"))
        .stdout(contains("Gita").not());

    rti()
        .args(["--db", &db_path, "seating", "--file", &file, "--room", "Gudang"])
        .assert()
        .success()
        .stdout(contains("Unknown room 'Gudang'"))
        .stdout(contains("Tidak ada peserta di ruang ini."));
}

#[test]
fn test_seating_without_room_labels_prints_nothing_to_seat() {
    use Cell::*;
    let db_path = setup_test_db("cli_seating_no_rooms");
    let file = write_xlsx(
        "cli_seating_no_rooms",
        &["NIS", "Nama Siswa", "Kelas"],
        &[
            vec![Text("A1"), Text("Eka"), Text("X-1")],
            vec![Text("A2"), Text("Fajar"), Text("X-1")],
        ],
    );

    rti()
        .args(["--db", &db_path, "seating", "--file", &file])
        .assert()
        .success()
        .stdout(contains("No room labels found"))
        .stdout(contains("Unknown room").not())
        .stdout(contains("Ruang ").not())
        .stdout(contains("Fajar").not());
}

#[test]
fn test_config_print_shows_effective_settings() {
    let db_path = setup_test_db("cli_config_print");

    rti()
        .args(["--db", &db_path, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("Current configuration"))
        .stdout(contains(db_path.as_str()))
        .stdout(contains("signature:"));
}

#[cfg(unix)]
#[test]
fn test_config_edit_uses_given_editor() {
    let db_path = setup_test_db("cli_config_edit");

    rti()
        .args(["--db", &db_path, "config", "--edit", "--editor", "true"])
        .assert()
        .success()
        .stdout(contains("edited successfully using 'true'"));
}

#[cfg(unix)]
#[test]
fn test_config_edit_falls_back_to_environment_editor() {
    let db_path = setup_test_db("cli_config_edit_fallback");

    rti()
        .env("EDITOR", "true")
        .env_remove("VISUAL")
        .args([
            "--db",
            &db_path,
            "config",
            "--edit",
            "--editor",
            "/nonexistent/editor",
        ])
        .assert()
        .success()
        .stdout(contains("falling back to 'true'"))
        .stdout(contains("edited successfully using 'true'"));
}

#[test]
fn test_missing_spreadsheet_fails() {
    let db_path = setup_test_db("cli_missing_sheet");

    rti()
        .args(["--db", &db_path, "seating", "--file", "/nonexistent/peserta.xlsx"])
        .assert()
        .failure()
        .stderr(contains("I/O error"));
}

#[test]
fn test_log_print_shows_operations() {
    let db_path = setup_test_db("cli_log");
    init_db_with_data(&db_path);

    rti()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("attendance_add"));
}

#[test]
fn test_log_print_filters_by_operation() {
    let db_path = setup_test_db("cli_log_filter");
    init_db_with_data(&db_path);

    rti()
        .args(["--db", &db_path, "log", "--print", "--operation", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"))
        .stdout(contains("attendance_add").not());

    rti()
        .args(["--db", &db_path, "log", "--print", "--operation", "export"])
        .assert()
        .success()
        .stdout(contains("Internal log is empty."));
}

#[test]
fn test_log_without_database_warns() {
    let db_path = setup_test_db("cli_log_missing");

    rti()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("run `presensi init` first"));
}
