use chrono::{NaiveDate, NaiveDateTime};
use presensi::core::{AttendanceFilter, AttendanceLogic, RecordStore};
use presensi::models::{AttendanceDraft, Category, Status};
use presensi::storage::MemoryStore;

fn at(day: u32, h: u32, m: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 9, day)
        .and_then(|d| d.and_hms_opt(h, m, 0))
        .expect("valid datetime")
}

fn store_with(entries: &[(&str, Category, Status, &str)]) -> RecordStore<MemoryStore> {
    let mut store = RecordStore::open(MemoryStore::new()).expect("open");
    for (i, (name, cat, status, date)) in entries.iter().enumerate() {
        AttendanceLogic::add(
            &mut store,
            AttendanceDraft::new(*name, *date)
                .with_category(*cat)
                .with_status(*status),
            at(1, 7, i as u32),
        )
        .expect("add")
        .expect("stored");
    }
    store
}

#[test]
fn test_add_prepends_and_stamps_time() {
    let mut store = store_with(&[("Ani", Category::Guru, Status::Hadir, "2025-09-01")]);

    let entry = AttendanceLogic::add(
        &mut store,
        AttendanceDraft::new("  Budi  ", "2025-09-02").with_remark("  rapat  "),
        at(2, 13, 5),
    )
    .expect("add")
    .expect("stored");

    assert_eq!(entry.nama, "Budi");
    assert_eq!(entry.keterangan, "rapat");
    assert_eq!(entry.tanggal, "2025-09-02");
    assert_eq!(entry.waktu, "13:05");
    assert_eq!(entry.tipe, Category::Guru);
    assert_eq!(entry.status, Status::Hadir);
    assert!(!entry.id.is_empty());

    assert_eq!(store.attendance().len(), 2);
    assert_eq!(store.attendance()[0].nama, "Budi");
    assert_eq!(store.attendance()[1].nama, "Ani");
}

#[test]
fn test_add_with_empty_name_is_noop() {
    let mut store = store_with(&[("Ani", Category::Guru, Status::Hadir, "2025-09-01")]);

    for name in ["", "   "] {
        let result = AttendanceLogic::add(
            &mut store,
            AttendanceDraft::new(name, "2025-09-01"),
            at(1, 8, 0),
        )
        .expect("add");
        assert!(result.is_none());
    }

    assert_eq!(store.attendance().len(), 1);
    assert_eq!(store.load::<presensi::models::AttendanceEntry>().len(), 1);
}

#[test]
fn test_add_with_empty_date_is_noop() {
    let mut store = RecordStore::open(MemoryStore::new()).expect("open");
    let result =
        AttendanceLogic::add(&mut store, AttendanceDraft::new("Ani", ""), at(1, 8, 0)).expect("add");
    assert!(result.is_none());
    assert!(store.attendance().is_empty());
}

#[test]
fn test_ids_are_unique() {
    let store = store_with(&[
        ("Ani", Category::Guru, Status::Hadir, "2025-09-01"),
        ("Ani", Category::Guru, Status::Hadir, "2025-09-01"),
        ("Ani", Category::Guru, Status::Hadir, "2025-09-01"),
    ]);
    let mut ids: Vec<&str> = store.attendance().iter().map(|e| e.id.as_str()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 3);
}

#[test]
fn test_filter_is_conjunctive() {
    let store = store_with(&[
        ("Siti Aminah", Category::Guru, Status::Hadir, "2025-09-01"),
        ("Siti Rahma", Category::Pegawai, Status::Izin, "2025-09-01"),
        ("Siti Aminah", Category::Guru, Status::Sakit, "2025-09-02"),
        ("Joko", Category::Guru, Status::Hadir, "2025-09-01"),
    ]);

    let filter = AttendanceFilter::new()
        .name("siti")
        .category(Category::Guru)
        .date("2025-09-01");
    let rows = AttendanceLogic::list(&store, &filter);

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].nama, "Siti Aminah");
    assert_eq!(rows[0].tanggal, "2025-09-01");

    for e in store.attendance() {
        let expected = e.nama.to_lowercase().contains("siti")
            && e.tipe == Category::Guru
            && e.tanggal == "2025-09-01";
        assert_eq!(filter.matches(e), expected);
    }
}

#[test]
fn test_empty_filter_matches_everything() {
    let store = store_with(&[
        ("Ani", Category::Guru, Status::Hadir, "2025-09-01"),
        ("Budi", Category::Pegawai, Status::Alpha, "2025-09-03"),
    ]);

    assert_eq!(AttendanceLogic::list(&store, &AttendanceFilter::new()).len(), 2);
    assert_eq!(
        AttendanceLogic::list(&store, &AttendanceFilter::new().date("")).len(),
        2
    );
}

#[test]
fn test_name_filter_is_case_insensitive() {
    let store = store_with(&[("Siti Aminah", Category::Guru, Status::Hadir, "2025-09-01")]);
    let rows = AttendanceLogic::list(&store, &AttendanceFilter::new().name("AMINAH"));
    assert_eq!(rows.len(), 1);
}

#[test]
fn test_csv_ignores_filters_and_escapes_values() {
    let mut store = store_with(&[
        ("Ani", Category::Guru, Status::Hadir, "2025-09-01"),
        ("Budi", Category::Pegawai, Status::Izin, "2025-09-02"),
    ]);
    AttendanceLogic::add(
        &mut store,
        AttendanceDraft::new("Citra", "2025-09-03")
            .with_status(Status::Izin)
            .with_remark("Izin, sakit\"ringan\""),
        at(3, 7, 30),
    )
    .expect("add");

    let mut out = Vec::new();
    let n = AttendanceLogic::export_csv(&store, &mut out).expect("csv");
    let csv = String::from_utf8(out).expect("utf8");
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(n, 3);
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "Tanggal,Waktu,Nama,Tipe,Status,Keterangan");
    assert_eq!(lines[1], "2025-09-03,07:30,Citra,guru,izin,\"Izin, sakit\"\"ringan\"\"\"");
    assert_eq!(lines.iter().filter(|l| l.starts_with("Tanggal")).count(), 1);
}

#[test]
fn test_csv_of_empty_store_has_only_header() {
    let store = RecordStore::open(MemoryStore::new()).expect("open");
    let mut out = Vec::new();
    AttendanceLogic::export_csv(&store, &mut out).expect("csv");
    assert_eq!(
        String::from_utf8(out).expect("utf8"),
        "Tanggal,Waktu,Nama,Tipe,Status,Keterangan\n"
    );
}

#[test]
fn test_category_and_status_codes_match_cli_values() {
    use clap::ValueEnum;

    for c in Category::value_variants() {
        assert_eq!(Category::from_str(c.as_str(), false), Ok(*c));
    }
    for s in Status::value_variants() {
        assert_eq!(Status::from_str(s.as_str(), false), Ok(*s));
    }
    assert!(Category::from_str("murid", true).is_err());
    assert_eq!(Status::Sakit.as_str(), "sakit");
}
