use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::RecordStore;
use crate::errors::AppResult;
use crate::storage::SqliteStore;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the SQLite database with its `kv` and `log` tables
///  - the data version stamp
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.clone(), cli.test)?;
    let db_path = db_path.to_string_lossy().to_string();

    println!("⚙️  Initializing presensi…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Database   : {}", &db_path);

    let kv = SqliteStore::open(&db_path)?;
    let store = RecordStore::open(kv)?;

    println!(
        "✅ Database initialized at {} (data version {})",
        &db_path,
        store.version().unwrap_or_default()
    );

    store
        .backend()
        .audit("init", "", &format!("Database initialized at {}", &db_path));

    println!("🎉 presensi initialization completed!");
    Ok(())
}
