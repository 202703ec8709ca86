use std::{env, fs, path::Path, process};
use util::config::AppConfig;

mod runner;

#[tokio::main]
async fn main() {
    let (url, sqlite_path) = {
        let cfg = AppConfig::global();
        let sqlite_path = match &cfg.postgres {
            Some(_) => None,
            None if cfg.database_path.starts_with("sqlite:") => None,
            None => Some(cfg.database_path.clone()),
        };
        (cfg.database_url(), sqlite_path)
    };

    let args: Vec<String> = env::args().collect();
    let mode = args.get(1).map(|s| s.as_str());

    if matches!(mode, Some("clean") | Some("fresh")) {
        match &sqlite_path {
            Some(path) => remove_db_file(path),
            None => println!("Not a SQLite file database; skipping file removal"),
        }
        if mode == Some("clean") {
            return;
        }
    }

    if let Some(path) = &sqlite_path {
        create_db_dir(path);
    }

    if let Err(e) = runner::run_all_migrations(&url).await {
        eprintln!("Migration failed: {e}");
        process::exit(1);
    }
}

fn remove_db_file(path: &str) {
    let db_path = Path::new(path);
    if !db_path.exists() {
        println!("DB file does not exist: {}", db_path.display());
        return;
    }
    match fs::remove_file(db_path) {
        Ok(()) => println!("Deleted DB: {}", db_path.display()),
        Err(e) => {
            eprintln!("Failed to delete DB file {}: {e}", db_path.display());
            process::exit(1);
        }
    }
}

fn create_db_dir(path: &str) {
    if let Some(parent) = Path::new(path).parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            eprintln!("Failed to create DB directory {}: {e}", parent.display());
            process::exit(1);
        }
    }
}
