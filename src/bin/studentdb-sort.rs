//! studentdb Sort Tool
//!
//! Loads a snapshot and answers sort queries against it. The file is never
//! written back and nothing is audited.

use std::io;

use clap::Parser;
use studentdb::shell::Shell;
use studentdb::{Config, Database};
use tracing_subscriber::{fmt, EnvFilter};

/// studentdb-sort
#[derive(Parser, Debug)]
#[command(name = "studentdb-sort")]
#[command(about = "Show snapshot records sorted by ID or mark")]
struct Args {
    /// Snapshot file to read
    #[arg(default_value = "Sample-CMS.txt")]
    file: String,
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(filter).with_writer(io::stderr).init();

    let args = Args::parse();

    let config = Config::builder()
        .snapshot_path(&args.file)
        .no_audit_file()
        .build();

    let db = match Database::new(config) {
        Ok(db) => db,
        Err(e) => {
            tracing::error!("Failed to start: {}", e);
            std::process::exit(1);
        }
    };

    let stdin = io::stdin();
    let mut shell = Shell::new(db, stdin.lock(), io::stdout());
    if let Err(e) = shell.sort_session() {
        tracing::error!("Sort session error: {}", e);
        std::process::exit(1);
    }
    println!("Goodbye.");
}
