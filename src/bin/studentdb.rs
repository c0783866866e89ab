//! studentdb Shell Binary
//!
//! Starts the interactive menu for the student database.

use std::io;

use clap::Parser;
use studentdb::config::OverflowPolicy;
use studentdb::shell::Shell;
use studentdb::{Config, Database};
use tracing_subscriber::{fmt, EnvFilter};

/// studentdb
#[derive(Parser, Debug)]
#[command(name = "studentdb")]
#[command(about = "Menu-driven student record database")]
#[command(version)]
struct Args {
    /// Snapshot file read by OPEN and written by SAVE
    #[arg(short, long, default_value = "Sample-CMS.txt")]
    file: String,

    /// Audit log file
    #[arg(short, long, default_value = "audit_log.txt")]
    audit: String,

    /// Do not write an audit file
    #[arg(long)]
    no_audit: bool,

    /// Maximum number of records held in memory
    #[arg(short, long, default_value = "100")]
    capacity: usize,

    /// Number of ID index slots (must exceed capacity)
    #[arg(long, default_value = "257")]
    index_slots: usize,

    /// Refuse to open snapshots larger than capacity instead of truncating
    #[arg(long)]
    reject_overflow: bool,
}

fn main() {
    // Logs go to stderr so the menu on stdout stays readable
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,studentdb=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    tracing::info!("studentdb v{}", studentdb::VERSION);
    tracing::debug!("Snapshot file: {}", args.file);

    let mut builder = Config::builder()
        .snapshot_path(&args.file)
        .capacity(args.capacity)
        .index_slots(args.index_slots);
    builder = if args.no_audit {
        builder.no_audit_file()
    } else {
        builder.audit_path(&args.audit)
    };
    if args.reject_overflow {
        builder = builder.overflow_policy(OverflowPolicy::Reject);
    }
    let config = builder.build();

    let db = match Database::new(config) {
        Ok(db) => db,
        Err(e) => {
            tracing::error!("Failed to start database: {}", e);
            std::process::exit(1);
        }
    };

    let stdin = io::stdin();
    let mut shell = Shell::new(db, stdin.lock(), io::stdout());
    if let Err(e) = shell.run() {
        tracing::error!("Shell error: {}", e);
        std::process::exit(1);
    }
}
