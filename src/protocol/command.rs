//! Menu command definitions

use std::str::FromStr;

use crate::error::DbError;

/// A parsed menu command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Open,
    ShowAll,
    Insert,
    Query,
    Update,
    Delete,
    Save,
    Sort,
    Summary,
    Stats,
    Quit,
}

impl Command {
    /// Menu lines in display order
    pub const MENU: [(&'static str, &'static str); 11] = [
        ("OPEN", "Open Database"),
        ("SHOWALL", "Show All Records"),
        ("INSERT", "Insert Record"),
        ("QUERY", "Query Record"),
        ("UPDATE", "Update Record"),
        ("DELETE", "Delete Record"),
        ("SAVE", "Save Database"),
        ("SORT", "Sort Records"),
        ("SUMMARY", "Show Summary Statistics"),
        ("STATS", "Show Operation Timings"),
        ("QUIT", "Exit Program"),
    ];
}

impl FromStr for Command {
    type Err = DbError;

    /// Only the first word counts; the rest of the line is ignored
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let word = s.split_whitespace().next().unwrap_or("").to_uppercase();

        Ok(match word.as_str() {
            "OPEN" => Command::Open,
            "SHOWALL" | "SHOW" => Command::ShowAll,
            "INSERT" => Command::Insert,
            "QUERY" => Command::Query,
            "UPDATE" => Command::Update,
            "DELETE" => Command::Delete,
            "SAVE" => Command::Save,
            "SORT" => Command::Sort,
            "SUMMARY" => Command::Summary,
            "STATS" => Command::Stats,
            "QUIT" | "EXIT" => Command::Quit,
            "" => return Err(DbError::Protocol("empty command".to_string())),
            other => return Err(DbError::Protocol(format!("unknown command '{}'", other))),
        })
    }
}
