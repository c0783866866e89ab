//! Interactive Shell
//!
//! Menu-driven front end over a [`Database`]. Reads commands and field
//! values line by line from any `BufRead` and writes prompts and results to
//! any `Write`, so sessions can be scripted as well as typed.
//!
//! End of input behaves like `QUIT`.

use std::io::{BufRead, Write};
use std::time::Instant;

use crate::database::Database;
use crate::error::{DbError, Result};
use crate::protocol::{Command, SortQuery};
use crate::record::{Record, RecordUpdate};
use crate::store::Summary;

/// Menu loop bound to one database and one input/output pair
pub struct Shell<R, W> {
    db: Database,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(db: Database, input: R, output: W) -> Self {
        Self { db, input, output }
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    /// Give back the database and output once the session is over
    pub fn into_parts(self) -> (Database, W) {
        (self.db, self.output)
    }

    /// Run the menu until QUIT or end of input
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.print_menu()?;
            let Some(line) = self.read_line("Enter command: ")? else {
                self.quit()?;
                return Ok(());
            };
            if line.trim().is_empty() {
                continue;
            }

            match line.parse::<Command>() {
                Ok(Command::Quit) => {
                    self.quit()?;
                    return Ok(());
                }
                Ok(command) => self.dispatch(command)?,
                Err(_) => writeln!(
                    self.output,
                    "Invalid command! Please enter a valid command from the menu."
                )?,
            }
        }
    }

    fn dispatch(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Open => self.open(),
            Command::ShowAll => self.show_all(),
            Command::Insert => self.insert(),
            Command::Query => self.query(),
            Command::Update => self.update(),
            Command::Delete => self.delete(),
            Command::Save => self.save(),
            Command::Sort => self.sort_session(),
            Command::Summary => self.summary(),
            Command::Stats => self.stats(),
            Command::Quit => self.quit(),
        }
    }

    // =========================================================================
    // Input Helpers
    // =========================================================================

    /// Prompt and read one line without its line ending; `None` at end of input
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn read_id(&mut self, prompt: &str) -> Result<Option<i32>> {
        let Some(line) = self.read_line(prompt)? else {
            return Ok(None);
        };
        match line.trim().parse() {
            Ok(id) => Ok(Some(id)),
            Err(_) => {
                writeln!(self.output, "Invalid ID '{}'.", line.trim())?;
                Ok(None)
            }
        }
    }

    // =========================================================================
    // Command Handlers
    // =========================================================================

    fn open(&mut self) -> Result<()> {
        let path = self.db.config().snapshot_path.display().to_string();
        match self.db.open() {
            Ok(report) => {
                writeln!(
                    self.output,
                    "Successfully loaded {} records from '{}'",
                    report.load.loaded, path
                )?;
                if report.load.truncated > 0 {
                    writeln!(
                        self.output,
                        "Warning: {} records beyond capacity were dropped.",
                        report.load.truncated
                    )?;
                }
                if report.load.duplicates > 0 {
                    writeln!(
                        self.output,
                        "Warning: {} records with repeated IDs were dropped.",
                        report.load.duplicates
                    )?;
                }
            }
            Err(e) => writeln!(self.output, "Error opening file: {}", e)?,
        }
        Ok(())
    }

    fn show_all(&mut self) -> Result<()> {
        let start = Instant::now();
        write_table(&mut self.output, self.db.store().records())?;
        self.db.note_timing("SHOW", start.elapsed());
        Ok(())
    }

    fn insert(&mut self) -> Result<()> {
        let Some(id) = self.read_id("Enter student ID: ")? else {
            return Ok(());
        };
        let Some(name) = self.read_line("Enter name: ")? else {
            return Ok(());
        };
        let Some(programme) = self.read_line("Enter programme: ")? else {
            return Ok(());
        };
        let Some(mark) = self.read_line("Enter mark: ")? else {
            return Ok(());
        };
        let Ok(mark) = mark.trim().parse::<f32>() else {
            writeln!(self.output, "Invalid mark '{}'. Insertion cancelled.", mark.trim())?;
            return Ok(());
        };

        match self.db.insert(Record::new(id, &name, &programme, mark)) {
            Ok(_) => writeln!(self.output, "Record added successfully!")?,
            Err(DbError::DuplicateId(_)) => writeln!(
                self.output,
                "Error: Student ID already exists. Insertion cancelled."
            )?,
            Err(e) => writeln!(self.output, "Error: {}. Insertion cancelled.", e)?,
        }
        Ok(())
    }

    fn query(&mut self) -> Result<()> {
        let Some(id) = self.read_id("Enter student ID to search: ")? else {
            return Ok(());
        };
        match self.db.query(id) {
            Ok(record) => writeln!(self.output, "\nFound Record:\n{}", record)?,
            Err(_) => writeln!(self.output, "Record not found.")?,
        }
        Ok(())
    }

    fn update(&mut self) -> Result<()> {
        let Some(id) = self.read_id("Enter student ID to update: ")? else {
            return Ok(());
        };
        if !self.db.contains(id) {
            // Skip the field prompts; the attempt is still audited as NOT_FOUND
            return self.report_update(id, &RecordUpdate::default());
        }

        let name = self
            .read_line("Enter new name (or press enter to skip): ")?
            .unwrap_or_default();
        let programme = self
            .read_line("Enter new programme (or press enter to skip): ")?
            .unwrap_or_default();
        let mark_line = self
            .read_line("Enter new mark (or -1 to skip): ")?
            .unwrap_or_default();

        let mark = match mark_line.trim() {
            "" => -1.0,
            text => text.parse::<f32>().unwrap_or_else(|_| {
                tracing::debug!("Unparsable mark '{}' treated as skip", text);
                -1.0
            }),
        };

        let update = RecordUpdate::from_sentinels(&name, &programme, mark);
        self.report_update(id, &update)
    }

    fn report_update(&mut self, id: i32, update: &RecordUpdate) -> Result<()> {
        match self.db.update(id, update) {
            Ok(_) => writeln!(self.output, "Record updated successfully.")?,
            Err(DbError::NotFound(_)) => writeln!(self.output, "Record not found.")?,
            Err(e) => writeln!(self.output, "Error: {}", e)?,
        }
        Ok(())
    }

    fn delete(&mut self) -> Result<()> {
        let Some(id) = self.read_id("Enter student ID to delete: ")? else {
            return Ok(());
        };
        if !self.db.contains(id) {
            // Nothing to confirm; the attempt is still audited as NOT_FOUND
            return self.report_delete(id, false);
        }

        let answer = self
            .read_line("Are you sure you want to delete this record? (y/n): ")?
            .unwrap_or_default();
        let confirmed = matches!(answer.trim().chars().next(), Some('y' | 'Y'));
        self.report_delete(id, confirmed)
    }

    fn report_delete(&mut self, id: i32, confirmed: bool) -> Result<()> {
        match self.db.delete(id, confirmed) {
            Ok(Some(_)) => writeln!(self.output, "Record deleted successfully.")?,
            Ok(None) => writeln!(self.output, "Deletion cancelled.")?,
            Err(DbError::NotFound(_)) => writeln!(self.output, "Record not found.")?,
            Err(e) => writeln!(self.output, "Error: {}", e)?,
        }
        Ok(())
    }

    fn save(&mut self) -> Result<()> {
        match self.db.save() {
            Ok(_) => writeln!(self.output, "Database saved successfully.")?,
            Err(e) => writeln!(self.output, "Error saving file: {}", e)?,
        }
        Ok(())
    }

    /// Load the snapshot if nothing is in memory yet; false if still empty
    fn ensure_loaded(&mut self) -> Result<bool> {
        if self.db.store().is_empty() {
            writeln!(self.output, "No records loaded. Opening database...")?;
            self.open()?;
        }
        Ok(!self.db.store().is_empty())
    }

    /// Sort prompt: repeat sort queries until EXIT or end of input
    pub fn sort_session(&mut self) -> Result<()> {
        if !self.ensure_loaded()? {
            return Ok(());
        }

        writeln!(
            self.output,
            "Commands:\n  SHOW ALL SORT BY ID [DESC]\n  SHOW ALL SORT BY MARK [DESC]\n  EXIT"
        )?;

        while let Some(line) = self.read_line("> ")? {
            if line.trim().is_empty() {
                continue;
            }
            match line.parse::<SortQuery>() {
                Ok(SortQuery::Exit) => break,
                Ok(SortQuery::Sort { field, order }) => {
                    if self.db.store().is_empty() {
                        writeln!(self.output, "No records to sort.")?;
                        continue;
                    }
                    self.db.sort(field, order)?;
                    self.show_all()?;
                }
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        }
        Ok(())
    }

    fn summary(&mut self) -> Result<()> {
        if !self.ensure_loaded()? {
            writeln!(self.output, "Still no records found.")?;
            return Ok(());
        }
        match self.db.summary() {
            Some(summary) => write_summary(&mut self.output, &summary)?,
            None => writeln!(self.output, "No records.")?,
        }
        Ok(())
    }

    fn stats(&mut self) -> Result<()> {
        let start = Instant::now();
        write!(self.output, "\n{}", self.db.op_stats())?;
        self.db.note_timing("STATS", start.elapsed());
        Ok(())
    }

    fn quit(&mut self) -> Result<()> {
        self.db.exit();
        writeln!(self.output, "Exiting program. Goodbye!")?;
        Ok(())
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output, "\n=== Student Database Management System ===")?;
        writeln!(self.output, "Available Commands:")?;
        for (word, label) in Command::MENU {
            writeln!(self.output, "  {:<8} - {}", word, label)?;
        }
        Ok(())
    }
}

// =============================================================================
// Rendering
// =============================================================================

/// Print records as a tab-separated table
pub fn write_table(out: &mut impl Write, records: &[Record]) -> std::io::Result<()> {
    writeln!(out, "\nID\tName\t\tProgramme\t\tMark")?;
    writeln!(out, "----------------------------------------")?;
    for r in records {
        writeln!(
            out,
            "{}\t{:<15}\t{:<25}\t{:.1}",
            r.id, r.name, r.programme, r.mark
        )?;
    }
    Ok(())
}

/// Print summary statistics
pub fn write_summary(out: &mut impl Write, s: &Summary) -> std::io::Result<()> {
    writeln!(out, "\n=== Summary Statistics ===")?;
    writeln!(out, "Total students: {}", s.count)?;
    writeln!(out, "Average mark: {:.2}", s.average)?;
    writeln!(out, "Highest mark: {:.2} ({})", s.highest.0, s.highest.1)?;
    writeln!(out, "Lowest mark: {:.2} ({})", s.lowest.0, s.lowest.1)?;
    Ok(())
}
