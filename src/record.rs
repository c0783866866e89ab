//! Student record definitions

use std::fmt;

/// Ordinal slot of a record within the store
pub type Position = usize;

/// One student
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub id: i32,
    pub name: String,
    pub programme: String,
    pub mark: f32,
}

impl Record {
    /// Create a record, cleaning text fields so they survive the snapshot format
    pub fn new(id: i32, name: &str, programme: &str, mark: f32) -> Self {
        Self {
            id,
            name: clean_text(name),
            programme: clean_text(programme),
            mark,
        }
    }

    /// Clean name and programme and cut them down to `limit` characters
    ///
    /// Every path into the store goes through here, so a record built as a
    /// struct literal is held to the same rules as one from [`Record::new`].
    pub fn bounded(mut self, limit: usize) -> Self {
        self.name = bound_text(&self.name, limit);
        self.programme = bound_text(&self.programme, limit);
        self
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}\nName: {}\nProgramme: {}\nMark: {:.2}",
            self.id, self.name, self.programme, self.mark
        )
    }
}

/// Partial update; `None` leaves the field unchanged
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordUpdate {
    pub name: Option<String>,
    pub programme: Option<String>,
    pub mark: Option<f32>,
}

impl RecordUpdate {
    /// Build an update from menu input: empty text and negative marks mean "skip"
    pub fn from_sentinels(name: &str, programme: &str, mark: f32) -> Self {
        let text = |s: &str| {
            let s = s.trim_end_matches(['\r', '\n']);
            (!s.is_empty()).then(|| s.to_string())
        };

        Self {
            name: text(name),
            programme: text(programme),
            mark: (mark >= 0.0).then_some(mark),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.programme.is_none() && self.mark.is_none()
    }

    /// Apply to `record`, respecting the text limit
    pub fn apply(&self, record: &mut Record, limit: usize) {
        if let Some(name) = &self.name {
            record.name = bound_text(name, limit);
        }
        if let Some(programme) = &self.programme {
            record.programme = bound_text(programme, limit);
        }
        if let Some(mark) = self.mark {
            record.mark = mark;
        }
    }
}

// Tabs and line breaks would split a snapshot row; edge padding would not
// survive the fixed-width columns.
fn clean_text(s: &str) -> String {
    s.chars()
        .map(|c| if matches!(c, '\t' | '\r' | '\n') { ' ' } else { c })
        .collect::<String>()
        .trim()
        .to_string()
}

fn bound_text(s: &str, limit: usize) -> String {
    let mut s = clean_text(s);
    truncate_chars(&mut s, limit);
    s.truncate(s.trim_end().len());
    s
}

fn truncate_chars(s: &mut String, limit: usize) {
    if let Some((cut, _)) = s.char_indices().nth(limit) {
        s.truncate(cut);
    }
}
