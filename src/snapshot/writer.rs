//! Snapshot writer

use std::fmt::Write as _;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::config::SnapshotHeader;
use crate::error::Result;
use crate::record::Record;

/// Render the header block and one fixed-width row per record
pub fn serialize(records: &[Record], header: &SnapshotHeader) -> String {
    let mut out = String::with_capacity(128 + records.len() * 64);

    // Writing into a String cannot fail
    let _ = writeln!(out, "Database Name: {}", header.database_name);
    let _ = writeln!(out, "Authors: {}", header.authors);
    out.push('\n');
    let _ = writeln!(out, "Table Name: {}", header.table_name);
    out.push_str("ID\tName\t\tProgramme\t\tMark\n");

    for r in records {
        let _ = writeln!(
            out,
            "{}\t{:<15}\t{:<23}\t{:.1}",
            r.id, r.name, r.programme, r.mark
        );
    }

    out
}

/// Write the snapshot to `path` through a temporary sibling file
pub fn write_snapshot(path: &Path, records: &[Record], header: &SnapshotHeader) -> Result<()> {
    let tmp_path = path.with_extension("tmp");

    {
        let mut writer = BufWriter::new(File::create(&tmp_path)?);
        writer.write_all(serialize(records, header).as_bytes())?;
        writer.flush()?;
        writer.get_ref().sync_all()?;
    }

    fs::rename(&tmp_path, path)?;
    Ok(())
}
