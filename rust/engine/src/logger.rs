use serde::{Deserialize, Serialize};

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::cards::Card;
use crate::hand::Category;

/// Record of one compared hand pair, serialized to JSONL for later
/// inspection of a solve run.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct DuelRecord {
    /// 1-based line number in the input file
    pub line_no: usize,
    /// Hand 1 as dealt
    pub hand1: Vec<Card>,
    /// Hand 2 as dealt
    pub hand2: Vec<Card>,
    /// Category hand 1 classified into
    pub category1: Category,
    /// Category hand 2 classified into
    pub category2: Category,
    /// Winning hand (1 or 2), or `None` on an exact tie
    pub winner: Option<usize>,
    /// Timestamp when the record was written (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
}

/// Writes [`DuelRecord`]s as one JSON object per line.
pub struct DuelLogger {
    writer: BufWriter<File>,
}

impl DuelLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                let _ = create_dir_all(parent);
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: BufWriter::new(f),
        })
    }

    pub fn write(&mut self, record: &DuelRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}
