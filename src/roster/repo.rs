//! The owning component for the record set, id assignment, and file
//! persistence.
//!
//! A [`Repository`] holds the authoritative in-memory copy of one store
//! file. Every mutating call rewrites the whole file before returning, so
//! memory and disk never drift apart and the process can stop at any
//! point without losing an acknowledged change. The file is small enough
//! that rewriting it beats any bookkeeping a partial-update scheme would
//! need.
//!
//! Callers only ever receive cloned records; nothing handed out can
//! mutate the store behind its back.

use crate::error::{Result, RosterError};
use crate::format::{self, ParsedLine};
use crate::model::{Record, RecordFields};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub struct Repository {
    path: PathBuf,
    records: BTreeMap<u32, Record>,
    next_id: u32,
}

impl Repository {
    /// Opens the store at `path`, reading every record it holds.
    ///
    /// A missing file is not an error: the repository starts empty and
    /// the file appears on the first mutation. Unreadable lines are
    /// dropped, not fatal; only a real I/O failure propagates.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let mut repo = Self {
            path: path.into(),
            records: BTreeMap::new(),
            next_id: 1,
        };
        repo.load()?;
        Ok(repo)
    }

    fn load(&mut self) -> Result<()> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
            Err(e) => return Err(RosterError::Io(e)),
        };

        for line in content.lines() {
            match format::parse_line(line) {
                ParsedLine::NextId(n) => self.next_id = n,
                ParsedLine::Record(record) => {
                    let id = record.id;
                    if self.records.insert(id, record).is_some() {
                        // Duplicate ids should not happen in a file we
                        // wrote ourselves; keep the later line.
                        warn!(id, "duplicate id in store file, later line wins");
                    }
                }
                ParsedLine::Skip => {}
            }
        }

        // The counter must stay ahead of every stored id, even when the
        // header was missing or understated.
        let max_id = self.records.keys().next_back().copied().unwrap_or(0);
        self.next_id = self.next_id.max(max_id + 1);

        debug!(
            path = %self.path.display(),
            records = self.records.len(),
            next_id = self.next_id,
            "store loaded"
        );
        Ok(())
    }

    /// Snapshot of all records in ascending id order.
    pub fn list(&self) -> Vec<Record> {
        self.records.values().cloned().collect()
    }

    /// Looks up a record by id. Absence is a normal outcome, not an error.
    pub fn get(&self, id: u32) -> Option<Record> {
        self.records.get(&id).cloned()
    }

    /// Stores a new record under the next free id and persists the store.
    ///
    /// Field validation happens at the edge (see [`crate::validate`]);
    /// the repository takes the values as given.
    pub fn add(&mut self, fields: RecordFields) -> Result<Record> {
        let record = Record::new(self.next_id, fields);
        self.next_id += 1;
        self.records.insert(record.id, record.clone());
        self.save()?;
        Ok(record)
    }

    /// Overwrites all fields of an existing record, keeping its id.
    pub fn update(&mut self, id: u32, fields: RecordFields) -> Result<Record> {
        if !self.records.contains_key(&id) {
            return Err(RosterError::RecordNotFound(id));
        }
        let record = Record::new(id, fields);
        self.records.insert(id, record.clone());
        self.save()?;
        Ok(record)
    }

    /// Removes a record and persists the store. Returns the removed
    /// record so callers can report what went away.
    pub fn delete(&mut self, id: u32) -> Result<Record> {
        let record = self
            .records
            .remove(&id)
            .ok_or(RosterError::RecordNotFound(id))?;
        self.save()?;
        Ok(record)
    }

    /// Drops every record and resets the id counter. There is no undo.
    pub fn clear(&mut self) -> Result<()> {
        self.records.clear();
        self.next_id = 1;
        self.save()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn next_id(&self) -> u32 {
        self.next_id
    }

    /// Rewrites the backing file from the in-memory state: the header
    /// first, then every record in ascending id order. The same state
    /// always produces the same bytes.
    ///
    /// The content goes to a sibling temp file which is then renamed over
    /// the target, so a concurrent open never sees a half-written store.
    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut out = String::new();
        out.push_str(format::NEXT_ID_PREFIX);
        out.push_str(&self.next_id.to_string());
        out.push('\n');
        for record in self.records.values() {
            out.push_str(&format::serialize_record(record));
            out.push('\n');
        }

        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, out.as_bytes())?;
        fs::rename(&tmp, &self.path)?;

        debug!(
            path = %self.path.display(),
            records = self.records.len(),
            next_id = self.next_id,
            "store saved"
        );
        Ok(())
    }
}
