//! Chord formula catalog, bucketed by chord size (2 to 5 notes).
//!
//! The catalog is built once and only read afterwards. Within a bucket, entry
//! order is significant: it is the order in which matches are reported.
//!
//! User catalogs are TOML files of `[[chord]]` tables:
//!
//! ```toml
//! [[chord]]
//! name = "sus4 add9"
//! intervals = [2, 3, 2]
//! root_offset = 0
//! long_name = "Suspended fourth added ninth"
//! ```

mod standard;

use std::path::Path;

use serde::{Deserialize, Serialize};
use tertian_types::Formula;

use crate::error::{CoreError, CoreResult};

pub const MIN_CHORD_SIZE: usize = 2;
pub const MAX_CHORD_SIZE: usize = 5;

const BUCKET_COUNT: usize = MAX_CHORD_SIZE - MIN_CHORD_SIZE + 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormulaEntry {
    pub name: String,
    /// Matching formula: `chord size - 1` upward steps, wrap-around omitted.
    pub intervals: Formula,
    /// Pool steps from the lowest sounding note to the chord root.
    #[serde(default)]
    pub root_offset: i8,
    #[serde(default)]
    pub long_name: String,
}

impl FormulaEntry {
    pub fn chord_size(&self) -> usize {
        self.intervals.len() + 1
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormulaCatalog {
    buckets: [Vec<FormulaEntry>; BUCKET_COUNT],
}

#[derive(Deserialize)]
struct CatalogFile {
    #[serde(default)]
    chord: Vec<FormulaEntry>,
}

impl FormulaCatalog {
    /// The built-in catalog.
    pub fn standard() -> Self {
        let mut catalog = Self::default();
        for rows in [
            standard::TWO_NOTE,
            standard::THREE_NOTE,
            standard::FOUR_NOTE,
            standard::FIVE_NOTE,
        ] {
            for &(name, intervals, root_offset, long_name) in rows {
                catalog.push_unchecked(FormulaEntry {
                    name: name.to_string(),
                    intervals: intervals.to_vec(),
                    root_offset,
                    long_name: long_name.to_string(),
                });
            }
        }
        catalog
    }

    /// Parse a user catalog. Every entry is validated; the first bad one fails the load.
    pub fn from_toml_str(s: &str) -> CoreResult<Self> {
        let file: CatalogFile = toml::from_str(s)?;
        let mut catalog = Self::default();
        for entry in file.chord {
            catalog.push(entry)?;
        }
        Ok(catalog)
    }

    pub fn load(path: &Path) -> CoreResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let catalog = Self::from_toml_str(&contents)?;
        log::debug!(
            target: "catalog",
            "loaded {} chord formulas from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Add one entry at the end of its bucket.
    pub fn push(&mut self, entry: FormulaEntry) -> CoreResult<()> {
        validate_entry(&entry)?;
        self.push_unchecked(entry);
        Ok(())
    }

    fn push_unchecked(&mut self, entry: FormulaEntry) {
        let slot = entry.chord_size() - MIN_CHORD_SIZE;
        self.buckets[slot].push(entry);
    }

    /// Append another catalog's entries after this one's, bucket by bucket.
    pub fn extend(&mut self, other: FormulaCatalog) {
        for (mine, theirs) in self.buckets.iter_mut().zip(other.buckets) {
            mine.extend(theirs);
        }
    }

    /// Entries for one chord size, in match order. Empty outside 2..=5.
    pub fn bucket(&self, chord_size: usize) -> &[FormulaEntry] {
        if (MIN_CHORD_SIZE..=MAX_CHORD_SIZE).contains(&chord_size) {
            &self.buckets[chord_size - MIN_CHORD_SIZE]
        } else {
            &[]
        }
    }

    /// Entries whose intervals equal `formula` exactly, in match order.
    pub fn lookup<'a>(&'a self, formula: &'a [u8]) -> impl Iterator<Item = &'a FormulaEntry> + 'a {
        self.bucket(formula.len() + 1)
            .iter()
            .filter(move |entry| entry.intervals == formula)
    }

    pub fn entries(&self) -> impl Iterator<Item = &FormulaEntry> {
        self.buckets.iter().flatten()
    }

    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn validate_entry(entry: &FormulaEntry) -> CoreResult<()> {
    if entry.name.trim().is_empty() {
        return Err(CoreError::Catalog("entry with empty name".into()));
    }
    let size = entry.chord_size();
    if !(MIN_CHORD_SIZE..=MAX_CHORD_SIZE).contains(&size) {
        return Err(CoreError::Catalog(format!(
            "{}: {} intervals describe a {}-note chord (expected 2 to 5 notes)",
            entry.name,
            entry.intervals.len(),
            size
        )));
    }
    if let Some(bad) = entry.intervals.iter().find(|&&iv| iv == 0 || iv > 11) {
        return Err(CoreError::Catalog(format!(
            "{}: interval {} outside 1..=11",
            entry.name, bad
        )));
    }
    if !(-11..=11).contains(&entry.root_offset) {
        return Err(CoreError::Catalog(format!(
            "{}: root offset {} outside -11..=11",
            entry.name, entry.root_offset
        )));
    }
    Ok(())
}
