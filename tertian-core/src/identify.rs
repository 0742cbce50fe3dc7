//! Chord identification by permutation-based formula matching.
//!
//! A sounding chord has no inherent stack order, so every ordering of its
//! pitches is tried. For each ordering the matching formula is looked up in the
//! catalog bucket for its size; each matching entry yields a name rooted at
//! the ordering's first note, shifted by the entry's root offset.
//!
//! Matches are reported in permutation order, then catalog order, and are not
//! deduplicated: a symmetric chord (augmented triad, diminished seventh) is
//! named once per note that can act as its root.

use serde::{Deserialize, Serialize};
use tertian_types::{Formula, PitchClass};

use crate::catalog::{FormulaCatalog, MAX_CHORD_SIZE, MIN_CHORD_SIZE};
use crate::error::{CoreError, CoreResult};
use crate::formula::matching_formula_of;
use crate::input::ChordInput;
use crate::permutation::permutations;
use crate::pool::PitchPool;

/// One candidate reading of a chord: a root plus a catalog name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChordName {
    pub root: String,
    pub quality: String,
}

impl std::fmt::Display for ChordName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.root, self.quality)
    }
}

/// Result of identifying one chord.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Identification {
    /// Every catalog reading, in permutation order then catalog order.
    Matches(Vec<ChordName>),
    /// Nothing matched: the matching formula of the input as given.
    Unmatched(Formula),
}

impl Identification {
    /// Candidate names as display strings; empty when unmatched.
    pub fn names(&self) -> Vec<String> {
        match self {
            Identification::Matches(found) => found.iter().map(ToString::to_string).collect(),
            Identification::Unmatched(_) => Vec::new(),
        }
    }

    /// First candidate, if any matched.
    pub fn first(&self) -> Option<&ChordName> {
        match self {
            Identification::Matches(found) => found.first(),
            Identification::Unmatched(_) => None,
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self, Identification::Matches(_))
    }
}

/// Names chords against a pool and catalog. Cheap to copy; holds only borrows.
#[derive(Debug, Clone, Copy)]
pub struct ChordIdentifier<'a> {
    pool: &'a PitchPool,
    catalog: &'a FormulaCatalog,
}

impl<'a> ChordIdentifier<'a> {
    pub fn new(pool: &'a PitchPool, catalog: &'a FormulaCatalog) -> Self {
        Self { pool, catalog }
    }

    pub fn pool(&self) -> &'a PitchPool {
        self.pool
    }

    /// Identify a chord given in any accepted input shape.
    pub fn identify(&self, input: impl Into<ChordInput>) -> CoreResult<Identification> {
        let input = input.into();
        self.identify_names(input.names())
    }

    /// Identify an ordered list of 2 to 5 pitch names.
    pub fn identify_names<S: AsRef<str>>(&self, pitches: &[S]) -> CoreResult<Identification> {
        let size = pitches.len();
        if !(MIN_CHORD_SIZE..=MAX_CHORD_SIZE).contains(&size) {
            return Err(CoreError::UnsupportedSize(size));
        }
        // Every name is resolved once; orderings are built over pitch classes.
        let classes = pitches
            .iter()
            .map(|p| self.pool.pitch_class(p.as_ref()))
            .collect::<CoreResult<Vec<PitchClass>>>()?;
        let original = matching_formula_of(&classes);

        let mut found = Vec::new();
        for ordering in permutations(&classes) {
            let formula = matching_formula_of(&ordering);
            let lowest = ordering[0];
            for entry in self.catalog.lookup(&formula) {
                let root = self.pool.name_of(lowest.transpose(entry.root_offset as i32));
                log::trace!(
                    target: "identify",
                    "{:?} matches {} as {} {}",
                    formula,
                    entry.long_name,
                    root,
                    entry.name
                );
                found.push(ChordName {
                    root: root.to_string(),
                    quality: entry.name.clone(),
                });
            }
        }

        if found.is_empty() {
            log::debug!(target: "identify", "no catalog match for formula {:?}", original);
            Ok(Identification::Unmatched(original))
        } else {
            log::debug!(target: "identify", "formula {:?}: {} candidate(s)", original, found.len());
            Ok(Identification::Matches(found))
        }
    }

    /// Root implied by a voicing's lowest note and a catalog root offset.
    pub fn resolve_root(&self, lowest: &str, offset: i8) -> CoreResult<String> {
        let lowest = self.pool.pitch_class(lowest)?;
        Ok(self.pool.name_of(lowest.transpose(offset as i32)).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tertian_types::{Chord, Note};

    fn names(pitches: &[&str]) -> Vec<String> {
        let pool = PitchPool::flats();
        let catalog = FormulaCatalog::standard();
        ChordIdentifier::new(&pool, &catalog)
            .identify_names(pitches)
            .unwrap()
            .names()
    }

    #[test]
    fn c_major_triad() {
        assert_eq!(
            names(&["C", "E", "G"]),
            vec!["C maj", "A min7 no root", "Ab maj7#5 no root"]
        );
    }

    #[test]
    fn inversion_finds_same_names() {
        assert_eq!(
            names(&["E", "G", "C"]),
            vec!["C maj", "A min7 no root", "Ab maj7#5 no root"]
        );
    }

    #[test]
    fn c_major_seventh_is_unambiguous() {
        assert_eq!(names(&["C", "E", "G", "B"]), vec!["C maj7"]);
    }

    #[test]
    fn dyads() {
        assert_eq!(names(&["F", "C"]), vec!["F 5", "C sus4 no 5th"]);
        assert_eq!(names(&["C", "E"]), vec!["C maj no 5th", "A min no root"]);
        assert_eq!(names(&["Db", "C"]), vec!["Db maj7 no(3rd, 5th)"]);
        assert_eq!(names(&["Gb", "C"]), vec!["Gb b5 no 3rd", "C b5 no 3rd"]);
    }

    #[test]
    fn rootless_readings() {
        assert_eq!(names(&["E", "Gb", "Bb"]), vec!["C 7b5 no root", "Gb 7 no 5th"]);
        assert_eq!(names(&["E", "Ab", "Bb"]), vec!["C 7#5 no root"]);
    }

    #[test]
    fn shared_formula_reports_both_names() {
        assert_eq!(
            names(&["A", "C", "Eb"]),
            vec![
                "A dim",
                "F 7 no root",
                "Gb dim7 no root",
                "C dim7 no 5th",
                "C min6 no 5th"
            ]
        );
    }

    #[test]
    fn diminished_seventh_every_root() {
        assert_eq!(
            names(&["C", "Eb", "Gb", "A"]),
            vec!["C dim7", "Eb dim7", "Gb dim7", "A dim7"]
        );
    }

    #[test]
    fn thirteenth_with_large_negative_offset() {
        // A Bb Db Eb: 13th at the bottom, root nine steps below
        assert_eq!(
            names(&["A", "Bb", "Db", "Eb"]),
            vec![
                "F 11#5 no R, 9",
                "C 13#9b9 no R, 3, 5, 11",
                "Bb minmaj11 no 5, 9",
                "Eb 7#11 no 3"
            ]
        );
    }

    #[test]
    fn five_note_chords() {
        assert_eq!(names(&["C", "E", "G", "A", "D"]), vec!["C 6/9", "D 9 sus4"]);
        assert_eq!(names(&["F", "A", "C", "E", "G"]), vec!["F maj9"]);
    }

    #[test]
    fn unmatched_returns_original_formula() {
        let pool = PitchPool::flats();
        let catalog = FormulaCatalog::standard();
        let result = ChordIdentifier::new(&pool, &catalog)
            .identify_names(&["C", "Db", "D", "Eb"])
            .unwrap();
        assert_eq!(result, Identification::Unmatched(vec![1, 1, 1]));
        assert!(result.names().is_empty());
        assert!(result.first().is_none());
    }

    #[test]
    fn size_bounds() {
        let pool = PitchPool::flats();
        let catalog = FormulaCatalog::standard();
        let id = ChordIdentifier::new(&pool, &catalog);
        assert!(matches!(id.identify_names(&["C"]), Err(CoreError::UnsupportedSize(1))));
        assert!(matches!(
            id.identify_names(&["C", "D", "E", "F", "G", "A"]),
            Err(CoreError::UnsupportedSize(6))
        ));
        let empty: [&str; 0] = [];
        assert!(matches!(id.identify_names(&empty), Err(CoreError::UnsupportedSize(0))));
    }

    #[test]
    fn unknown_note_rejected() {
        let pool = PitchPool::flats();
        let catalog = FormulaCatalog::standard();
        let id = ChordIdentifier::new(&pool, &catalog);
        assert!(matches!(
            id.identify_names(&["C", "E#", "G"]),
            Err(CoreError::NoteNotInPool(n)) if n == "E#"
        ));
    }

    #[test]
    fn accepts_chord_and_notes() {
        let pool = PitchPool::flats();
        let catalog = FormulaCatalog::standard();
        let id = ChordIdentifier::new(&pool, &catalog);
        let chord = Chord::new(vec![Note::named("C"), Note::named("E"), Note::named("G")]);
        let from_chord = id.identify(&chord).unwrap();
        let from_strs = id.identify(["C", "E", "G"]).unwrap();
        assert_eq!(from_chord, from_strs);
        assert_eq!(from_chord.first().map(ToString::to_string).as_deref(), Some("C maj"));
    }

    #[test]
    fn sharps_pool_names_roots_with_sharps() {
        let pool = PitchPool::sharps();
        let catalog = FormulaCatalog::standard();
        let found = ChordIdentifier::new(&pool, &catalog)
            .identify(["C", "E", "G#"])
            .unwrap()
            .names();
        assert_eq!(found[0], "C aug");
        assert!(found.contains(&"G# aug".to_string()));
    }

    #[test]
    fn resolve_root_offsets() {
        let pool = PitchPool::flats();
        let catalog = FormulaCatalog::standard();
        let id = ChordIdentifier::new(&pool, &catalog);
        assert_eq!(id.resolve_root("E", 0).unwrap(), "E");
        assert_eq!(id.resolve_root("E", -4).unwrap(), "C");
        assert_eq!(id.resolve_root("C", -3).unwrap(), "A");
        assert!(matches!(id.resolve_root("H", 0), Err(CoreError::NoteNotInPool(_))));
    }

    #[test]
    fn repeated_pitch_keeps_zero_step() {
        let pool = PitchPool::flats();
        let catalog = FormulaCatalog::standard();
        let result = ChordIdentifier::new(&pool, &catalog)
            .identify_names(&["C", "C", "G"])
            .unwrap();
        assert_eq!(result, Identification::Unmatched(vec![0, 7]));
    }

    #[test]
    fn invalid_name_anywhere_fails_before_matching() {
        let pool = PitchPool::flats();
        let catalog = FormulaCatalog::standard();
        let id = ChordIdentifier::new(&pool, &catalog);
        assert!(matches!(
            id.identify_names(&["C", "E", "G", "B", "X"]),
            Err(CoreError::NoteNotInPool(n)) if n == "X"
        ));
    }
}
