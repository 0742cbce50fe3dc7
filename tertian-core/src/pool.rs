//! The pitch pool: a fixed circular ordering of 12 pitch names.
//!
//! All interval arithmetic is defined relative to a pool. The default pool
//! spells black keys as flats; a sharp-spelled pool is available for callers
//! that write `C#` instead of `Db`. Names outside the active pool are rejected,
//! not respelled.

use serde::{Deserialize, Serialize};
use tertian_types::{interval_name, Note, PitchClass, Scale, PITCH_CLASS_COUNT};

use crate::error::{CoreError, CoreResult};

const FLAT_NAMES: [&str; 12] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];

const SHARP_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Which accidental the built-in pools use for black keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Spelling {
    #[default]
    Flats,
    Sharps,
}

impl Spelling {
    pub fn parse(s: &str) -> Option<Spelling> {
        match s.to_lowercase().as_str() {
            "flats" | "flat" | "b" => Some(Spelling::Flats),
            "sharps" | "sharp" | "#" => Some(Spelling::Sharps),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PitchPool {
    names: Vec<String>,
}

impl PitchPool {
    /// Build a pool from 12 distinct names, in ascending semitone order.
    pub fn new<S: AsRef<str>>(names: &[S]) -> CoreResult<Self> {
        if names.len() != PITCH_CLASS_COUNT as usize {
            return Err(CoreError::InvalidPool(format!(
                "expected 12 names, got {}",
                names.len()
            )));
        }
        let names: Vec<String> = names.iter().map(|n| n.as_ref().to_string()).collect();
        for (i, name) in names.iter().enumerate() {
            if names[..i].contains(name) {
                return Err(CoreError::InvalidPool(format!("duplicate name {}", name)));
            }
        }
        Ok(Self { names })
    }

    pub fn flats() -> Self {
        Self::from_static(&FLAT_NAMES)
    }

    pub fn sharps() -> Self {
        Self::from_static(&SHARP_NAMES)
    }

    pub fn with_spelling(spelling: Spelling) -> Self {
        match spelling {
            Spelling::Flats => Self::flats(),
            Spelling::Sharps => Self::sharps(),
        }
    }

    fn from_static(names: &[&str; 12]) -> Self {
        Self {
            names: names.iter().map(|n| n.to_string()).collect(),
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Position of `name` in the pool (0..12).
    pub fn index_of(&self, name: &str) -> CoreResult<u8> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| i as u8)
            .ok_or_else(|| CoreError::NoteNotInPool(name.to_string()))
    }

    pub fn pitch_class(&self, name: &str) -> CoreResult<PitchClass> {
        self.index_of(name).map(PitchClass::new)
    }

    pub fn name_of(&self, pc: PitchClass) -> &str {
        &self.names[pc.index() as usize]
    }

    /// Name found `offset` pool steps away from `name`, wrapping in both directions.
    pub fn offset_name(&self, name: &str, offset: i32) -> CoreResult<&str> {
        let pc = self.pitch_class(name)?;
        Ok(self.name_of(pc.transpose(offset)))
    }

    /// Upward semitone steps from `a` to `b`, in 0..12 (0 only when `a == b`).
    pub fn distance_up(&self, a: &str, b: &str) -> CoreResult<u8> {
        Ok(self.pitch_class(a)?.distance_up(self.pitch_class(b)?))
    }

    pub fn interval_value(&self, a: &str, b: &str) -> CoreResult<u8> {
        self.distance_up(a, b)
    }

    /// Name of the upward interval from `a` to `b`.
    pub fn interval(&self, a: &str, b: &str) -> CoreResult<&'static str> {
        Ok(interval_name(self.distance_up(a, b)?))
    }

    /// Build one scale octave by walking `steps` upward from `tonic`.
    /// The final step closes back onto the tonic and adds no note.
    pub fn scale_from_steps(&self, tonic: &str, steps: &[u8], name: &str) -> CoreResult<Scale> {
        let mut current = self.pitch_class(tonic)?;
        let mut notes = Vec::with_capacity(steps.len());
        for &step in steps {
            notes.push(Note::named(self.name_of(current)));
            current = current.transpose(step as i32);
        }
        Ok(Scale::new(notes, name))
    }
}

impl Default for PitchPool {
    fn default() -> Self {
        Self::flats()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tertian_types::{NoteCollection, ScaleFormula};

    #[test]
    fn flats_pool_positions() {
        let pool = PitchPool::flats();
        assert_eq!(pool.index_of("C").unwrap(), 0);
        assert_eq!(pool.index_of("Ab").unwrap(), 8);
        assert_eq!(pool.index_of("B").unwrap(), 11);
    }

    #[test]
    fn unknown_name_is_rejected() {
        let pool = PitchPool::flats();
        assert!(matches!(pool.index_of("C#"), Err(CoreError::NoteNotInPool(n)) if n == "C#"));
        assert!(matches!(pool.index_of("H"), Err(CoreError::NoteNotInPool(_))));
    }

    #[test]
    fn sharps_pool_accepts_sharps() {
        let pool = PitchPool::sharps();
        assert_eq!(pool.index_of("F#").unwrap(), 6);
        assert!(pool.index_of("Gb").is_err());
    }

    #[test]
    fn new_requires_twelve_distinct() {
        assert!(matches!(PitchPool::new(&["C", "D"]), Err(CoreError::InvalidPool(_))));
        let mut names = FLAT_NAMES;
        names[1] = "C";
        assert!(matches!(PitchPool::new(&names), Err(CoreError::InvalidPool(_))));
        assert!(PitchPool::new(&SHARP_NAMES).is_ok());
    }

    #[test]
    fn self_distance_is_zero() {
        let pool = PitchPool::flats();
        for name in pool.names() {
            assert_eq!(pool.interval_value(name, name).unwrap(), 0);
        }
    }

    #[test]
    fn distance_up_wraps() {
        let pool = PitchPool::flats();
        assert_eq!(pool.distance_up("G", "C").unwrap(), 5);
        assert_eq!(pool.distance_up("C", "G").unwrap(), 7);
        assert_eq!(pool.distance_up("B", "C").unwrap(), 1);
    }

    #[test]
    fn interval_names() {
        let pool = PitchPool::flats();
        assert_eq!(pool.interval("C", "E").unwrap(), "major third");
        assert_eq!(pool.interval("E", "C").unwrap(), "minor sixth");
        assert_eq!(pool.interval("F", "B").unwrap(), "tritone");
    }

    #[test]
    fn offset_name_negative() {
        let pool = PitchPool::flats();
        assert_eq!(pool.offset_name("C", -3).unwrap(), "A");
        assert_eq!(pool.offset_name("Eb", -9).unwrap(), "Gb");
        assert_eq!(pool.offset_name("A", 4).unwrap(), "Db");
    }

    #[test]
    fn c_ionian_from_steps() {
        let pool = PitchPool::flats();
        let scale = pool
            .scale_from_steps("C", ScaleFormula::Ionian.steps(), "C Ionian")
            .unwrap();
        assert_eq!(scale.note_names(), vec!["C", "D", "E", "F", "G", "A", "B"]);
        assert_eq!(scale.name, "C Ionian");
    }

    #[test]
    fn a_harmonic_minor_from_steps() {
        let pool = PitchPool::flats();
        let scale = pool
            .scale_from_steps("A", ScaleFormula::HarmonicMinor.steps(), "")
            .unwrap();
        assert_eq!(scale.note_names(), vec!["A", "B", "C", "D", "E", "F", "Ab"]);
    }

    #[test]
    fn spelling_parse() {
        assert_eq!(Spelling::parse("Sharps"), Some(Spelling::Sharps));
        assert_eq!(Spelling::parse("flats"), Some(Spelling::Flats));
        assert_eq!(Spelling::parse("double"), None);
    }
}
