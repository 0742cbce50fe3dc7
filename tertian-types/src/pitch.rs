//! Pitch classes: the 12 equal-tempered positions of the circular pool.

use serde::{Deserialize, Serialize};

/// Number of pitch classes in one octave.
pub const PITCH_CLASS_COUNT: u8 = 12;

/// Interval names indexed by upward semitone distance (0..12).
pub const INTERVAL_NAMES: [&str; 12] = [
    "unison",
    "minor second",
    "major second",
    "minor third",
    "major third",
    "perfect fourth",
    "tritone",
    "perfect fifth",
    "minor sixth",
    "major sixth",
    "minor seventh",
    "major seventh",
];

/// Position of a pitch in the pool, always in 0..12.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct PitchClass(u8);

impl PitchClass {
    pub const ALL: [PitchClass; 12] = [
        PitchClass(0),
        PitchClass(1),
        PitchClass(2),
        PitchClass(3),
        PitchClass(4),
        PitchClass(5),
        PitchClass(6),
        PitchClass(7),
        PitchClass(8),
        PitchClass(9),
        PitchClass(10),
        PitchClass(11),
    ];

    /// Create a pitch class, reducing `index` modulo 12.
    pub fn new(index: u8) -> Self {
        Self(index % PITCH_CLASS_COUNT)
    }

    pub fn index(self) -> u8 {
        self.0
    }

    /// Move by a signed number of semitones, wrapping in both directions.
    pub fn transpose(self, semitones: i32) -> Self {
        let n = PITCH_CLASS_COUNT as i32;
        Self((self.0 as i32 + semitones).rem_euclid(n) as u8)
    }

    /// Semitone steps travelled moving upward from `self` to `other` (0..12).
    pub fn distance_up(self, other: PitchClass) -> u8 {
        (other.0 + PITCH_CLASS_COUNT - self.0) % PITCH_CLASS_COUNT
    }
}

impl std::fmt::Display for PitchClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Interval name for an upward semitone distance; wraps distances of an octave or more.
pub fn interval_name(semitones: u8) -> &'static str {
    INTERVAL_NAMES[(semitones % PITCH_CLASS_COUNT) as usize]
}
