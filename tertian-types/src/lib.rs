//! # tertian-types
//!
//! Plain value types shared by the tertian crates: pitch classes, notes,
//! chords, scales, and the built-in scale step formulas.
//! No chord-naming logic lives here; see tertian-core for that.

mod collection;
mod note;
pub mod pitch;
mod scale_formula;

pub use collection::{Chord, NoteCollection, Scale};
pub use note::Note;
pub use pitch::{interval_name, PitchClass, INTERVAL_NAMES, PITCH_CLASS_COUNT};
pub use scale_formula::ScaleFormula;

/// Ordered semitone distances between consecutive notes of a stacked voicing.
pub type Formula = Vec<u8>;
