//! Scale harmonization by superimposed thirds.
//!
//! For each degree `i` of a scale of size `S`, a chord is stacked from degrees
//! `i, i+2, i+4, ..` (mod `S`) until it holds `depth` notes. Depth may exceed
//! the scale size; the stack keeps wrapping through the scale.

use serde::{Deserialize, Serialize};
use tertian_types::{Chord, Formula, Note, NoteCollection, Scale};

use crate::catalog::{MAX_CHORD_SIZE, MIN_CHORD_SIZE};
use crate::error::{CoreError, CoreResult};
use crate::identify::{ChordIdentifier, ChordName, Identification};

/// Largest chord `harmonize` will stack.
pub const MAX_DEPTH: usize = 128;

/// What `harmonize` returns for each degree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HarmonizeMode {
    /// The generated chords themselves.
    #[default]
    Chords = 0,
    /// The first identified name of each generated chord.
    Names = 1,
}

impl TryFrom<i64> for HarmonizeMode {
    type Error = CoreError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(HarmonizeMode::Chords),
            1 => Ok(HarmonizeMode::Names),
            other => Err(CoreError::InvalidMode(other)),
        }
    }
}

/// Label for one harmonized degree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DegreeLabel {
    Named(ChordName),
    /// The degree's chord matched nothing; its formula stands in for a name.
    Unmatched(Formula),
}

impl std::fmt::Display for DegreeLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DegreeLabel::Named(name) => write!(f, "{}", name),
            DegreeLabel::Unmatched(formula) => write!(f, "{:?}", formula),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Harmony {
    Chords(Vec<Chord>),
    Names(Vec<DegreeLabel>),
}

impl Harmony {
    pub fn len(&self) -> usize {
        match self {
            Harmony::Chords(chords) => chords.len(),
            Harmony::Names(names) => names.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Harmonizer<'a> {
    identifier: ChordIdentifier<'a>,
}

impl<'a> Harmonizer<'a> {
    pub fn new(identifier: ChordIdentifier<'a>) -> Self {
        Self { identifier }
    }

    /// Harmonize `scale` with `depth`-note chords.
    ///
    /// Fails with `InvalidDepth` when `depth < 1`. In `Names` mode each chord
    /// must also be identifiable in size, so depths outside 2..=5 fail with
    /// `UnsupportedSize`; in `Chords` mode depths above `MAX_DEPTH` fail with
    /// `InvalidDepth`. Both checks run before any chord is built.
    pub fn harmonize(&self, scale: &Scale, depth: i64, mode: HarmonizeMode) -> CoreResult<Harmony> {
        if depth < 1 {
            return Err(CoreError::InvalidDepth(depth));
        }
        // Saturates on targets where usize is narrower than i64.
        let depth_notes = usize::try_from(depth).unwrap_or(usize::MAX);
        if mode == HarmonizeMode::Names
            && !(MIN_CHORD_SIZE..=MAX_CHORD_SIZE).contains(&depth_notes)
        {
            return Err(CoreError::UnsupportedSize(depth_notes));
        }
        if depth_notes > MAX_DEPTH {
            return Err(CoreError::InvalidDepth(depth));
        }
        let chords = stack_thirds(scale, depth_notes);
        log::debug!(
            target: "harmony",
            "harmonizing {} ({} degrees) at depth {}",
            scale.name,
            chords.len(),
            depth
        );
        match mode {
            HarmonizeMode::Chords => Ok(Harmony::Chords(chords)),
            HarmonizeMode::Names => chords
                .iter()
                .map(|chord| self.label(chord))
                .collect::<CoreResult<Vec<_>>>()
                .map(Harmony::Names),
        }
    }

    /// Like `harmonize`, with the mode given as a raw integer.
    pub fn harmonize_raw(&self, scale: &Scale, depth: i64, mode: i64) -> CoreResult<Harmony> {
        let mode = HarmonizeMode::try_from(mode)?;
        self.harmonize(scale, depth, mode)
    }

    fn label(&self, chord: &Chord) -> CoreResult<DegreeLabel> {
        match self.identifier.identify(chord)? {
            Identification::Matches(mut found) => Ok(DegreeLabel::Named(found.swap_remove(0))),
            Identification::Unmatched(formula) => Ok(DegreeLabel::Unmatched(formula)),
        }
    }
}

/// One chord per scale degree, built from every other degree.
pub fn stack_thirds(scale: &Scale, depth: usize) -> Vec<Chord> {
    let notes = scale.notes();
    let size = notes.len();
    (0..size)
        .map(|i| {
            let stacked: Vec<Note> = (0..depth)
                .map(|j| notes[(i + 2 * j) % size].clone())
                .collect();
            Chord::new(stacked)
        })
        .collect()
}
