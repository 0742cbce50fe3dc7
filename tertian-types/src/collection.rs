//! Ordered note collections: chords and scales.
//!
//! Both share the `NoteCollection` capability (ordered notes plus a size).
//! Rotation and inversion live on `Chord` only; a scale's order is its identity.

use serde::{Deserialize, Serialize};

use crate::note::Note;

/// Read access to an ordered group of notes.
pub trait NoteCollection {
    fn notes(&self) -> &[Note];

    fn size(&self) -> usize {
        self.notes().len()
    }

    /// Pitch names in collection order.
    fn note_names(&self) -> Vec<&str> {
        self.notes().iter().map(|n| n.name()).collect()
    }
}

/// A group of simultaneously sounding notes, in voicing order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Chord {
    pub notes: Vec<Note>,
    #[serde(default)]
    pub name: String,
}

impl Chord {
    pub fn new(notes: Vec<Note>) -> Self {
        Self {
            notes,
            name: String::new(),
        }
    }

    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Self {
        Self::new(names.iter().map(|n| Note::named(n.as_ref())).collect())
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Send the lowest note to the top.
    pub fn rotate(&mut self) -> &mut Self {
        if !self.notes.is_empty() {
            self.notes.rotate_left(1);
        }
        self
    }

    /// Send the top note to the bottom.
    pub fn rotate_back(&mut self) -> &mut Self {
        if !self.notes.is_empty() {
            self.notes.rotate_right(1);
        }
        self
    }

    /// Apply `n` inversions; negative `n` inverts backwards.
    pub fn invert(&mut self, n: i32) -> &mut Self {
        let len = self.notes.len();
        if len == 0 {
            return self;
        }
        let steps = n.unsigned_abs() as usize % len;
        if n >= 0 {
            self.notes.rotate_left(steps);
        } else {
            self.notes.rotate_right(steps);
        }
        self
    }

    /// Every inversion of this voicing, starting with the voicing itself.
    pub fn inversions(&self) -> Vec<Chord> {
        let mut current = self.clone();
        let mut out = Vec::with_capacity(self.notes.len());
        for _ in 0..self.notes.len() {
            out.push(current.clone());
            current.rotate();
        }
        out
    }
}

impl NoteCollection for Chord {
    fn notes(&self) -> &[Note] {
        &self.notes
    }
}

/// One octave of a scale, in ascending degree order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Scale {
    pub notes: Vec<Note>,
    #[serde(default)]
    pub name: String,
}

impl Scale {
    pub fn new(notes: Vec<Note>, name: impl Into<String>) -> Self {
        Self {
            notes,
            name: name.into(),
        }
    }

    pub fn from_names<S: AsRef<str>>(names: &[S], name: impl Into<String>) -> Self {
        Self::new(names.iter().map(|n| Note::named(n.as_ref())).collect(), name)
    }

    /// Note at a scale degree, wrapping past the octave.
    pub fn degree(&self, index: usize) -> Option<&Note> {
        if self.notes.is_empty() {
            return None;
        }
        self.notes.get(index % self.notes.len())
    }
}

impl NoteCollection for Scale {
    fn notes(&self) -> &[Note] {
        &self.notes
    }
}
