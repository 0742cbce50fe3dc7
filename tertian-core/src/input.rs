//! Normalization of caller-facing chord inputs.
//!
//! Identification only ever sees a plain ordered list of pitch names. Every
//! accepted external shape (string slices, notes, chords, JSON values) is
//! turned into that list here, before any matching runs.

use serde_json::Value;
use tertian_types::{Chord, Note, NoteCollection};

use crate::error::{CoreError, CoreResult};

/// An ordered list of pitch names, as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChordInput {
    names: Vec<String>,
}

impl ChordInput {
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Self {
        Self {
            names: names.iter().map(|n| n.as_ref().to_string()).collect(),
        }
    }

    pub fn from_notes(notes: &[Note]) -> Self {
        Self::from_names(&notes.iter().map(|n| n.name()).collect::<Vec<_>>())
    }

    pub fn from_collection<C: NoteCollection + ?Sized>(collection: &C) -> Self {
        Self::from_notes(collection.notes())
    }

    /// Accepts an array of names, an array of `{"name": ..}` note objects,
    /// or a chord object `{"notes": [..]}` holding either.
    pub fn from_json(value: &Value) -> CoreResult<Self> {
        match value {
            Value::Array(items) => items
                .iter()
                .map(json_pitch_name)
                .collect::<CoreResult<Vec<_>>>()
                .map(|names| Self { names }),
            Value::Object(map) => match map.get("notes") {
                Some(notes @ Value::Array(_)) => Self::from_json(notes),
                Some(other) => Err(CoreError::UnsupportedType(format!(
                    "chord notes must be an array, got {}",
                    json_kind(other)
                ))),
                None => Err(CoreError::UnsupportedType(
                    "object without a notes array".into(),
                )),
            },
            other => Err(CoreError::UnsupportedType(json_kind(other).to_string())),
        }
    }

    pub fn parse_json(s: &str) -> CoreResult<Self> {
        let value: Value = serde_json::from_str(s)?;
        Self::from_json(&value)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn into_names(self) -> Vec<String> {
        self.names
    }
}

fn json_pitch_name(item: &Value) -> CoreResult<String> {
    match item {
        Value::String(s) => Ok(s.clone()),
        Value::Object(map) => match map.get("name") {
            Some(Value::String(s)) => Ok(s.clone()),
            _ => Err(CoreError::UnsupportedType(
                "note object without a string name".into(),
            )),
        },
        other => Err(CoreError::UnsupportedType(format!(
            "{} inside a chord",
            json_kind(other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl From<&[&str]> for ChordInput {
    fn from(names: &[&str]) -> Self {
        Self::from_names(names)
    }
}

impl<const N: usize> From<[&str; N]> for ChordInput {
    fn from(names: [&str; N]) -> Self {
        Self::from_names(&names)
    }
}

impl From<Vec<String>> for ChordInput {
    fn from(names: Vec<String>) -> Self {
        Self { names }
    }
}

impl From<Vec<&str>> for ChordInput {
    fn from(names: Vec<&str>) -> Self {
        Self::from_names(&names)
    }
}

impl From<&[Note]> for ChordInput {
    fn from(notes: &[Note]) -> Self {
        Self::from_notes(notes)
    }
}

impl From<&Chord> for ChordInput {
    fn from(chord: &Chord) -> Self {
        Self::from_collection(chord)
    }
}
