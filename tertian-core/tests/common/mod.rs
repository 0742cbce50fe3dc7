#![allow(dead_code)]
//! Shared helpers for tertian-core integration tests.

use tertian_core::harmony::{HarmonizeMode, Harmony};
use tertian_core::permutation::permutations;
use tertian_core::pool::Spelling;
use tertian_core::theory::Theory;
use tertian_types::{Scale, ScaleFormula};

/// Built-in catalog over the flat-spelled pool.
pub fn theory() -> Theory {
    Theory::standard(Spelling::Flats)
}

/// Display strings of every reading of `pitches`; panics on error or no match.
pub fn identify(theory: &Theory, pitches: &[&str]) -> Vec<String> {
    let found = theory
        .identifier()
        .identify_names(pitches)
        .unwrap_or_else(|e| panic!("identify {:?} failed: {}", pitches, e));
    assert!(found.is_match(), "{:?} matched nothing: {:?}", pitches, found);
    found.names()
}

/// Same as `identify`, sorted, for order-insensitive comparisons.
pub fn identify_sorted(theory: &Theory, pitches: &[&str]) -> Vec<String> {
    let mut names = identify(theory, pitches);
    names.sort();
    names
}

pub fn scale(theory: &Theory, tonic: &str, formula: ScaleFormula) -> Scale {
    theory
        .scale(tonic, formula)
        .unwrap_or_else(|e| panic!("building {} {} failed: {}", tonic, formula.name(), e))
}

/// Mode-1 labels of `scale` at `depth`, as display strings.
pub fn harmonize_labels(theory: &Theory, scale: &Scale, depth: i64) -> Vec<String> {
    match theory
        .harmonizer()
        .harmonize(scale, depth, HarmonizeMode::Names)
        .unwrap_or_else(|e| panic!("harmonize {} at depth {} failed: {}", scale.name, depth, e))
    {
        Harmony::Names(labels) => labels.iter().map(ToString::to_string).collect(),
        Harmony::Chords(_) => panic!("names mode returned chords"),
    }
}

/// Every ordering of `pitches`, as owned vectors of `&str`.
pub fn orderings<'a>(pitches: &[&'a str]) -> Vec<Vec<&'a str>> {
    permutations(pitches)
}
