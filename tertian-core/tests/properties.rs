//! Pool arithmetic and formula properties over every pitch and catalog entry.

mod common;

use common::theory;
use tertian_core::formula::{full_formula, matching_formula, notes_from_formula};
use tertian_core::pool::PitchPool;
use tertian_types::INTERVAL_NAMES;

#[test]
fn self_distance_is_zero() {
    for pool in [PitchPool::flats(), PitchPool::sharps()] {
        for name in pool.names() {
            assert_eq!(pool.interval_value(name, name).unwrap(), 0);
            assert_eq!(pool.interval(name, name).unwrap(), "unison");
        }
    }
}

#[test]
fn distances_are_complementary() {
    let pool = PitchPool::flats();
    for a in pool.names() {
        for b in pool.names() {
            let up = pool.distance_up(a, b).unwrap();
            let down = pool.distance_up(b, a).unwrap();
            assert!(up < 12);
            assert_eq!((up + down) % 12, 0, "{} -> {}", a, b);
            assert_eq!(pool.interval(a, b).unwrap(), INTERVAL_NAMES[up as usize]);
        }
    }
}

#[test]
fn catalog_formulas_round_trip_from_every_pitch() {
    let t = theory();
    let pool = t.pool();
    for entry in t.catalog().entries() {
        for first in pool.names() {
            let names = notes_from_formula(pool, &entry.intervals, first).unwrap();
            assert_eq!(names.len(), entry.chord_size());
            assert_eq!(
                matching_formula(pool, &names).unwrap(),
                entry.intervals,
                "{} from {}",
                entry.name,
                first
            );
        }
    }
}

#[test]
fn full_formula_spans_whole_octaves() {
    let pool = PitchPool::flats();
    for names in [
        vec!["C", "E", "G"],
        vec!["C", "G", "E"],
        vec!["B", "D", "F", "A", "C"],
    ] {
        let total: u32 = full_formula(&pool, &names)
            .unwrap()
            .iter()
            .map(|&v| v as u32)
            .sum();
        assert_eq!(total % 12, 0, "{:?}", names);
    }
}

#[test]
fn every_catalog_entry_names_its_own_voicing() {
    let t = theory();
    let pool = t.pool();
    for entry in t.catalog().entries() {
        let names = notes_from_formula(pool, &entry.intervals, "C").unwrap();
        let root = t.identifier().resolve_root("C", entry.root_offset).unwrap();
        let expected = format!("{} {}", root, entry.name);
        let found = t.identifier().identify_names(&names).unwrap().names();
        assert!(found.contains(&expected), "{:?} missing {}", found, expected);
    }
}
