//! Interval formulas of ordered pitch sequences.
//!
//! The full formula of `[p0, .., pn-1]` holds the upward distance of every
//! consecutive pair, including the wrap-around pair `(pn-1, p0)`. The matching
//! formula used for catalog lookup drops that last value: it is fixed by the
//! others and says nothing about chord quality.

use tertian_types::{Formula, PitchClass};

use crate::error::CoreResult;
use crate::pool::PitchPool;

/// Full circular formula: one distance per note.
pub fn full_formula<S: AsRef<str>>(pool: &PitchPool, names: &[S]) -> CoreResult<Formula> {
    let classes = names
        .iter()
        .map(|n| pool.pitch_class(n.as_ref()))
        .collect::<CoreResult<Vec<_>>>()?;
    Ok(full_formula_of(&classes))
}

/// Formula used for catalog lookup: the full formula minus its wrap-around value.
pub fn matching_formula<S: AsRef<str>>(pool: &PitchPool, names: &[S]) -> CoreResult<Formula> {
    let mut formula = full_formula(pool, names)?;
    formula.pop();
    Ok(formula)
}

/// `full_formula` over pitch classes that are already resolved.
pub fn full_formula_of(classes: &[PitchClass]) -> Formula {
    let len = classes.len();
    (0..len)
        .map(|i| classes[i].distance_up(classes[(i + 1) % len]))
        .collect()
}

/// `matching_formula` over pitch classes that are already resolved.
pub fn matching_formula_of(classes: &[PitchClass]) -> Formula {
    let mut formula = full_formula_of(classes);
    formula.pop();
    formula
}

/// Pitch names reached by stepping upward through `formula` from `first`.
/// Returns `formula.len() + 1` names; the inverse of `matching_formula`.
pub fn notes_from_formula(pool: &PitchPool, formula: &[u8], first: &str) -> CoreResult<Vec<String>> {
    let mut current = pool.pitch_class(first)?;
    let mut names = Vec::with_capacity(formula.len() + 1);
    names.push(pool.name_of(current).to_string());
    for &step in formula {
        current = current.transpose(step as i32);
        names.push(pool.name_of(current).to_string());
    }
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    #[test]
    fn full_formula_closes_the_octave() {
        let pool = PitchPool::flats();
        let f = full_formula(&pool, &["C", "E", "G"]).unwrap();
        assert_eq!(f, vec![4, 3, 5]);
        assert_eq!(f.iter().map(|&v| v as u32).sum::<u32>() % 12, 0);
    }

    #[test]
    fn matching_formula_drops_wraparound() {
        let pool = PitchPool::flats();
        assert_eq!(matching_formula(&pool, &["C", "E", "G", "B"]).unwrap(), vec![4, 3, 4]);
        assert_eq!(matching_formula(&pool, &["E", "G", "C"]).unwrap(), vec![3, 5]);
    }

    #[test]
    fn pitch_class_formulas_agree_with_names() {
        let pool = PitchPool::flats();
        let names = ["B", "D", "F", "A"];
        let classes: Vec<PitchClass> =
            names.iter().map(|n| pool.pitch_class(n).unwrap()).collect();
        assert_eq!(full_formula_of(&classes), full_formula(&pool, &names).unwrap());
        assert_eq!(matching_formula_of(&classes), vec![3, 3, 4]);
        assert!(matching_formula_of(&[]).is_empty());
    }

    #[test]
    fn repeated_pitch_gives_zero_step() {
        let pool = PitchPool::flats();
        assert_eq!(full_formula(&pool, &["C", "C", "G"]).unwrap(), vec![0, 7, 5]);
    }

    #[test]
    fn unknown_name_fails() {
        let pool = PitchPool::flats();
        assert!(matches!(
            matching_formula(&pool, &["C", "X"]),
            Err(CoreError::NoteNotInPool(n)) if n == "X"
        ));
    }

    #[test]
    fn notes_from_formula_spans_past_octave() {
        let pool = PitchPool::flats();
        // maj add2 no 5th: C E D
        assert_eq!(notes_from_formula(&pool, &[4, 10], "C").unwrap(), vec!["C", "E", "D"]);
    }

    #[test]
    fn formula_round_trip() {
        let pool = PitchPool::flats();
        let formulas: [&[u8]; 4] = [&[4, 3], &[3, 3, 3], &[2, 1, 8], &[4, 3, 2, 5]];
        for f in formulas {
            for start in pool.names() {
                let names = notes_from_formula(&pool, f, start).unwrap();
                assert_eq!(matching_formula(&pool, &names).unwrap(), f.to_vec());
            }
        }
    }
}
