//! Owned pool + catalog pair that the borrowing services are built from.

use tertian_types::{Scale, ScaleFormula};

use crate::catalog::FormulaCatalog;
use crate::error::CoreResult;
use crate::harmony::Harmonizer;
use crate::identify::ChordIdentifier;
use crate::pool::{PitchPool, Spelling};

/// Immutable after construction, so one instance can be shared across threads.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Theory {
    pool: PitchPool,
    catalog: FormulaCatalog,
}

impl Theory {
    pub fn new(pool: PitchPool, catalog: FormulaCatalog) -> Self {
        Self { pool, catalog }
    }

    /// Built-in catalog over the pool for `spelling`.
    pub fn standard(spelling: Spelling) -> Self {
        Self::new(PitchPool::with_spelling(spelling), FormulaCatalog::standard())
    }

    pub fn pool(&self) -> &PitchPool {
        &self.pool
    }

    pub fn catalog(&self) -> &FormulaCatalog {
        &self.catalog
    }

    pub fn identifier(&self) -> ChordIdentifier<'_> {
        ChordIdentifier::new(&self.pool, &self.catalog)
    }

    pub fn harmonizer(&self) -> Harmonizer<'_> {
        Harmonizer::new(self.identifier())
    }

    /// One octave of `formula` starting on `tonic`, named e.g. "D Dorian".
    pub fn scale(&self, tonic: &str, formula: ScaleFormula) -> CoreResult<Scale> {
        let name = format!("{} {}", tonic, formula.name());
        self.pool.scale_from_steps(tonic, formula.steps(), &name)
    }
}
