//! # tertian-core
//!
//! Chord naming and scale harmonization over a fixed 12-name pitch pool.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tertian_core::config::Config;
//! use tertian_core::harmony::HarmonizeMode;
//!
//! // 1. Pool spelling, default scale and extra catalog come from config
//! let config = Config::load();
//! let theory = config.theory()?;
//!
//! // 2. Name a chord: every reading, in permutation then catalog order
//! let found = theory.identifier().identify(["E", "G", "C"])?;
//! assert_eq!(found.names()[0], "C maj");
//!
//! // 3. Harmonize a scale in thirds
//! let scale = theory.scale("A", config.scale())?;
//! let harmony = theory.harmonizer().harmonize(&scale, 4, HarmonizeMode::Names)?;
//! ```
//!
//! ## Module Overview
//!
//! - [`pool`]: `PitchPool`: the 12 pitch names, distances and interval names
//! - [`formula`]: full and matching interval formulas of a pitch sequence
//! - [`catalog`]: `FormulaCatalog`: chord formulas bucketed by size, user TOML catalogs
//! - [`permutation`]: every ordering of a sequence, in a fixed order
//! - [`input`]: `ChordInput`: normalization of names, notes, chords and JSON
//! - [`identify`]: `ChordIdentifier`: permutation-based chord naming
//! - [`harmony`]: `Harmonizer`: chords in thirds on every scale degree
//! - [`theory`]: `Theory`: owned pool + catalog handing out the services above
//! - [`config`]: TOML configuration loading (embedded + user override)

pub mod catalog;
pub mod config;
pub mod error;
pub mod formula;
pub mod harmony;
pub mod identify;
pub mod input;
pub mod permutation;
pub mod pool;
pub mod theory;

pub use catalog::{FormulaCatalog, FormulaEntry};
pub use error::{CoreError, CoreResult};
pub use harmony::{DegreeLabel, HarmonizeMode, Harmonizer, Harmony};
pub use identify::{ChordIdentifier, ChordName, Identification};
pub use input::ChordInput;
pub use pool::{PitchPool, Spelling};
pub use theory::Theory;
