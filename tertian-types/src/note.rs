use serde::{Deserialize, Serialize};

/// A single named note. Only `name` takes part in chord arithmetic; the other
/// fields ride along for callers that track register or tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub name: String,
    #[serde(default)]
    pub freq: f64,
    #[serde(default)]
    pub octave: i32,
    /// Secondary name, e.g. a solfège syllable.
    #[serde(default)]
    pub alt_name: String,
}

impl Note {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            freq: 0.0,
            octave: 0,
            alt_name: String::new(),
        }
    }

    pub fn with_freq(mut self, freq: f64) -> Self {
        self.freq = freq;
        self
    }

    pub fn with_octave(mut self, octave: i32) -> Self {
        self.octave = octave;
        self
    }

    pub fn with_alt_name(mut self, alt_name: impl Into<String>) -> Self {
        self.alt_name = alt_name.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl From<&str> for Note {
    fn from(name: &str) -> Self {
        Note::named(name)
    }
}

impl std::fmt::Display for Note {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
