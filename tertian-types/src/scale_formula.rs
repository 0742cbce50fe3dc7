use serde::{Deserialize, Serialize};

/// Built-in scale shapes, each defined by its semitone step sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ScaleFormula {
    MinorPentatonic,
    MajorPentatonic,
    MinorBlues,
    MajorBlues,
    Prometheus,
    Istrian,
    WholeTone,
    Augmented,
    Tritone,
    TwoSemitoneTritone,
    Lydian,
    #[default]
    Ionian,
    Mixolydian,
    Dorian,
    Aeolian,
    Phrygian,
    Locrian,
    MelodicMinor,
    DorianFlat9,
    LydianAugmented,
    LydianFlat7,
    MixolydianFlat13,
    SemiLocrian,
    SuperLocrian,
    HarmonicMinor,
    LocrianSharp7,
    IonianAugmented,
}

impl ScaleFormula {
    pub const ALL: [ScaleFormula; 27] = [
        ScaleFormula::MinorPentatonic,
        ScaleFormula::MajorPentatonic,
        ScaleFormula::MinorBlues,
        ScaleFormula::MajorBlues,
        ScaleFormula::Prometheus,
        ScaleFormula::Istrian,
        ScaleFormula::WholeTone,
        ScaleFormula::Augmented,
        ScaleFormula::Tritone,
        ScaleFormula::TwoSemitoneTritone,
        ScaleFormula::Lydian,
        ScaleFormula::Ionian,
        ScaleFormula::Mixolydian,
        ScaleFormula::Dorian,
        ScaleFormula::Aeolian,
        ScaleFormula::Phrygian,
        ScaleFormula::Locrian,
        ScaleFormula::MelodicMinor,
        ScaleFormula::DorianFlat9,
        ScaleFormula::LydianAugmented,
        ScaleFormula::LydianFlat7,
        ScaleFormula::MixolydianFlat13,
        ScaleFormula::SemiLocrian,
        ScaleFormula::SuperLocrian,
        ScaleFormula::HarmonicMinor,
        ScaleFormula::LocrianSharp7,
        ScaleFormula::IonianAugmented,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ScaleFormula::MinorPentatonic => "Minor Pentatonic",
            ScaleFormula::MajorPentatonic => "Major Pentatonic",
            ScaleFormula::MinorBlues => "Minor Blues",
            ScaleFormula::MajorBlues => "Major Blues",
            ScaleFormula::Prometheus => "Prometheus",
            ScaleFormula::Istrian => "Istrian",
            ScaleFormula::WholeTone => "Whole Tone",
            ScaleFormula::Augmented => "Augmented",
            ScaleFormula::Tritone => "Tritone",
            ScaleFormula::TwoSemitoneTritone => "Two Semitone Tritone",
            ScaleFormula::Lydian => "Lydian",
            ScaleFormula::Ionian => "Ionian",
            ScaleFormula::Mixolydian => "Mixolydian",
            ScaleFormula::Dorian => "Dorian",
            ScaleFormula::Aeolian => "Aeolian",
            ScaleFormula::Phrygian => "Phrygian",
            ScaleFormula::Locrian => "Locrian",
            ScaleFormula::MelodicMinor => "Melodic Minor",
            ScaleFormula::DorianFlat9 => "Dorian b9",
            ScaleFormula::LydianAugmented => "Lydian Augmented",
            ScaleFormula::LydianFlat7 => "Lydian b7",
            ScaleFormula::MixolydianFlat13 => "Mixolydian b13",
            ScaleFormula::SemiLocrian => "Semilocrian",
            ScaleFormula::SuperLocrian => "Superlocrian",
            ScaleFormula::HarmonicMinor => "Harmonic Minor",
            ScaleFormula::LocrianSharp7 => "Locrian #7",
            ScaleFormula::IonianAugmented => "Ionian Augmented",
        }
    }

    /// Semitone steps between consecutive degrees, closing back onto the tonic.
    /// Always sums to 12.
    pub fn steps(&self) -> &'static [u8] {
        match self {
            ScaleFormula::MinorPentatonic => &[3, 2, 2, 3, 2],
            ScaleFormula::MajorPentatonic => &[2, 2, 3, 2, 3],
            ScaleFormula::MinorBlues => &[3, 2, 1, 1, 3, 2],
            ScaleFormula::MajorBlues => &[2, 1, 1, 3, 2, 3],
            ScaleFormula::Prometheus => &[2, 2, 2, 3, 1, 2],
            ScaleFormula::Istrian => &[1, 2, 1, 2, 1, 5],
            ScaleFormula::WholeTone => &[2, 2, 2, 2, 2, 2],
            ScaleFormula::Augmented => &[3, 1, 3, 1, 3, 1],
            ScaleFormula::Tritone => &[1, 3, 2, 1, 3, 2],
            ScaleFormula::TwoSemitoneTritone => &[1, 1, 4, 1, 1, 4],
            ScaleFormula::Lydian => &[2, 2, 2, 1, 2, 2, 1],
            ScaleFormula::Ionian => &[2, 2, 1, 2, 2, 2, 1],
            ScaleFormula::Mixolydian => &[2, 2, 1, 2, 2, 1, 2],
            ScaleFormula::Dorian => &[2, 1, 2, 2, 2, 1, 2],
            ScaleFormula::Aeolian => &[2, 1, 2, 2, 1, 2, 2],
            ScaleFormula::Phrygian => &[1, 2, 2, 2, 1, 2, 2],
            ScaleFormula::Locrian => &[1, 2, 2, 1, 2, 2, 2],
            ScaleFormula::MelodicMinor => &[2, 1, 2, 2, 2, 2, 1],
            ScaleFormula::DorianFlat9 => &[1, 2, 2, 2, 2, 1, 2],
            ScaleFormula::LydianAugmented => &[2, 2, 2, 2, 1, 2, 1],
            ScaleFormula::LydianFlat7 => &[2, 2, 2, 1, 2, 1, 2],
            ScaleFormula::MixolydianFlat13 => &[2, 2, 1, 2, 1, 2, 2],
            ScaleFormula::SemiLocrian => &[2, 1, 2, 1, 2, 2, 2],
            ScaleFormula::SuperLocrian => &[1, 2, 1, 2, 2, 2, 2],
            ScaleFormula::HarmonicMinor => &[2, 1, 2, 2, 1, 3, 1],
            ScaleFormula::LocrianSharp7 => &[1, 2, 2, 1, 3, 1, 2],
            ScaleFormula::IonianAugmented => &[2, 2, 1, 3, 1, 2, 1],
        }
    }

    /// Parse a scale name. Case-insensitive; accepts display names,
    /// names without spaces, and the Major/Minor aliases.
    pub fn parse(s: &str) -> Option<ScaleFormula> {
        let key: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
            .flat_map(|c| c.to_lowercase())
            .collect();
        match key.as_str() {
            "major" => return Some(ScaleFormula::Ionian),
            "minor" | "naturalminor" => return Some(ScaleFormula::Aeolian),
            _ => {}
        }
        Self::ALL.iter().copied().find(|f| {
            let candidate: String = f
                .name()
                .chars()
                .filter(|c| !c.is_whitespace())
                .flat_map(|c| c.to_lowercase())
                .collect();
            candidate == key
        })
    }
}
