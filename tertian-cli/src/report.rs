//! Plain-text and JSON rendering of command results.

use std::io::Write;

use serde::Serialize;
use tertian_core::harmony::Harmony;
use tertian_core::identify::Identification;
use tertian_types::{Formula, NoteCollection};

use crate::cli::CliError;

#[derive(Debug, Serialize)]
pub struct IntervalReport {
    pub from: String,
    pub to: String,
    pub semitones: u8,
    pub name: &'static str,
}

#[derive(Debug, Serialize)]
pub struct FormulaReport {
    pub notes: Vec<String>,
    pub full: Formula,
    pub matching: Formula,
}

#[derive(Debug, Serialize)]
pub struct HarmonyReport<'a> {
    pub scale: &'a str,
    pub depth: i64,
    #[serde(flatten)]
    pub harmony: &'a Harmony,
}

pub fn json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<(), CliError> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

pub fn identification<W: Write>(out: &mut W, found: &Identification) -> Result<(), CliError> {
    match found {
        Identification::Matches(names) => {
            for name in names {
                writeln!(out, "{}", name)?;
            }
        }
        Identification::Unmatched(formula) => writeln!(out, "no match, formula {:?}", formula)?,
    }
    Ok(())
}

pub fn harmony<W: Write>(out: &mut W, report: &HarmonyReport<'_>) -> Result<(), CliError> {
    writeln!(out, "{} (depth {})", report.scale, report.depth)?;
    match report.harmony {
        Harmony::Chords(chords) => {
            for chord in chords {
                writeln!(out, "{}", chord.note_names().join(" "))?;
            }
        }
        Harmony::Names(labels) => {
            for label in labels {
                writeln!(out, "{}", label)?;
            }
        }
    }
    Ok(())
}

pub fn interval<W: Write>(out: &mut W, report: &IntervalReport) -> Result<(), CliError> {
    writeln!(
        out,
        "{} -> {}: {} ({} semitones)",
        report.from, report.to, report.name, report.semitones
    )?;
    Ok(())
}

pub fn formula<W: Write>(out: &mut W, report: &FormulaReport) -> Result<(), CliError> {
    writeln!(out, "full:     {:?}", report.full)?;
    writeln!(out, "matching: {:?}", report.matching)?;
    Ok(())
}
