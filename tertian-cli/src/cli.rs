//! Command-line argument parsing.

use std::fmt;

use tertian_core::error::CoreError;

pub const USAGE: &str = "\
usage: tertian [-v|--verbose] [--json-output] <command>

commands:
  identify <note>...                 name a chord (2 to 5 notes)
  identify --json '<json>'           same, from a JSON array or {\"notes\": [..]} object
  harmonize [--tonic X] [--scale NAME] [--depth N] [--names]
                                     chords in thirds on every scale degree
  interval <a> <b>                   upward interval from a to b
  formula <note>...                  interval formula of a note sequence
  help                               show this message";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Identify(IdentifySource),
    Harmonize(HarmonizeArgs),
    Interval { from: String, to: String },
    Formula(Vec<String>),
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentifySource {
    Names(Vec<String>),
    Json(String),
}

/// Flags left unset fall back to config defaults.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HarmonizeArgs {
    pub tonic: Option<String>,
    pub scale: Option<String>,
    pub depth: Option<i64>,
    pub names: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub verbose: bool,
    pub json_output: bool,
    pub command: Command,
}

#[derive(Debug)]
pub enum CliError {
    Usage(String),
    Core(CoreError),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Usage(msg) => write!(f, "{}", msg),
            Self::Core(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Core(e) => Some(e),
            Self::Usage(_) => None,
        }
    }
}

impl From<CoreError> for CliError {
    fn from(e: CoreError) -> Self {
        Self::Core(e)
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        Self::Core(CoreError::Io(e))
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::Core(CoreError::Json(e))
    }
}

fn usage(msg: impl Into<String>) -> CliError {
    CliError::Usage(msg.into())
}

/// Parse arguments, not including the program name. Global flags may appear anywhere.
pub fn parse(args: &[String]) -> Result<Invocation, CliError> {
    let mut verbose = false;
    let mut json_output = false;
    let mut rest = Vec::new();
    for arg in args {
        match arg.as_str() {
            "-v" | "--verbose" => verbose = true,
            "--json-output" => json_output = true,
            _ => rest.push(arg.as_str()),
        }
    }

    let command = match rest.split_first() {
        None => Command::Help,
        Some((&cmd, tail)) => match cmd {
            "identify" => parse_identify(tail)?,
            "harmonize" => Command::Harmonize(parse_harmonize(tail)?),
            "interval" => match tail {
                [from, to] => Command::Interval {
                    from: from.to_string(),
                    to: to.to_string(),
                },
                _ => return Err(usage("interval takes exactly two notes")),
            },
            "formula" => {
                if tail.is_empty() {
                    return Err(usage("formula needs at least one note"));
                }
                Command::Formula(tail.iter().map(|s| s.to_string()).collect())
            }
            "help" | "-h" | "--help" => Command::Help,
            other => return Err(usage(format!("unknown command {}", other))),
        },
    };

    Ok(Invocation {
        verbose,
        json_output,
        command,
    })
}

fn parse_identify(tail: &[&str]) -> Result<Command, CliError> {
    match tail {
        ["--json", json] => Ok(Command::Identify(IdentifySource::Json(json.to_string()))),
        ["--json", ..] => Err(usage("--json takes exactly one argument")),
        // Size is checked by the identifier so the error matches library callers.
        names => Ok(Command::Identify(IdentifySource::Names(
            names.iter().map(|s| s.to_string()).collect(),
        ))),
    }
}

fn parse_harmonize(tail: &[&str]) -> Result<HarmonizeArgs, CliError> {
    let mut args = HarmonizeArgs::default();
    let mut iter = tail.iter();
    while let Some(&flag) = iter.next() {
        match flag {
            "--names" => args.names = true,
            "--tonic" | "--scale" | "--depth" => {
                let value = iter
                    .next()
                    .ok_or_else(|| usage(format!("{} needs a value", flag)))?;
                match flag {
                    "--tonic" => args.tonic = Some(value.to_string()),
                    "--scale" => args.scale = Some(value.to_string()),
                    _ => {
                        let depth = value.parse::<i64>().map_err(|_| {
                            usage(format!("depth must be a whole number, got {}", value))
                        })?;
                        args.depth = Some(depth);
                    }
                }
            }
            other => return Err(usage(format!("unknown harmonize option {}", other))),
        }
    }
    Ok(args)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(s: &str) -> Vec<String> {
        s.split_whitespace().map(String::from).collect()
    }

    #[test]
    fn identify_names() {
        let inv = parse(&args("identify C E G")).unwrap();
        assert_eq!(
            inv.command,
            Command::Identify(IdentifySource::Names(args("C E G")))
        );
        assert!(!inv.verbose);
        assert!(!inv.json_output);
    }

    #[test]
    fn identify_json() {
        let inv = parse(&["identify".into(), "--json".into(), r#"["C","E","G"]"#.into()]).unwrap();
        assert_eq!(
            inv.command,
            Command::Identify(IdentifySource::Json(r#"["C","E","G"]"#.into()))
        );
        assert!(parse(&args("identify --json")).is_err());
    }

    #[test]
    fn global_flags_anywhere() {
        let inv = parse(&args("identify -v C E --json-output G")).unwrap();
        assert!(inv.verbose);
        assert!(inv.json_output);
        assert_eq!(
            inv.command,
            Command::Identify(IdentifySource::Names(args("C E G")))
        );
    }

    #[test]
    fn harmonize_flags() {
        let inv = parse(&args("harmonize --tonic A --scale Dorian --depth 4 --names")).unwrap();
        assert_eq!(
            inv.command,
            Command::Harmonize(HarmonizeArgs {
                tonic: Some("A".into()),
                scale: Some("Dorian".into()),
                depth: Some(4),
                names: true,
            })
        );
        let inv = parse(&args("harmonize")).unwrap();
        assert_eq!(inv.command, Command::Harmonize(HarmonizeArgs::default()));
    }

    #[test]
    fn harmonize_bad_flags() {
        assert!(matches!(parse(&args("harmonize --depth")), Err(CliError::Usage(_))));
        assert!(matches!(
            parse(&args("harmonize --depth three")),
            Err(CliError::Usage(msg)) if msg.contains("depth must be a whole number")
        ));
        assert!(matches!(parse(&args("harmonize --mode 2")), Err(CliError::Usage(_))));
    }

    #[test]
    fn negative_depth_reaches_the_harmonizer() {
        let inv = parse(&args("harmonize --depth -1")).unwrap();
        assert!(matches!(inv.command, Command::Harmonize(HarmonizeArgs { depth: Some(-1), .. })));
    }

    #[test]
    fn interval_and_formula() {
        assert_eq!(
            parse(&args("interval C G")).unwrap().command,
            Command::Interval {
                from: "C".into(),
                to: "G".into()
            }
        );
        assert!(parse(&args("interval C")).is_err());
        assert_eq!(
            parse(&args("formula C E G")).unwrap().command,
            Command::Formula(args("C E G"))
        );
        assert!(parse(&args("formula")).is_err());
    }

    #[test]
    fn help_and_unknown() {
        assert_eq!(parse(&[]).unwrap().command, Command::Help);
        assert_eq!(parse(&args("--help")).unwrap().command, Command::Help);
        assert!(matches!(parse(&args("transpose C")), Err(CliError::Usage(_))));
    }
}
