mod cli;
mod report;

use std::fs::File;
use std::io::Write;
use std::process::ExitCode;

use tertian_core::config::Config;
use tertian_core::formula::{full_formula, matching_formula};
use tertian_core::harmony::HarmonizeMode;
use tertian_core::input::ChordInput;
use tertian_core::theory::Theory;
use tertian_types::ScaleFormula;

use cli::{CliError, Command, HarmonizeArgs, IdentifySource, Invocation};
use report::{FormulaReport, HarmonyReport, IntervalReport};

fn init_logging(verbose: bool) {
    use simplelog::{LevelFilter, WriteLogger};

    let log_level = if verbose { LevelFilter::Debug } else { LevelFilter::Warn };

    let log_path = dirs::config_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("tertian")
        .join("tertian.log");

    if let Some(parent) = log_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    let log_file = match File::create(&log_path)
        .or_else(|_| File::create(std::env::temp_dir().join("tertian.log")))
    {
        Ok(file) => file,
        Err(e) => {
            eprintln!("tertian: logging disabled, cannot create log file: {}", e);
            return;
        }
    };

    if let Err(e) = WriteLogger::init(log_level, simplelog::Config::default(), log_file) {
        eprintln!("tertian: logging disabled: {}", e);
        return;
    }

    log::info!("tertian starting (log level: {:?})", log_level);
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let invocation = match cli::parse(&args) {
        Ok(invocation) => invocation,
        Err(e) => {
            eprintln!("tertian: {}\n\n{}", e, cli::USAGE);
            return ExitCode::FAILURE;
        }
    };
    init_logging(invocation.verbose);

    if invocation.command == Command::Help {
        println!("{}", cli::USAGE);
        return ExitCode::SUCCESS;
    }

    let config = Config::load();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match run(&invocation, &config, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{:?} failed: {}", invocation.command, e);
            eprintln!("tertian: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run<W: Write>(invocation: &Invocation, config: &Config, out: &mut W) -> Result<(), CliError> {
    let theory = config.theory()?;
    let json = invocation.json_output;
    match &invocation.command {
        Command::Identify(source) => {
            let input = match source {
                IdentifySource::Names(names) => ChordInput::from(names.clone()),
                IdentifySource::Json(text) => ChordInput::parse_json(text)?,
            };
            let found = theory.identifier().identify(input)?;
            if json {
                report::json(out, &found)
            } else {
                report::identification(out, &found)
            }
        }
        Command::Harmonize(args) => harmonize(&theory, config, args, json, out),
        Command::Interval { from, to } => {
            let pool = theory.pool();
            let report = IntervalReport {
                from: from.clone(),
                to: to.clone(),
                semitones: pool.interval_value(from, to)?,
                name: pool.interval(from, to)?,
            };
            if json {
                report::json(out, &report)
            } else {
                report::interval(out, &report)
            }
        }
        Command::Formula(notes) => {
            let report = FormulaReport {
                notes: notes.clone(),
                full: full_formula(theory.pool(), notes)?,
                matching: matching_formula(theory.pool(), notes)?,
            };
            if json {
                report::json(out, &report)
            } else {
                report::formula(out, &report)
            }
        }
        Command::Help => {
            writeln!(out, "{}", cli::USAGE)?;
            Ok(())
        }
    }
}

fn harmonize<W: Write>(
    theory: &Theory,
    config: &Config,
    args: &HarmonizeArgs,
    json: bool,
    out: &mut W,
) -> Result<(), CliError> {
    let formula = match &args.scale {
        Some(name) => ScaleFormula::parse(name)
            .ok_or_else(|| CliError::Usage(format!("unknown scale {}", name)))?,
        None => config.scale(),
    };
    let tonic = args.tonic.as_deref().unwrap_or(config.tonic());
    let depth = args.depth.unwrap_or(config.depth());
    let mode = if args.names {
        HarmonizeMode::Names
    } else {
        HarmonizeMode::Chords
    };

    let scale = theory.scale(tonic, formula)?;
    let harmony = theory.harmonizer().harmonize(&scale, depth, mode)?;
    let report = HarmonyReport {
        scale: &scale.name,
        depth,
        harmony: &harmony,
    };
    if json {
        report::json(out, &report)
    } else {
        report::harmony(out, &report)
    }
}
