//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `logic_canvas_core` linkage and logging bootstrap.
//! - Seed a tiny canvas and print evaluated molecules deterministically.

use clap::{value_parser, Arg, ArgMatches, Command};
use log::info;
use logic_canvas_core::{
    default_log_level, init_logging, AtomDraft, AtomPatch, CanvasConfig, CanvasContext,
    LogConfig, LogLevel, LogicalConnector, MoleculeDraft,
};
use std::path::PathBuf;
use std::process::ExitCode;

const LOG_LEVEL_ENV: &str = "LOGIC_CANVAS_LOG_LEVEL";

fn cli() -> Command {
    Command::new("logic_canvas")
        .about("Seeds a small logic canvas and prints evaluated molecules")
        .version(logic_canvas_core::core_version())
        .arg(
            Arg::new("log_level")
                .long("log-level")
                .env(LOG_LEVEL_ENV)
                .num_args(1)
                .required(false)
                .value_parser(parse_log_level)
                .help("Minimum log level: trace|debug|info|warn|error."),
        )
        .arg(
            Arg::new("log_dir")
                .long("log-dir")
                .num_args(1)
                .required(false)
                .value_parser(value_parser!(PathBuf))
                .help("Absolute directory for rotating log files; stderr when absent."),
        )
}

fn main() -> ExitCode {
    let matches = cli().get_matches();
    if let Err(err) = init_logging(&log_config(&matches)) {
        eprintln!("logic_canvas: {err}");
        return ExitCode::FAILURE;
    }

    println!("logic_canvas_core ping={}", logic_canvas_core::ping());
    println!("logic_canvas_core version={}", logic_canvas_core::core_version());

    let context = CanvasContext::new(CanvasConfig::sequential());
    let rain = context
        .atoms()
        .add(AtomDraft::new("P", "it rains").with_truth_value(true));
    let wet = context
        .atoms()
        .add(AtomDraft::new("Q", "streets are wet").at(120.0, 0.0));

    context.molecules().add(
        MoleculeDraft::new(vec![rain.clone(), wet.clone()], LogicalConnector::And).at(60.0, 80.0),
    );
    context.molecules().add(
        MoleculeDraft::new(vec![rain, wet.clone()], LogicalConnector::Implies)
            .at(60.0, 160.0),
    );
    context
        .molecules()
        .add(MoleculeDraft::new(vec!["a99".into()], LogicalConnector::Not).at(60.0, 240.0));

    print_evaluated(&context, "initial");
    context.atoms().update(&wet, AtomPatch::truth_value(true));
    print_evaluated(&context, "after Q=true");

    info!("event=cli_done module=cli status=ok");
    ExitCode::SUCCESS
}

fn print_evaluated(context: &CanvasContext, label: &str) {
    println!("[{label}]");
    for molecule in context.evaluated_molecules().get().iter() {
        let refs: Vec<&str> = molecule.atoms.iter().map(|id| id.as_str()).collect();
        println!(
            "  {} {}({}) = {}",
            molecule.id,
            molecule.connector,
            refs.join(", "),
            molecule.truth_value
        );
    }
}

fn parse_log_level(value: &str) -> Result<LogLevel, String> {
    value.parse::<LogLevel>().map_err(|err| err.to_string())
}

/// Stderr logging unless `--log-dir` is given.
fn log_config(matches: &ArgMatches) -> LogConfig {
    let level = matches
        .get_one::<LogLevel>("log_level")
        .copied()
        .unwrap_or_else(default_log_level);

    match matches.get_one::<PathBuf>("log_dir") {
        Some(dir) => LogConfig::file(level, dir.clone()),
        None => LogConfig::stderr(level),
    }
}
