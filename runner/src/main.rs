use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use log::LevelFilter;

use processor::Processor;

fn cli() -> Command {
    Command::new("disksched")
        .about("Disk head scheduling with FCFS, SCAN and C-SCAN")
        .arg(
            Arg::new("head")
                .help("Initial head position")
                .required(true)
                .allow_negative_numbers(true)
                .value_parser(value_parser!(i64)),
        )
        .arg(
            Arg::new("input")
                .long("input")
                .value_name("FILE")
                .help("Read the job from FILE instead of stdin")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("no-prompt")
                .long("no-prompt")
                .help("Do not print the interactive prompts")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .help("Log more details to stderr (-v debug, -vv trace)")
                .action(ArgAction::Count),
        )
}

fn init_logger(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(matches: &ArgMatches) -> Result<()> {
    let head = *matches
        .get_one::<i64>("head")
        .context("missing initial head position")?;

    let input: Box<dyn BufRead> = match matches.get_one::<PathBuf>("input") {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("cannot open {}", path.display()))?,
        )),
        None => Box::new(io::stdin().lock()),
    };

    Processor::new(input, io::stdout().lock())
        .prompt(!matches.get_flag("no-prompt"))
        .run(head)?;
    Ok(())
}

/// Prints a clap error or the help text and picks the exit code.
///
/// Usage errors exit with 1. Help and version exit with 0 unless they
/// could not be written.
fn usage_exit(err: &clap::Error) -> ExitCode {
    if err.print().is_err() || err.use_stderr() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn main() -> ExitCode {
    let matches = match cli().try_get_matches() {
        Ok(matches) => matches,
        Err(err) => return usage_exit(&err),
    };

    init_logger(matches.get_count("verbose"));

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::debug!("{err:?}");
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests;
