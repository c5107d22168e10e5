#[cfg(test)]
#[path = "../../tests/unit/commands/commands_test.rs"]
mod commands_test;

use clap::{Arg, ArgAction, ArgMatches, Command};
use coinflip_core::prelude::*;
use std::io::{stdout, BufWriter, Write};
use std::str::FromStr;
use std::sync::Arc;

mod coin;
pub use self::coin::{get_flip_command, get_pairs_command, run_flip, run_pairs};

mod dice;
pub use self::dice::{get_dice_command, run_dice};

mod distribution;
pub use self::distribution::{get_distribution_command, run_distribution};

mod monte_carlo;
pub use self::monte_carlo::{get_pi_command, run_pi};

const SAMPLES_ARG_NAME: &str = "samples";
const SEED_ARG_NAME: &str = "seed";
const LOG_ARG_NAME: &str = "log";

pub(crate) fn create_write_buffer() -> BufWriter<Box<dyn Write>> {
    BufWriter::new(Box::new(stdout()))
}

fn add_common_args(command: Command, default_samples: &'static str) -> Command {
    command
        .arg(
            Arg::new(SAMPLES_ARG_NAME)
                .help("Specifies amount of samples to draw")
                .short('n')
                .long(SAMPLES_ARG_NAME)
                .default_value(default_samples),
        )
        .arg(
            Arg::new(SEED_ARG_NAME)
                .help("Specifies a seed of the random source to get a repeatable run")
                .long(SEED_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(LOG_ARG_NAME)
                .help("Enables timing logs on standard error")
                .long(LOG_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
}

fn parse_int_value<T: FromStr<Err = std::num::ParseIntError>>(
    matches: &ArgMatches,
    arg_name: &str,
    arg_desc: &str,
) -> GenericResult<Option<T>> {
    matches
        .get_one::<String>(arg_name)
        .map(|arg| {
            arg.parse::<T>()
                .map_err(|err| format!("cannot get integer value, error: '{err}': '{arg_desc}'").into())
                .map(Some)
        })
        .unwrap_or(Ok(None))
}

fn get_samples(matches: &ArgMatches) -> GenericResult<usize> {
    parse_int_value::<usize>(matches, SAMPLES_ARG_NAME, "amount of samples").map(Option::unwrap_or_default)
}

fn get_environment(matches: &ArgMatches) -> GenericResult<Environment> {
    let random: Arc<dyn Random> = match parse_int_value::<u64>(matches, SEED_ARG_NAME, "random seed")? {
        Some(seed) => Arc::new(DefaultRandom::new_with_seed(seed)),
        None => Arc::new(DefaultRandom::default()),
    };

    let logger: InfoLogger =
        if matches.get_flag(LOG_ARG_NAME) { Arc::new(|msg: &str| eprintln!("{msg}")) } else { Arc::new(|_: &str| {}) };

    Ok(Environment::new(random, logger))
}

fn write_section_header(writer: &mut BufWriter<Box<dyn Write>>, title: &str) -> GenericResult<()> {
    writeln!(writer, "{}", "=".repeat(50))?;
    writeln!(writer, "{title}")?;
    writeln!(writer, "{}", "=".repeat(50))?;

    Ok(())
}

/// Runs the fixed demonstration sequence with default sample amounts on a fresh random source.
pub fn run_all(writer: &mut BufWriter<Box<dyn Write>>) -> GenericResult<()> {
    let environment = Environment::new(Arc::new(DefaultRandom::default()), Arc::new(|_: &str| {}));

    write_section_header(writer, "COIN FLIP SAMPLING DEMOS")?;
    writeln!(writer)?;

    coin::write_flip_report(writer, &run_flips(10, &environment))?;
    writeln!(writer)?;

    coin::write_pairs_report(writer, &run_paired_flips(10, &environment))?;
    writeln!(writer)?;

    distribution::write_distribution_report(writer, &analyze_distribution(10_000, &environment))?;
    writeln!(writer)?;

    monte_carlo::write_pi_report(writer, &estimate_pi(100_000, &environment))?;
    writeln!(writer)?;

    dice::write_dice_report(writer, &roll_dice(6_000, &environment))?;
    writeln!(writer)?;

    writeln!(writer, "all demonstrations completed")?;
    writer.flush()?;

    Ok(())
}
