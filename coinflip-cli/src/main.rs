//! A command line interface to coin flip sampling demonstrations.
//!

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
mod helpers;

mod commands;

use crate::commands::*;
use clap::Command;
use std::process;

fn main() {
    let matches = Command::new("Coin Flip Sampling Demos")
        .version("0.1")
        .about("A command line interface to coin flip sampling demonstrations")
        .subcommand(get_flip_command())
        .subcommand(get_pairs_command())
        .subcommand(get_distribution_command())
        .subcommand(get_pi_command())
        .subcommand(get_dice_command())
        .get_matches();

    let result = match matches.subcommand() {
        Some(("flip", flip_matches)) => run_flip(flip_matches, &mut create_write_buffer()),
        Some(("pairs", pairs_matches)) => run_pairs(pairs_matches, &mut create_write_buffer()),
        Some(("distribution", distribution_matches)) => {
            run_distribution(distribution_matches, &mut create_write_buffer())
        }
        Some(("pi", pi_matches)) => run_pi(pi_matches, &mut create_write_buffer()),
        Some(("dice", dice_matches)) => run_dice(dice_matches, &mut create_write_buffer()),
        None => run_all(&mut create_write_buffer()),
        _ => unreachable!(),
    };

    if let Err(err) = result {
        eprintln!("cannot run demonstration: '{err}'");
        process::exit(1);
    }
}
