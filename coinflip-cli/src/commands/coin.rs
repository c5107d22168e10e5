#[cfg(test)]
#[path = "../../tests/unit/commands/coin_test.rs"]
mod coin_test;

use super::*;

pub fn get_flip_command() -> Command {
    add_common_args(Command::new("flip").about("Flips a coin repeatedly and counts heads and tails"), "10")
}

pub fn get_pairs_command() -> Command {
    add_common_args(
        Command::new("pairs").about("Draws heads and tails pairs and checks how often they disagree"),
        "10",
    )
}

pub fn run_flip(matches: &ArgMatches, writer: &mut BufWriter<Box<dyn Write>>) -> GenericResult<()> {
    let environment = get_environment(matches)?;
    let samples = get_samples(matches)?;

    write_flip_report(writer, &run_flips(samples, &environment))?;
    writer.flush()?;

    Ok(())
}

pub fn run_pairs(matches: &ArgMatches, writer: &mut BufWriter<Box<dyn Write>>) -> GenericResult<()> {
    let environment = get_environment(matches)?;
    let samples = get_samples(matches)?;

    write_pairs_report(writer, &run_paired_flips(samples, &environment))?;
    writer.flush()?;

    Ok(())
}

pub(crate) fn write_flip_report(writer: &mut BufWriter<Box<dyn Write>>, report: &FlipReport) -> GenericResult<()> {
    write_section_header(writer, "COIN FLIPS")?;

    for (index, is_heads) in report.outcomes.iter().enumerate() {
        let display = if *is_heads { "Heads (true)" } else { "Tails (false)" };
        writeln!(writer, "  flip {:2}: {display}", index + 1)?;
    }

    writeln!(writer)?;
    writeln!(writer, "results: {} heads, {} tails", report.heads, report.tails)?;

    Ok(())
}

pub(crate) fn write_pairs_report(
    writer: &mut BufWriter<Box<dyn Write>>,
    report: &PairedFlipReport,
) -> GenericResult<()> {
    write_section_header(writer, "HEADS AND TAILS PAIRS")?;

    for (index, (heads, tails)) in report.outcomes.iter().enumerate() {
        let verdict = if heads != tails { "opposite" } else { "same" };
        writeln!(writer, "  pair {:2}: heads={heads:5}, tails={tails:5} ({verdict})", index + 1)?;
    }

    writeln!(writer)?;
    writeln!(writer, "results: {} opposite, {} matching", report.opposite, report.matching)?;

    Ok(())
}
