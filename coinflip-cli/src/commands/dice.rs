#[cfg(test)]
#[path = "../../tests/unit/commands/dice_test.rs"]
mod dice_test;

use super::*;

pub fn get_dice_command() -> Command {
    add_common_args(Command::new("dice").about("Rolls a six sided dice repeatedly and tallies face counts"), "6000")
}

pub fn run_dice(matches: &ArgMatches, writer: &mut BufWriter<Box<dyn Write>>) -> GenericResult<()> {
    let environment = get_environment(matches)?;
    let samples = get_samples(matches)?;

    write_dice_report(writer, &roll_dice(samples, &environment))?;
    writer.flush()?;

    Ok(())
}

pub(crate) fn write_dice_report(writer: &mut BufWriter<Box<dyn Write>>, report: &DiceReport) -> GenericResult<()> {
    write_section_header(writer, "DICE ROLLS")?;

    writeln!(writer, "rolls: {}", report.rolls)?;
    for (index, count) in report.faces.iter().enumerate() {
        writeln!(writer, "  face {}: {:>6}", index + 1, count)?;
    }

    Ok(())
}
