#[cfg(test)]
#[path = "../../tests/unit/commands/monte_carlo_test.rs"]
mod monte_carlo_test;

use super::*;

pub fn get_pi_command() -> Command {
    add_common_args(Command::new("pi").about("Estimates pi by sampling random points from the unit square"), "100000")
}

pub fn run_pi(matches: &ArgMatches, writer: &mut BufWriter<Box<dyn Write>>) -> GenericResult<()> {
    let environment = get_environment(matches)?;
    let samples = get_samples(matches)?;

    write_pi_report(writer, &estimate_pi(samples, &environment))?;
    writer.flush()?;

    Ok(())
}

pub(crate) fn write_pi_report(writer: &mut BufWriter<Box<dyn Write>>, report: &PiEstimate) -> GenericResult<()> {
    write_section_header(writer, "MONTE CARLO PI ESTIMATE")?;

    writeln!(writer, "samples:        {}", report.samples)?;
    writeln!(writer, "inside circle:  {}", report.inside)?;
    writeln!(writer, "estimate:       {:.6}", report.estimate)?;
    writeln!(writer, "absolute error: {:.6}", report.abs_error)?;
    writeln!(writer, "relative error: {:.4}%", report.rel_error * 100.)?;

    Ok(())
}
