#[cfg(test)]
#[path = "../../tests/unit/commands/distribution_test.rs"]
mod distribution_test;

use super::*;

/// Length of the longest histogram bar.
const BAR_WIDTH: usize = 40;

pub fn get_distribution_command() -> Command {
    add_common_args(
        Command::new("distribution").about("Analyzes the distribution of uniform draws from the unit interval"),
        "10000",
    )
}

pub fn run_distribution(matches: &ArgMatches, writer: &mut BufWriter<Box<dyn Write>>) -> GenericResult<()> {
    let environment = get_environment(matches)?;
    let samples = get_samples(matches)?;

    write_distribution_report(writer, &analyze_distribution(samples, &environment))?;
    writer.flush()?;

    Ok(())
}

pub(crate) fn write_distribution_report(
    writer: &mut BufWriter<Box<dyn Write>>,
    report: &DistributionReport,
) -> GenericResult<()> {
    write_section_header(writer, "UNIT INTERVAL DISTRIBUTION")?;

    writeln!(writer, "samples: {}", report.samples)?;
    writeln!(writer, "min:     {:.6}", report.min)?;
    writeln!(writer, "max:     {:.6}", report.max)?;
    writeln!(writer, "mean:    {:.6}", report.mean)?;
    writeln!(writer, "stdev:   {:.6}", report.stdev)?;
    writeln!(writer)?;

    let buckets = report.histogram.buckets();
    let width = 1. / buckets.len() as Float;
    let largest = buckets.iter().max().copied().unwrap_or(0);

    for (index, count) in buckets.iter().enumerate() {
        let bar = if largest == 0 { 0 } else { count * BAR_WIDTH / largest };
        writeln!(
            writer,
            "  [{:.1}, {:.1}) {:>6} {}",
            index as Float * width,
            (index + 1) as Float * width,
            count,
            "#".repeat(bar)
        )?;
    }

    Ok(())
}
