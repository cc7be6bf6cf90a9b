use std::io::{self, BufRead, Write};

use series_statistics::{Report, Series, StatsError};

use crate::cli::Config;

/// Printed above every report
pub const BANNER: &str = ":: Statistics ::";

/// Parses one input line and renders its report
pub fn evaluate(line: &str, report: &Report) -> Result<String, StatsError> {
    let mut series: Series<f64> = line.parse()?;
    let summary = series.compute_all()?;
    Ok(report.render(&summary))
}

/// Reads lines from `input` until end of input, writing a report or an
/// error message for each one
///
/// Lines that are not valid UTF-8 are decoded lossily and fail to parse
/// like any other bad input. Returns the number of lines that produced a
/// report.
pub fn run<R, W>(config: &Config, mut input: R, mut output: W) -> io::Result<usize>
where
    R: BufRead,
    W: Write,
{
    let mut buf = Vec::new();
    let mut reports = 0;

    loop {
        write!(output, "{}", config.prompt)?;
        output.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            writeln!(output)?;
            break;
        }
        let line = String::from_utf8_lossy(&buf);

        match evaluate(&line, &config.report) {
            Ok(report) => {
                reports += 1;
                writeln!(output, "{BANNER}\n{report}")?;
            }
            Err(err) => {
                tracing::warn!(%err, input = line.trim_end(), "rejected input line");
                writeln!(output, "{err}")?;
            }
        }
    }

    tracing::info!(reports, "end of input");
    Ok(reports)
}
