use clap::{ArgAction, Parser};
use series_statistics::{DEFAULT_PRECISION, DEFAULT_WIDTH, Report};
use tracing::Level;

pub const DEFAULT_PROMPT: &str = "statc>";

/// Descriptive statistics over a list of numbers
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Descriptive statistics over comma and/or whitespace separated numbers"
)]
pub struct Args {
    /// Numbers to evaluate once instead of starting the prompt
    #[arg(allow_negative_numbers = true)]
    pub values: Vec<String>,

    /// Prompt printed before each input line
    #[arg(long, default_value = DEFAULT_PROMPT)]
    pub prompt: String,

    /// Column after which long report lines wrap
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Digits after the decimal point
    #[arg(long, default_value_t = DEFAULT_PRECISION)]
    pub precision: usize,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Settings the prompt loop runs with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub prompt: String,
    pub report: Report,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            report: Report::new(),
        }
    }
}

impl Args {
    pub fn config(&self) -> Config {
        Config {
            prompt: self.prompt.clone(),
            report: Report::new()
                .with_width(self.width)
                .with_precision(self.precision),
        }
    }

    pub fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }

    /// The one-shot input line, if numbers were given on the command line
    pub fn input_line(&self) -> Option<String> {
        (!self.values.is_empty()).then(|| self.values.join(" "))
    }
}
