use crate::configuration::constants::cargo_env::CARGO_PKG_NAME;
use clap::arg_enum;
use log::LevelFilter;
use std::path::PathBuf;
use structopt::StructOpt;

arg_enum! {
    #[derive(Debug)]
    pub enum LogLevel {
        Off, Error, Warn, Info, Debug, Trace,
    }
}

#[derive(StructOpt, Debug)]
#[structopt(name = CARGO_PKG_NAME)]
pub struct Opt {
    /// Recorded runner events, one JSON object per line
    #[structopt(parse(from_os_str))]
    pub events: PathBuf,

    /// Settings file. Supported: YAML, JSON, TOML, HJSON
    #[structopt(long, short = "c", parse(from_os_str), env = "SUITETRACE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Sets a logging level
    #[structopt(case_insensitive = true, long, short = "L", possible_values = &LogLevel::variants(), env = "LOG_LEVEL")]
    pub logging: Option<LogLevel>,

    /// File to which application will write logs
    #[structopt(long, short = "O", env = "LOG_OUTPUT_FILE")]
    pub log_output_file: Option<PathBuf>,

    /// Where to write the report, stdout if neither this nor the settings name one
    #[structopt(long, short = "o", parse(from_os_str))]
    pub output: Option<PathBuf>,

    /// Print the suite tree once the replay is done
    #[structopt(long)]
    pub tree: bool,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parsing_minimal_arguments() {
        let opt = Opt::from_iter_safe(&["suitetrace", "run.jsonl"]).unwrap();

        assert_eq!(opt.events, PathBuf::from("run.jsonl"));
        assert!(opt.output.is_none());
        assert!(!opt.tree);
    }

    #[test]
    fn test_parsing_log_level_case_insensitive() {
        let opt = Opt::from_iter_safe(&["suitetrace", "-L", "debug", "--tree", "run.jsonl"]).unwrap();
        let level: LevelFilter = opt.logging.unwrap().into();

        assert_eq!(level, LevelFilter::Debug);
        assert!(opt.tree);
    }
}
