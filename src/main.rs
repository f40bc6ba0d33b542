#[macro_use]
extern crate log;

use log::LevelFilter;
use signal_hook::{iterator::Signals, SIGINT};
use std::{path::PathBuf, process::exit, thread};
use structopt::StructOpt;
use suitetrace::{
    app::{replay, App},
    configuration::command_line::{LogLevel, Opt},
    configuration::settings::Settings,
    Error,
};

fn main() {
    let mut options = Opt::from_args();
    let level: LevelFilter = options.logging.take().unwrap_or(LogLevel::Info).into();

    if let Err(e) = init_logging(level, &options.log_output_file) {
        eprintln!("Failed to initialize logging: {}", e);
        exit(2);
    }

    match Signals::new(&[SIGINT]) {
        Ok(signals) => {
            thread::spawn(move || {
                for sig in signals.forever() {
                    info!("Received signal {:?}, stopping", sig);
                    exit(130);
                }
            });
        }
        Err(e) => warn!("Cannot listen for signals: {}", e),
    }

    if let Err(e) = run(options) {
        error!("{}", e);
        exit(1);
    }
}

fn run(options: Opt) -> Result<(), Error> {
    let settings = Settings::load(options.config)?;
    debug!("Loaded settings {:#?}", settings);

    let steps = replay::load(&options.events)?;
    let mut app = App::new(settings.client)?;
    let report = app.run(steps);

    match options.output.or(settings.report.output) {
        Some(path) => {
            report.write_to(&path, settings.report.pretty)?;
            info!("Report written to {}", path.display());
        }
        None => println!("{}", report.to_json(settings.report.pretty)?),
    }
    if options.tree || settings.report.tree {
        app.observer().print_tree();
    }
    Ok(())
}

fn init_logging(level: LevelFilter, output: &Option<PathBuf>) -> Result<(), fern::InitError> {
    let mut dispatcher = fern::Dispatch::new()
        // Perform allocation-free log formatting
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}:{}][{}] {}",
                chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.target(),
                record
                    .line()
                    .map(|v| v.to_string())
                    .unwrap_or_else(|| "".to_owned()),
                record.level(),
                message
            ))
        })
        .level(level)
        // stdout carries the report
        .chain(std::io::stderr());

    if let Some(log_file) = output {
        dispatcher = dispatcher.chain(fern::log_file(log_file)?)
    }
    dispatcher.apply()?;
    info!("Logging level {} enabled", level);
    Ok(())
}
