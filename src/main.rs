//! Entry point for the **launchgrid** replay harness.
//!
//! Reads newline-delimited JSON [`Command`](launchgrid::command::Command)s
//! from stdin, drives a [`DragSession`](launchgrid::session::DragSession),
//! and prints every feedback event as one JSON line on stdout.  Useful for
//! replaying recorded gesture traces against the layout engine:
//!
//! ```text
//! launchgrid --width 390 --config grid.json < trace.ndjson
//! ```

use launchgrid::bridge::JsonCommandReader;
use launchgrid::command::Command;
use launchgrid::config::{GridConfig, Metrics};
use launchgrid::session::DragSession;
use launchgrid::traits::EventSource;
use log::{error, info};
use std::path::PathBuf;
use std::sync::mpsc;

/// Screen width used when `--width` is not given (a common phone width).
const DEFAULT_SCREEN_WIDTH: f64 = 390.0;

/// Parsed command-line options.
struct Options {
    config_path: Option<PathBuf>,
    screen_width: f64,
}

fn parse_args() -> Options {
    let mut options = Options {
        config_path: None,
        screen_width: DEFAULT_SCREEN_WIDTH,
    };
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => match args.next() {
                Some(path) => options.config_path = Some(PathBuf::from(path)),
                None => exit_usage("--config requires a path"),
            },
            "--width" => match args.next().and_then(|w| w.parse::<f64>().ok()) {
                Some(width) => options.screen_width = width,
                None => exit_usage("--width requires a number"),
            },
            other => exit_usage(&format!("unknown argument: {}", other)),
        }
    }
    options
}

fn exit_usage(message: &str) -> ! {
    eprintln!("{}", message);
    eprintln!("usage: launchgrid [--config <path>] [--width <px>]");
    std::process::exit(2);
}

/// Load the grid config from `--config`, falling back to compiled-in
/// defaults when no path is given.
fn load_config(path: Option<&PathBuf>) -> GridConfig {
    match path {
        Some(path) => match GridConfig::load(path) {
            Ok(cfg) => {
                info!("loaded config from {}", path.display());
                cfg
            }
            Err(e) => {
                error!("{}", e);
                std::process::exit(1);
            }
        },
        None => {
            info!("no config file given, using defaults");
            GridConfig::default()
        }
    }
}

fn main() {
    env_logger::init();

    let options = parse_args();
    let config = load_config(options.config_path.as_ref());
    let metrics = match Metrics::new(&config, options.screen_width) {
        Ok(m) => m,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    let mut session = DragSession::new(metrics);
    let (feedback_tx, feedback_rx) = mpsc::channel();
    session.set_feedback(feedback_tx);

    let (cmd_tx, cmd_rx) = mpsc::channel::<Command>();
    std::thread::spawn(move || {
        let stdin = std::io::BufReader::new(std::io::stdin());
        let mut source = JsonCommandReader::new(stdin);
        if let Err(e) = source.run(cmd_tx) {
            error!("command reader error: {}", e);
        }
    });

    for cmd in cmd_rx {
        if let Err(e) = session.handle(cmd) {
            error!("command error: {}", e);
        }
        for event in feedback_rx.try_iter() {
            match serde_json::to_string(&event) {
                Ok(line) => println!("{}", line),
                Err(e) => error!("failed to encode feedback event: {}", e),
            }
        }
    }
    info!("command stream closed, exiting");
}
