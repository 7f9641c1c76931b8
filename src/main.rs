use log::{error, LevelFilter};
use simplelog::{ColorChoice, Config as LogConfig, TermLogger, TerminalMode};
use splay_memo::report::{self, Config};
use splay_memo::Result;
use std::env;
use std::io::{self, Write};
use std::process;

const USAGE: &str = "usage: splay-memo [fibonacci | range-sum | all]";

fn init_logging() {
    let level = if env::var_os("SPLAY_MEMO_VERBOSE").is_some() {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    if TermLogger::init(level, LogConfig::default(), TerminalMode::Stderr, ColorChoice::Auto)
        .is_err()
    {
        eprintln!("Error: a logger was already initialized.");
    }
}

fn run_fibonacci<W: Write>(config: &Config, out: &mut W) -> Result<()> {
    let rows = report::compare_fibonacci(config)?;
    writeln!(out, "\nMeasurement results:")?;
    report::write_fibonacci_table(out, &rows)
}

fn run_range_sum<W: Write>(config: &Config, out: &mut W) -> Result<()> {
    let range_report = report::compare_range_sum(config)?;
    report::write_range_sum_report(out, &range_report)
}

fn run(command: &str) -> Result<()> {
    let config = Config::default();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match command {
        "fibonacci" => run_fibonacci(&config, &mut out),
        "range-sum" => run_range_sum(&config, &mut out),
        _ => {
            run_fibonacci(&config, &mut out)?;
            writeln!(out)?;
            run_range_sum(&config, &mut out)
        },
    }
}

fn main() {
    init_logging();

    let command = env::args().nth(1).unwrap_or_else(|| String::from("all"));
    if !["fibonacci", "range-sum", "all"].contains(&command.as_str()) {
        eprintln!("{}", USAGE);
        process::exit(2);
    }

    if let Err(err) = run(&command) {
        error!("{}", err);
        process::exit(1);
    }
}
