//! Command line flags for the interactive binary.

use std::env;
use std::path::PathBuf;
use std::process;

use getopts::Options;

pub struct Args {
    pub export_dir: PathBuf,
    pub log_dir: PathBuf,
    pub log_level: String,
}

fn opts() -> Options {
    let mut opts = Options::new();
    opts.optflag(
        "h",
        "help",
        concat!("Print the help output of ", env!("CARGO_PKG_NAME")),
    );
    opts.optopt(
        "e",
        "export-dir",
        "Directory to write day export files into [Default: current directory]",
        "DIR",
    );
    opts.optopt(
        "l",
        "log-dir",
        "Directory to write log files into [Default: <temp>/meetlog-logs]",
        "DIR",
    );
    opts.optopt(
        "v",
        "log-level",
        "Log level filter: trace|debug|info|warn|error [Default: build-dependent]",
        "LEVEL",
    );
    opts
}

pub fn parse(args: Vec<String>) -> Args {
    let opts = opts();

    let matches = match opts.parse(args) {
        Ok(matches) => matches,
        Err(fail) => {
            eprintln!("{fail}");
            process::exit(1);
        }
    };

    if matches.opt_present("help") {
        println!("{}", opts.usage(&opts.short_usage(env!("CARGO_PKG_NAME"))));
        process::exit(0);
    }

    let export_dir = matches
        .opt_str("export-dir")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));

    let log_dir = matches
        .opt_str("log-dir")
        .map(PathBuf::from)
        .unwrap_or_else(|| env::temp_dir().join("meetlog-logs"));

    let log_level = matches
        .opt_str("log-level")
        .unwrap_or_else(|| meetlog_core::default_log_level().to_string());

    Args {
        export_dir,
        log_dir,
        log_level,
    }
}
