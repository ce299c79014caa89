use crate::persistence::DEFAULT_LEDGER_FILE;
use clap::{App, Arg};
use std::path::PathBuf;

pub struct Args {
    pub ledger_file: PathBuf,
    pub verbosity: u64,
}

impl Args {
    pub fn parse() -> Self {
        let matches = App::new("wallet")
            .version("0.1.0")
            .about("Record income and expenses in a flat-file ledger")
            .arg(
                Arg::with_name("file")
                    .short("f")
                    .long("file")
                    .takes_value(true)
                    .default_value(DEFAULT_LEDGER_FILE)
                    .help("path of the ledger file used by load and save"),
            )
            .arg(
                Arg::with_name("verbose")
                    .short("v")
                    .multiple(true)
                    .help("log more detail to stderr, repeat for debug output"),
            )
            .get_matches();

        Self {
            ledger_file: PathBuf::from(matches.value_of("file").unwrap_or(DEFAULT_LEDGER_FILE)),
            verbosity: matches.occurrences_of("verbose"),
        }
    }

    /// Log directive used when `RUST_LOG` is not set.
    pub fn log_level(&self) -> &'static str {
        match self.verbosity {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}
