use std::io;
use std::process;
use tracing_subscriber::EnvFilter;
use wallet_ledger::args::Args;
use wallet_ledger::engine::Ledger;
use wallet_ledger::shell::Shell;

fn main() {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let mut ledger = Ledger::new();
    let stdin = io::stdin();
    let mut shell = Shell::new(stdin.lock(), io::stdout());

    if let Err(err) = shell.run(&mut ledger, &args.ledger_file) {
        eprintln!("wallet stopped: {}", err);
        process::exit(1);
    }
}
