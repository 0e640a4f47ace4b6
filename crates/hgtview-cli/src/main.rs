//! `hgtview` binary.

use clap::Parser;
use hgtview_cli::{run, Cli};
use hgtview_render::{Notice, NoticeCallback};
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let notifier: NoticeCallback = Box::new(|notice: &Notice| {
        eprintln!("{}: {}", notice.summary, notice.detail);
    });

    match run(&cli.command, Some(notifier)) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
