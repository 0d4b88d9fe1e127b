use std::process;

use filebrowse::cli::{execute_command, output, Cli, CliError};
use filebrowse::config::Settings;
use filebrowse::infrastructure::di::ServiceContainer;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

fn main() {
    let cli = match Cli::try_parse_args(std::env::args_os()) {
        Ok(cli) => cli,
        Err(e) => exit_with(e),
    };

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => exit_with(CliError::from(e)),
    };

    let filter = match settings.effective_level(cli.debug) {
        Ok(filter) => filter,
        Err(e) => exit_with(CliError::from(e)),
    };
    setup_logging(cli.debug, filter);

    let container = ServiceContainer::new(settings);
    if let Err(e) = execute_command(&cli, &container) {
        exit_with(e);
    }
}

/// Report `err` on stderr (help/version go to stdout) and exit with its code.
fn exit_with(err: CliError) -> ! {
    match &err {
        CliError::Usage(clap_err) => {
            // clap renders its own usage text and stream choice
            let _ = clap_err.print();
        }
        other => output::error(other),
    }
    process::exit(err.exit_code());
}

fn setup_logging(verbosity: u8, filter: LevelFilter) {
    if verbosity > 3 {
        eprintln!("Don't be crazy, max is -d -d -d");
    }

    // stdout belongs to the JSON document; logs only ever go to stderr
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .with_span_events(FmtSpan::CLOSE);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();

    match filter {
        LevelFilter::INFO => tracing::info!("Debug mode: info"),
        LevelFilter::DEBUG => tracing::debug!("Debug mode: debug"),
        LevelFilter::TRACE => tracing::debug!("Debug mode: trace"),
        _ => {}
    }
}
