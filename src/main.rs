use cleanup_examples::{
    cli::{Args, Command},
    error::{CleanupError, ErrorSeverity},
};
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = Args::parse_args();

    init_tracing(args.verbose);

    let command = Command::from_args(args);
    let exit_code = run_command(command);

    process::exit(exit_code);
}

/// Diagnostics go to stderr; `RUST_LOG` wins over `--verbose`
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "cleanup_examples=debug" } else { "warn" };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();
}

/// Run the command and turn its outcome into an exit code
fn run_command(command: Command) -> i32 {
    match command.execute() {
        Ok(()) => 0,
        Err(err) => report_error(&err),
    }
}

fn report_error(err: &CleanupError) -> i32 {
    eprintln!("\nError: {}", err.user_message());

    if let Some(suggestion) = err.suggestion() {
        eprintln!("Suggestion: {}", suggestion);
    }

    match err.severity() {
        ErrorSeverity::Warning => 0,
        ErrorSeverity::Error => 1,
        ErrorSeverity::Critical => 2,
    }
}
