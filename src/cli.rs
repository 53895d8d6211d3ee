//! Options shared by the generator binaries

use clap::Args;
use std::io::IsTerminal;

/// Logging flags
#[derive(Args, Debug, Clone, Default)]
pub struct Verbosity {
  /// Enable verbose output (repeat for more)
  #[arg(short, long, action = clap::ArgAction::Count)]
  pub verbose: u8,

  /// Suppress all output except errors
  #[arg(short, long)]
  pub quiet: bool,
}

impl Verbosity {
  /// Log level used when RUST_LOG is not set
  pub fn level(&self) -> &'static str {
    match self.verbose {
      0 => "warn",
      1 => "info",
      2 => "debug",
      _ => "trace",
    }
  }

  /// Initialize logging to stderr, keeping stdout free for generated listings
  pub fn init_logging(&self) {
    use tracing_subscriber::{fmt, EnvFilter};

    if self.quiet {
      return;
    }

    let filter =
      EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(self.level()));

    fmt()
      .with_env_filter(filter)
      .with_target(false)
      .with_ansi(std::io::stderr().is_terminal())
      .with_writer(std::io::stderr)
      .init();
  }
}
