use clap::Parser;

/// The catalog lives in memory for the lifetime of the session, so there are
/// no subcommands; the binary drops straight into the interactive menu.
#[derive(Debug, Parser)]
#[command(name = "cm")]
#[command(about = "Course management system", version)]
pub struct Cli {}
