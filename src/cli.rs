use clap::Parser;

/// Top-level CLI definition. The catalog, destination root, and processing
/// limit are fixed in source; only diagnostics are tunable.
#[derive(Parser, Debug)]
#[command(
    name = "fixturegen",
    version,
    about = "Materialize a placeholder game library for test fixtures"
)]
pub struct Cli {
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Helper entry point so `main` can stay minimal.
pub fn parse() -> Cli {
    Cli::parse()
}
