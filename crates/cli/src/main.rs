use anyhow::Result;
use clap::Parser;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{fmt::SubscriberBuilder, EnvFilter};

mod app;

#[derive(Parser)]
#[command(name = "routearea")]
#[command(about = "Compute delivery-route areas and replay sort/search commands")]
#[command(version = routearea::VERSION)]
struct Cmd {
    /// Route file (`<name> <x1> <y1> ...` per line); prompted for when omitted
    #[arg(long)]
    routes: Option<PathBuf>,

    /// Command file (`sort name|area asc|dsc` or a name per line); prompted for when omitted
    #[arg(long)]
    commands: Option<PathBuf>,

    /// Print the final driver list as JSON instead of tab-separated lines
    #[arg(long)]
    json: bool,

    /// Log at debug level (overrides RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let filter = if cmd.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .init();

    let opts = app::Options {
        routes: cmd.routes,
        commands: cmd.commands,
        json: cmd.json,
    };
    let stdin = io::stdin();
    let stdout = io::stdout();
    app::run(&opts, stdin.lock(), &mut stdout.lock())
}
