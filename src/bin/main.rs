use anyhow::Result;
use clap::Parser;
use std::io;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use stock_tracker::catalog::Catalog;
use stock_tracker::prompt::Console;
use stock_tracker::session::Session;

#[derive(Parser, Debug)]
#[command(about = "Value a stock portfolio against a fixed price list")]
struct Args {
    /// Directory where saved reports are written
    #[arg(long, env = "STOCK_TRACKER_OUTPUT_DIR", default_value = ".")]
    output_dir: PathBuf,
    /// Disable colored terminal output
    #[arg(long)]
    no_color: bool,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // logs go to stderr so they never mix with the prompts
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            format!("{}=warn", env!("CARGO_CRATE_NAME")).into()
        }))
        .with(fmt::layer().with_writer(io::stderr))
        .init();

    let args = Args::parse();
    debug!("{:?}", args);

    if args.no_color {
        colored::control::set_override(false);
    }

    let session = Session::new(Catalog::standard(), &args.output_dir);
    let mut console = Console::new(io::stdin().lock(), io::stdout().lock());
    session.run(&mut console)?;

    Ok(())
}
