use std::{
    io::{BufRead, Write},
    path::{Path, PathBuf},
};

use anyhow::Result;
use colored::Colorize;
use tracing::info;

use crate::{
    catalog::Catalog,
    prompt::Console,
    report::{self, ReportFormat},
    valuation::Valuation,
};

#[derive(Clone, Debug)]
pub struct Session {
    pub catalog: Catalog,
    pub output_dir: PathBuf,
}

impl Session {
    pub fn new(catalog: Catalog, output_dir: &Path) -> Self {
        Self {
            catalog,
            output_dir: output_dir.to_path_buf(),
        }
    }

    /// Runs one full interactive session: catalog, collection, summary and
    /// the optional save. Returns the path of the saved report, if any.
    pub fn run<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> Result<Option<PathBuf>> {
        console.say("")?;
        console.say("=".repeat(60))?;
        console.say("STOCK PORTFOLIO TRACKER")?;
        console.say("=".repeat(60))?;
        console.say(report::render_catalog(&self.catalog))?;

        let portfolio = console.collect_portfolio(&self.catalog)?;
        info!("portfolio collected: {}", portfolio);

        let valuation = Valuation::compute(&portfolio, &self.catalog)?;
        console.say(report::render_summary(&valuation))?;

        let saved = match console.ask_save_format()? {
            Some(format) => Some(self.save(console, &valuation, format)?),
            None => None,
        };

        console.say("\nThank you for using Stock Portfolio Tracker!")?;
        Ok(saved)
    }

    fn save<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
        valuation: &Valuation,
        format: ReportFormat,
    ) -> Result<PathBuf> {
        let now = chrono::Local::now().naive_local();
        let path = report::save(valuation, format, &self.output_dir, now)?;
        console.say(format!("\n✓ Portfolio saved to: {}", path.display()).green())?;
        Ok(path)
    }
}
