use std::{
    fmt::Display,
    io::{BufRead, Write},
};

use anyhow::{bail, Result};
use colored::Colorize;
use tracing::debug;

use crate::{
    catalog::Catalog, error::TrackerError, portfolio::Portfolio, report::ReportFormat,
    ticker::Ticker,
};

const DONE: &str = "DONE";
const BANNER_WIDTH: usize = 60;

/// Parses a share count typed by the user.
pub fn parse_quantity(raw: &str) -> Result<u64, TrackerError> {
    let quantity: i64 = raw
        .trim()
        .parse()
        .map_err(|_| TrackerError::InvalidQuantity(raw.trim().to_string()))?;
    if quantity <= 0 {
        return Err(TrackerError::NonPositiveQuantity(quantity));
    }
    Ok(quantity as u64)
}

/// Line-oriented prompt/response dialogue over any reader and writer.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn say(&mut self, message: impl Display) -> Result<()> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            bail!("Input closed while waiting for an answer to: {}", prompt.trim());
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Prompts for holdings until the user types `done` with at least one
    /// holding recorded.
    pub fn collect_portfolio(&mut self, catalog: &Catalog) -> Result<Portfolio> {
        let mut portfolio = Portfolio::new();

        self.say("")?;
        self.say("=".repeat(BANNER_WIDTH))?;
        self.say("BUILD YOUR PORTFOLIO")?;
        self.say("=".repeat(BANNER_WIDTH))?;
        self.say("Enter your stock holdings (type 'done' when finished)")?;
        self.say("-".repeat(BANNER_WIDTH))?;

        loop {
            let ticker = Ticker::new(&self.ask("\nEnter stock symbol (or 'done' to finish): ")?);

            if ticker.as_str() == DONE {
                if !portfolio.is_empty() {
                    break;
                }
                self.say("Please add at least one stock to your portfolio!".yellow())?;
                continue;
            }

            if !catalog.contains(&ticker) {
                debug!("rejected symbol {:?}", ticker.as_str());
                self.say(
                    format!(
                        "Error: '{}' is not available. Please choose from the list above.",
                        ticker
                    )
                    .red(),
                )?;
                continue;
            }

            let quantity = self.ask_quantity(&ticker)?;
            portfolio.add(catalog, ticker.clone(), quantity)?;
            self.say(format!("✓ Added {} shares of {}", quantity, ticker).green())?;
        }

        Ok(portfolio)
    }

    fn ask_quantity(&mut self, ticker: &Ticker) -> Result<u64> {
        loop {
            let raw = self.ask(&format!("Enter quantity for {}: ", ticker))?;
            match parse_quantity(&raw) {
                Ok(quantity) => return Ok(quantity),
                Err(err) => {
                    debug!("rejected quantity for {}: {}", ticker, err);
                    let message = match err {
                        TrackerError::NonPositiveQuantity(_) => "Please enter a positive number!",
                        _ => "Please enter a valid number!",
                    };
                    self.say(message.red())?;
                }
            }
        }
    }

    /// Returns the chosen format, or `None` if the user declines to save.
    /// Unrecognized formats fall back to CSV.
    pub fn ask_save_format(&mut self) -> Result<Option<ReportFormat>> {
        let answer = self
            .ask("\nDo you want to save the portfolio? (yes/no): ")?
            .trim()
            .to_lowercase();
        if answer != "yes" && answer != "y" {
            return Ok(None);
        }

        let choice = self.ask("Choose format (csv/txt): ")?;
        let format = choice.trim().parse::<ReportFormat>().unwrap_or_else(|_| {
            debug!("unknown format {:?}, using csv", choice);
            ReportFormat::Csv
        });
        Ok(Some(format))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), vec![])
    }

    fn transcript(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("5"), Ok(5));
        assert_eq!(parse_quantity(" 12 "), Ok(12));
        assert_eq!(parse_quantity("0"), Err(TrackerError::NonPositiveQuantity(0)));
        assert_eq!(
            parse_quantity("-3"),
            Err(TrackerError::NonPositiveQuantity(-3))
        );
        assert_eq!(
            parse_quantity("two"),
            Err(TrackerError::InvalidQuantity(String::from("two")))
        );
        assert_eq!(
            parse_quantity("1.5"),
            Err(TrackerError::InvalidQuantity(String::from("1.5")))
        );
    }

    #[test]
    fn test_collect_simple() {
        let mut console = console("aapl\n2\ntsla\n1\ndone\n");
        let portfolio = console.collect_portfolio(&Catalog::standard()).unwrap();

        assert_eq!(portfolio.len(), 2);
        assert_eq!(portfolio.quantity(&Ticker::new("AAPL")), Some(2));
        assert_eq!(portfolio.quantity(&Ticker::new("TSLA")), Some(1));

        let out = transcript(console);
        assert!(out.contains("Added 2 shares of AAPL"));
        assert!(out.contains("Added 1 shares of TSLA"));
    }

    #[test]
    fn test_done_requires_one_holding() {
        let mut console = console("done\nMSFT\n3\nDone\n");
        let portfolio = console.collect_portfolio(&Catalog::standard()).unwrap();

        assert_eq!(portfolio.len(), 1);
        assert!(transcript(console).contains("Please add at least one stock to your portfolio!"));
    }

    #[test]
    fn test_unknown_symbol_is_reprompted() {
        let mut console = console("ibm\nNFLX\n4\ndone\n");
        let portfolio = console.collect_portfolio(&Catalog::standard()).unwrap();

        assert_eq!(portfolio.quantity(&Ticker::new("IBM")), None);
        assert_eq!(portfolio.quantity(&Ticker::new("NFLX")), Some(4));
        assert!(transcript(console)
            .contains("Error: 'IBM' is not available. Please choose from the list above."));
    }

    #[test]
    fn test_bad_quantity_is_reprompted() {
        let mut console = console("AAPL\n5\nMETA\nabc\n0\n-2\n3\ndone\n");
        let portfolio = console.collect_portfolio(&Catalog::standard()).unwrap();

        assert_eq!(portfolio.quantity(&Ticker::new("AAPL")), Some(5));
        assert_eq!(portfolio.quantity(&Ticker::new("META")), Some(3));

        let out = transcript(console);
        assert_eq!(out.matches("Please enter a valid number!").count(), 1);
        assert_eq!(out.matches("Please enter a positive number!").count(), 2);
        assert_eq!(out.matches("Enter quantity for META: ").count(), 4);
    }

    #[test]
    fn test_reentered_symbol_overwrites() {
        let mut console = console("AAPL\n2\nGOOGL\n1\naapl\n9\ndone\n");
        let portfolio = console.collect_portfolio(&Catalog::standard()).unwrap();

        assert_eq!(portfolio.len(), 2);
        assert_eq!(portfolio.holdings()[0].ticker, Ticker::new("AAPL"));
        assert_eq!(portfolio.holdings()[0].quantity, 9);
    }

    #[test]
    fn test_closed_input_is_an_error() {
        let mut console = console("AAPL\n");
        assert!(console.collect_portfolio(&Catalog::standard()).is_err());
    }

    #[test]
    fn test_ask_save_format() {
        assert_eq!(console("no\n").ask_save_format().unwrap(), None);
        assert_eq!(console("\n").ask_save_format().unwrap(), None);
        assert_eq!(
            console("y\ntxt\n").ask_save_format().unwrap(),
            Some(ReportFormat::Txt)
        );
        assert_eq!(
            console("YES\nCSV\n").ask_save_format().unwrap(),
            Some(ReportFormat::Csv)
        );
        assert_eq!(
            console("yes\nxlsx\n").ask_save_format().unwrap(),
            Some(ReportFormat::Csv)
        );
    }
}
