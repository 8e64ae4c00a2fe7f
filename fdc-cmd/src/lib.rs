//! Command implementations for FDC CLI.
//!
//! Every command runs the same pipeline (resolve date, load the INPE feed,
//! filter, build views) and differs only in how the result is presented.

use chrono::{Local, NaiveDate};
use clap::Subcommand;
use fdc_inpe::feed::FeedSource;
use fdc_inpe::selection::UserDateSelection;
use std::net::SocketAddr;
use std::path::PathBuf;

pub mod pipeline;
pub mod regions;
pub mod render;
pub mod serve;

/// Address `serve` listens on unless `--bind` is given.
pub const DEFAULT_BIND: &str = "127.0.0.1:8501";

#[derive(Subcommand)]
pub enum Command {
    /// Serve the interactive dashboard (date picker re-runs the pipeline)
    Serve {
        /// Address to listen on
        #[arg(short, long, default_value = DEFAULT_BIND)]
        bind: SocketAddr,

        /// Read focos_abertos_24h_YYYYMMDD.csv files from this directory instead of INPE
        #[arg(long)]
        feed_dir: Option<PathBuf>,
    },

    /// Render the dashboard for one date into a standalone HTML file
    Render {
        /// Date to show (YYYY-MM-DD or YYYYMMDD), defaults to yesterday
        #[arg(short, long, value_parser = parse_date_arg)]
        date: Option<NaiveDate>,

        /// Output path for the HTML page
        #[arg(short, long, default_value = "focos_de_calor.html")]
        output: PathBuf,

        /// Read focos_abertos_24h_YYYYMMDD.csv files from this directory instead of INPE
        #[arg(long)]
        feed_dir: Option<PathBuf>,
    },

    /// Print hotspot counts per state as CSV
    Regions {
        /// Date to count (YYYY-MM-DD or YYYYMMDD), defaults to yesterday
        #[arg(short, long, value_parser = parse_date_arg)]
        date: Option<NaiveDate>,

        /// Read focos_abertos_24h_YYYYMMDD.csv files from this directory instead of INPE
        #[arg(long)]
        feed_dir: Option<PathBuf>,
    },
}

fn parse_date_arg(s: &str) -> Result<NaiveDate, String> {
    fdc_utils::dates::parse_user_date(s).map_err(|e| format!("invalid date '{}': {}", s, e))
}

fn feed_source(feed_dir: Option<PathBuf>) -> FeedSource {
    match feed_dir {
        Some(dir) => FeedSource::Directory(dir),
        None => FeedSource::remote(),
    }
}

/// Explicit date, or the day before `today`.
fn selection_or_default(date: Option<NaiveDate>, today: NaiveDate) -> UserDateSelection {
    date.map(UserDateSelection::new)
        .unwrap_or_else(|| UserDateSelection::yesterday(today))
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    let today = Local::now().date_naive();
    match command {
        Command::Serve { bind, feed_dir } => {
            serve::run_serve(bind, feed_source(feed_dir), today).await
        }
        Command::Render {
            date,
            output,
            feed_dir,
        } => {
            let selection = selection_or_default(date, today);
            render::run_render(&feed_source(feed_dir), &selection, today, &output).await
        }
        Command::Regions { date, feed_dir } => {
            let selection = selection_or_default(date, today);
            regions::run_regions(&feed_source(feed_dir), &selection, today, std::io::stdout()).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_arg() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(parse_date_arg("2024-03-05"), Ok(date));
        assert_eq!(parse_date_arg("20240305"), Ok(date));
        assert!(parse_date_arg("5 de março").is_err());
    }

    #[test]
    fn test_selection_defaults_to_yesterday() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 6).unwrap();
        let explicit = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        assert_eq!(
            selection_or_default(None, today).date,
            NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()
        );
        assert_eq!(selection_or_default(Some(explicit), today).date, explicit);
    }

    #[test]
    fn test_default_bind_is_loopback() {
        let addr: SocketAddr = DEFAULT_BIND.parse().unwrap();
        assert!(addr.ip().is_loopback());
        assert_eq!(addr.port(), 8501);
    }
}
