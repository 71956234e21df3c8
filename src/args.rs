//! Command-line interface for the budgetkat binary.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::filter::LevelFilter;

use crate::session::View;

/// budgetkat: a cat-themed budget tracker for the terminal.
///
/// Without a subcommand this opens the interactive interface, where you can
/// log income and expenses against a handful of budget categories and watch
/// totals, charts and advice update as you go. Nothing is saved between runs.
///
/// The subcommands print one view of a freshly seeded session and exit.
#[derive(Debug, Parser, Clone)]
#[command(version)]
pub(crate) struct Args {
    /// The logging verbosity. One of, from least to most verbose:
    /// off, error, warn, info, debug, trace
    ///
    /// This can be overridden by RUST_LOG. Logs are written to stderr.
    #[arg(long, env = "BUDGETKAT_LOG_LEVEL", default_value_t = LevelFilter::WARN)]
    log_level: LevelFilter,

    /// The view the interface opens on: dashboard, transactions, reports or insights.
    #[arg(long, env = "BUDGETKAT_VIEW", default_value = "dashboard", value_parser = parse_view)]
    view: View,

    /// Start with an empty transaction log instead of the sample data.
    #[arg(long, env = "BUDGETKAT_NO_SEED")]
    no_seed: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Args {
    pub(crate) fn log_level(&self) -> LevelFilter {
        self.log_level
    }

    pub(crate) fn view(&self) -> View {
        self.view
    }

    pub(crate) fn seed(&self) -> bool {
        !self.no_seed
    }

    pub(crate) fn command(&self) -> Option<&Command> {
        self.command.as_ref()
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub(crate) enum Command {
    /// Print income, expenses, balance and budget status.
    Summary,
    /// Print the spending breakdown, category details and monthly trend.
    Report,
    /// Print insights, spending recommendations and savings potential.
    Insights,
    /// Write all transactions to a CSV file.
    Export {
        /// Output file. Defaults to budgetkat-export-YYYY-MM-DD.csv in the
        /// current directory.
        path: Option<PathBuf>,
    },
}

fn parse_view(s: &str) -> Result<View, String> {
    View::parse(s).ok_or_else(|| {
        format!("unknown view '{s}', expected dashboard, transactions, reports or insights")
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["budgetkat"]).unwrap();
        assert_eq!(args.log_level(), LevelFilter::WARN);
        assert_eq!(args.view(), View::Dashboard);
        assert!(args.seed());
        assert!(args.command().is_none());
    }

    #[test]
    fn test_flags_and_subcommand() {
        let args = Args::try_parse_from([
            "budgetkat",
            "--log-level",
            "debug",
            "--view",
            "reports",
            "--no-seed",
            "export",
            "out.csv",
        ])
        .unwrap();
        assert_eq!(args.log_level(), LevelFilter::DEBUG);
        assert_eq!(args.view(), View::Reports);
        assert!(!args.seed());
        assert_eq!(
            args.command(),
            Some(&Command::Export {
                path: Some(PathBuf::from("out.csv"))
            })
        );
    }

    #[test]
    fn test_unknown_view_rejected() {
        assert!(Args::try_parse_from(["budgetkat", "--view", "budgets"]).is_err());
    }
}
