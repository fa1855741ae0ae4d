//! CLI Argument Parsing
//!
//! CLIの引数解析

use clap::{Parser, Subcommand};

use crate::adapter::config::Settings;

/// Lifeguard のドキュメントストアを参照するCLI
#[derive(Parser, Debug, Clone)]
#[command(name = "lifeguard-tinydb")]
#[command(about = "Inspect Lifeguard validation results and notifications", long_about = None)]
pub struct Args {
    /// Path to database file (defaults to $LIFEGUARD_TINYDB_LOCATION, then lifeguard.json)
    #[arg(short, long, value_name = "PATH")]
    pub database: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List every stored validation result
    Validations,

    /// Show the last result of one validation
    Validation { name: String },

    /// Show the open notification of one validation
    Notification { name: String },

    /// Count validation results per status
    Summary,
}

impl Args {
    /// `--database`、環境変数、既定値の順にデータベースの場所を解決
    pub fn settings(&self) -> Settings {
        self.settings_with(|name| std::env::var(name).ok())
    }

    pub fn settings_with(&self, lookup: impl Fn(&str) -> Option<String>) -> Settings {
        Settings::resolve(self.database.as_deref(), lookup)
    }
}
