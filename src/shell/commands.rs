//! Shell command grammar
//!
//! Each input line is split with shell quoting rules and parsed by clap,
//! so `add "Conta de Água" 80,50 --method debit` works as expected.

use clap::{Parser, Subcommand};

use crate::error::{LedgerError, LedgerResult};
use crate::models::PaymentMethod;

/// Commands accepted before login
#[derive(Debug, Parser)]
#[command(
    name = "login",
    no_binary_name = true,
    disable_help_flag = true,
    disable_help_subcommand = true,
    disable_version_flag = true
)]
pub struct LoginLine {
    #[command(subcommand)]
    pub command: LoginCommand,
}

#[derive(Debug, Subcommand)]
pub enum LoginCommand {
    /// Enter the dashboard (no credentials are checked)
    Login {
        /// Name shown in the greeting
        user: Option<String>,
        /// Ignored
        #[arg(short, long)]
        password: Option<String>,
    },
    /// Show available commands
    Help,
    /// Leave the program
    #[command(alias = "exit")]
    Quit,
}

/// Commands accepted on the dashboard
#[derive(Debug, Parser)]
#[command(
    name = "dashboard",
    no_binary_name = true,
    disable_help_flag = true,
    disable_help_subcommand = true,
    disable_version_flag = true
)]
pub struct DashboardLine {
    #[command(subcommand)]
    pub command: DashboardCommand,
}

#[derive(Debug, Subcommand)]
pub enum DashboardCommand {
    /// Add a new expense
    #[command(alias = "new", allow_negative_numbers = true)]
    Add {
        /// What was bought
        description: String,
        /// Amount, e.g. "12.00" or "12,00"
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Payment method (credit, debit, cash)
        #[arg(short, long)]
        method: Option<PaymentMethod>,
        /// Category label
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Show the expense history, newest first
    #[command(alias = "ls")]
    List,
    /// Delete an expense by id
    #[command(alias = "rm")]
    Delete {
        /// Full id or the short `exp-xxxxxxxx` form from `list`
        id: String,
    },
    /// Show the total spent
    Total,
    /// Show the spending breakdown chart
    Chart {
        /// Print the slices as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the audit trail of this session
    History {
        /// Print entries as JSON lines
        #[arg(long)]
        json: bool,
    },
    /// Return to the login screen
    Logout,
    /// Show available commands
    Help,
    /// Leave the program
    #[command(alias = "exit")]
    Quit,
}

/// Split a raw line into words
///
/// Returns `Ok(None)` for blank lines and comments.
pub fn split_line(line: &str) -> LedgerResult<Option<Vec<String>>> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    shell_words::split(trimmed)
        .map(Some)
        .map_err(|e| LedgerError::invalid_input(format!("could not split command line: {}", e)))
}

pub const LOGIN_HELP: &str = "\
Commands:
  login [user]        enter the dashboard
  help                show this help
  quit                leave
";

pub const DASHBOARD_HELP: &str = "\
Commands:
  add <description> <amount> [--method credit|debit|cash] [--category <name>]
  list                show the expense history
  delete <id>         delete an expense (id as shown by list)
  total               show the total spent
  chart [--json]      show the spending breakdown
  history [--json]    show the changes made this session
  logout              return to the login screen
  quit                leave
";
