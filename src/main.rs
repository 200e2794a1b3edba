use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_ledger::config::{LedgerPaths, Settings};
use expense_ledger::display::Locale;
use expense_ledger::ledger::Ledger;
use expense_ledger::logging::init_tracing;
use expense_ledger::shell::Shell;

#[derive(Parser)]
#[command(
    name = "expense-ledger",
    version,
    about = "Terminal expense tracker",
    long_about = "Track expenses for the length of a session: add and delete \
                  entries, see the total spent and a breakdown chart. Nothing \
                  is saved when the program exits."
)]
struct Cli {
    /// Settings file to use instead of the one in the config directory
    #[arg(long, global = true, env = "EXPENSE_LEDGER_CONFIG")]
    config: Option<PathBuf>,

    /// Display locale (pt-BR or en-US)
    #[arg(long, global = true)]
    locale: Option<Locale>,

    /// Start with an empty ledger instead of the sample expenses
    #[arg(long, global = true)]
    no_seed: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive shell (default)
    Shell,

    /// Show resolved paths and settings
    Config {
        /// Write the current settings to the config directory
        #[arg(long)]
        write: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut settings = match &cli.config {
        Some(path) => Settings::load_from(path)?,
        None => Settings::load_or_default(&LedgerPaths::new()?)?,
    };

    if let Some(locale) = cli.locale {
        settings.locale = locale;
    }
    if cli.no_seed {
        settings.seed_sample_data = false;
    }

    init_tracing(settings.log_filter.as_deref());

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => {
            let ledger = if settings.seed_sample_data {
                Ledger::seeded()
            } else {
                Ledger::new()
            };

            let mut shell = Shell::new(ledger, &settings);
            let stdin = io::stdin();
            let mut stdout = io::stdout();

            if stdin.is_terminal() {
                shell.run_interactive(&mut stdout)?;
            } else {
                shell.run(stdin.lock(), &mut stdout.lock())?;
            }
        }
        Commands::Config { write } => {
            let paths = LedgerPaths::new()?;
            println!("Expense Ledger Configuration");
            println!("============================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Locale:                 {}", settings.locale);
            println!("  Default category:       {}", settings.default_category);
            println!("  Default payment method: {}", settings.default_payment_method);
            println!("  Sample data:            {}", settings.seed_sample_data);
            println!(
                "  Log filter:             {}",
                settings.log_filter.as_deref().unwrap_or("(default)")
            );

            if write {
                settings.save(&paths)?;
                println!();
                println!("Wrote {}", paths.settings_file().display());
            }
        }
    }

    Ok(())
}
