//! Interactive line shell
//!
//! A thin presentation layer over [`Ledger`]: a login screen that accepts
//! anyone, followed by a dashboard that reads one command per line. The
//! shell owns the ledger for the whole session; logging out and back in
//! keeps the records.
//!
//! Terminals get line editing and history through `rustyline`
//! ([`Shell::run_interactive`]); piped input is read line by line
//! ([`Shell::run`]).

pub mod commands;

use std::io::{BufRead, Write};

use clap::Parser;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::{debug, info};

use crate::config::Settings;
use crate::display::{format_expense_list, format_total, Locale};
use crate::error::{LedgerError, LedgerResult};
use crate::ledger::{ExpenseInput, Ledger};
use crate::models::PaymentMethod;
use crate::reports::BreakdownReport;

use commands::{
    split_line, DashboardCommand, DashboardLine, LoginCommand, LoginLine, DASHBOARD_HELP,
    LOGIN_HELP,
};

/// Which screen the shell is on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    Login,
    Dashboard,
}

/// Whether the read loop should keep going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// The shell and the ledger it drives
pub struct Shell {
    ledger: Ledger,
    view: ViewState,
    user: Option<String>,
    locale: Locale,
    default_category: String,
    default_payment_method: PaymentMethod,
}

impl Shell {
    /// Create a shell around an existing ledger
    pub fn new(ledger: Ledger, settings: &Settings) -> Self {
        Self {
            ledger,
            view: ViewState::Login,
            user: None,
            locale: settings.locale,
            default_category: settings.default_category.clone(),
            default_payment_method: settings.default_payment_method,
        }
    }

    pub fn view(&self) -> ViewState {
        self.view
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Prompt for the current view
    pub fn prompt(&self) -> &'static str {
        match self.view {
            ViewState::Login => "login> ",
            ViewState::Dashboard => "> ",
        }
    }

    /// Read commands from `input` until `quit` or end of input
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: &mut W) -> LedgerResult<()> {
        Self::write_banner(output)?;

        for line in input.lines() {
            let line = line?;
            if self.handle_line(&line, output)? == Flow::Quit {
                break;
            }
        }

        debug!(records = self.ledger.len(), "shell finished");
        Ok(())
    }

    /// Read commands from the terminal with line editing and history
    pub fn run_interactive<W: Write>(&mut self, output: &mut W) -> LedgerResult<()> {
        let mut editor = DefaultEditor::new().map_err(readline_error)?;
        Self::write_banner(output)?;
        output.flush()?;

        loop {
            match editor.readline(self.prompt()) {
                Ok(line) => {
                    let trimmed = line.trim();
                    if !trimmed.is_empty() {
                        editor.add_history_entry(trimmed).ok();
                    }

                    let flow = self.handle_line(trimmed, output)?;
                    output.flush()?;
                    if flow == Flow::Quit {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => continue,
                Err(ReadlineError::Eof) => break,
                Err(err) => return Err(readline_error(err)),
            }
        }

        debug!(records = self.ledger.len(), "shell finished");
        Ok(())
    }

    fn write_banner<W: Write>(output: &mut W) -> LedgerResult<()> {
        writeln!(output, "Limpo Financeiro")?;
        writeln!(output, "{}", LOGIN_HELP.trim_end())?;
        Ok(())
    }

    /// Execute a line, printing command errors instead of returning them
    ///
    /// Only output failures end the session.
    fn handle_line<W: Write>(&mut self, line: &str, output: &mut W) -> LedgerResult<Flow> {
        match self.execute_line(line, output) {
            Ok(flow) => Ok(flow),
            Err(err @ (LedgerError::Io(_) | LedgerError::Json(_))) => Err(err),
            Err(err) => {
                writeln!(output, "Error: {}", err)?;
                Ok(Flow::Continue)
            }
        }
    }

    /// Execute one input line
    pub fn execute_line<W: Write>(&mut self, line: &str, output: &mut W) -> LedgerResult<Flow> {
        let Some(words) = split_line(line)? else {
            return Ok(Flow::Continue);
        };

        match self.view {
            ViewState::Login => match LoginLine::try_parse_from(words) {
                Ok(parsed) => self.execute_login(parsed.command, output),
                Err(err) => {
                    write!(output, "{}", err.render())?;
                    Ok(Flow::Continue)
                }
            },
            ViewState::Dashboard => match DashboardLine::try_parse_from(words) {
                Ok(parsed) => self.execute_dashboard(parsed.command, output),
                Err(err) => {
                    write!(output, "{}", err.render())?;
                    Ok(Flow::Continue)
                }
            },
        }
    }

    fn execute_login<W: Write>(&mut self, cmd: LoginCommand, output: &mut W) -> LedgerResult<Flow> {
        match cmd {
            LoginCommand::Login { user, .. } => {
                info!(user = user.as_deref().unwrap_or("-"), "login");
                self.user = user;
                self.view = ViewState::Dashboard;
                writeln!(output, "{}", self.locale.welcome(self.user.as_deref()))?;
                write!(output, "{}", format_total(&self.ledger, self.locale))?;
            }
            LoginCommand::Help => write!(output, "{}", LOGIN_HELP)?,
            LoginCommand::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn execute_dashboard<W: Write>(
        &mut self,
        cmd: DashboardCommand,
        output: &mut W,
    ) -> LedgerResult<Flow> {
        let locale = self.locale;

        match cmd {
            DashboardCommand::Add {
                description,
                amount,
                method,
                category,
            } => {
                let input = ExpenseInput::new(
                    description,
                    amount,
                    method.unwrap_or(self.default_payment_method),
                )
                .with_category(category.unwrap_or_else(|| self.default_category.clone()))
                .with_locale(locale);

                let record = self.ledger.add_from_input(input)?;
                writeln!(
                    output,
                    "+ {} {} ({})",
                    record.id,
                    record.description,
                    locale.format_money(record.amount)
                )?;
                write!(output, "{}", format_total(&self.ledger, locale))?;
            }
            DashboardCommand::List => {
                write!(output, "{}", format_expense_list(&self.ledger, locale))?;
            }
            DashboardCommand::Delete { id } => {
                if let Some(id) = self.ledger.resolve_id(&id)? {
                    if let Some(record) = self.ledger.remove(id) {
                        writeln!(output, "- {} {}", record.id, record.description)?;
                        write!(output, "{}", format_total(&self.ledger, locale))?;
                    }
                }
            }
            DashboardCommand::Total => {
                write!(output, "{}", format_total(&self.ledger, locale))?;
            }
            DashboardCommand::Chart { json } => {
                let report = BreakdownReport::generate(&self.ledger);
                if json {
                    let text = serde_json::to_string_pretty(&report)?;
                    writeln!(output, "{}", text)?;
                } else {
                    write!(output, "{}", report.format_terminal(locale))?;
                }
            }
            DashboardCommand::History { json } => {
                let audit = self.ledger.audit();
                if json {
                    audit.write_jsonl(output)?;
                } else if audit.is_empty() {
                    writeln!(output, "(no changes yet)")?;
                } else {
                    for entry in audit.entries() {
                        writeln!(output, "{}", entry.format_human_readable())?;
                    }
                }
            }
            DashboardCommand::Logout => {
                info!("logout");
                self.user = None;
                self.view = ViewState::Login;
            }
            DashboardCommand::Help => write!(output, "{}", DASHBOARD_HELP)?,
            DashboardCommand::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Continue)
    }
}

fn readline_error(err: ReadlineError) -> LedgerError {
    LedgerError::Io(format!("Terminal input failed: {}", err))
}
