//! Reporting reachable-set queries. The engine itself never explains *why*
//! something is reachable (an explicit non-goal); these reporters only
//! render the reachable/stripped partition a query already computed.

mod json;
mod terminal;

pub use json::JsonReporter;
pub use terminal::TerminalReporter;

/// Output format selected on the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ReportFormat {
    #[default]
    Terminal,
    Json,
}
