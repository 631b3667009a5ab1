/// Command dispatch: routes `Command` enum variants to their implementations.
pub mod list;

use crate::catalog::CatalogError;
use crate::cli::args::Command;
use crate::config::Config;

/// Dispatch a parsed `Command` to its handler.
///
/// # Errors
///
/// Returns `CatalogError` on any command failure.
pub fn dispatch(command: &Command, config: &Config) -> Result<(), CatalogError> {
    match command {
        Command::CatalogList(args) => list::run(args, config),
    }
}
