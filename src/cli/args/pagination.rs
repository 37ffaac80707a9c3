//! Pagination argument types for CLI commands

use clap::Args;

/// Page-size flag shared by list commands.
///
/// The value stays a string here; the list handler parses it so that a bad
/// value is reported before any session is opened.
///
/// ```ignore
/// List {
///     #[command(flatten)]
///     pagination: PageSizeArgs,
/// }
/// ```
#[derive(Args, Debug, Clone)]
pub struct PageSizeArgs {
    /// The number of items to show
    #[arg(long = "page-size", short = 's', default_value = "1000")]
    pub page_size: String,
}
