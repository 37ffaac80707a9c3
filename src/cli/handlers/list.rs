//! Generic list command handler
//!
//! Provides a reusable pattern for list commands that follow the standard flow:
//! 1. Parse the page size
//! 2. Open an authenticated session
//! 3. Fetch one page
//! 4. Render it under the command's column schema

use std::future::Future;

use log::debug;

use crate::client::{ListRequest, ListResponse};
use crate::error::Result;
use crate::output::{ColumnSpec, render};

/// Run a standard list command and return the rendered table.
///
/// The page size is validated before `connect` is called, so a bad flag never
/// opens a session or touches the network. Only the first page is fetched; a
/// continuation token in the response is dropped.
///
/// # Type Parameters
///
/// * `T` - The record type returned by the fetcher (e.g., `Secret`)
/// * `C` - The session handed from `connect` to `fetch`
///
/// # Arguments
///
/// * `page_size` - Raw `--page-size` flag value
/// * `resource_name` - Name for debug logging (e.g., "secrets")
/// * `columns` - Column schema for the output table
/// * `connect` - Opens the authenticated session
/// * `fetch` - Issues the list call given (session, request)
///
/// # Example
///
/// ```ignore
/// let table = run_list_command(
///     "100",
///     "secrets",
///     SECRET_COLUMNS,
///     || CommandContext::new(opts),
///     |ctx, request| async move { ctx.client.list_secrets(&request).await },
/// )
/// .await?;
/// ```
pub async fn run_list_command<T, C, Connect, ConnectFut, Fetch, FetchFut>(
    page_size: &str,
    resource_name: &str,
    columns: &[ColumnSpec<T>],
    connect: Connect,
    fetch: Fetch,
) -> Result<String>
where
    Connect: FnOnce() -> ConnectFut,
    ConnectFut: Future<Output = Result<C>>,
    Fetch: FnOnce(C, ListRequest) -> FetchFut,
    FetchFut: Future<Output = Result<ListResponse<T>>>,
{
    let request = ListRequest::from_flag(page_size)?;
    let session = connect().await?;

    debug!(
        "Fetching {} with page size {}",
        resource_name, request.page_size
    );

    let response = fetch(session, request).await?;

    debug!("Fetched {} {}", response.items.len(), resource_name);
    if response.has_next_page() {
        debug!(
            "More {} are available; raise --page-size to include them",
            resource_name
        );
    }

    Ok(render(columns, &response.items))
}
