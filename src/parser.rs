//! JSON loader for ticket documents.

use std::path::Path;
use tracing::debug;

use crate::error::LoadError;
use crate::ticket::TicketList;

/// Decodes a [`TicketList`] from raw JSON bytes.
///
/// # Errors
///
/// Returns an error if the bytes are not a valid ticket document, including
/// any single record with an unparseable date or time.
pub fn parse_tickets(bytes: &[u8]) -> Result<TicketList, LoadError> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Reads and decodes the ticket document at `path`.
///
/// The file is read fully before decoding starts, so the handle is released
/// whether or not decoding succeeds.
#[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load_tickets(path: impl AsRef<Path>) -> Result<TicketList, LoadError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(bytes = bytes.len(), "Ticket document read, parsing");

    let list = parse_tickets(&bytes)?;
    debug!(tickets = list.tickets.len(), "Ticket document parsed");
    Ok(list)
}
