//! Request ids.

use uuid::Uuid;

pub(super) const REQUEST_ID_HEADER: &str = "x-request-id";

const MAX_REQUEST_ID_LEN: usize = 128;

/// Keeps the caller's id when it is short printable ASCII, otherwise mints a
/// UUIDv7.
pub(super) fn resolve(incoming: Option<&str>) -> String {
    incoming
        .map(str::trim)
        .filter(|id| is_acceptable(id))
        .map_or_else(|| Uuid::now_v7().to_string(), ToOwned::to_owned)
}

fn is_acceptable(id: &str) -> bool {
    !id.is_empty() && id.len() <= MAX_REQUEST_ID_LEN && id.bytes().all(|b| b.is_ascii_graphic())
}
