//! Ping Handler

use salvo::{prelude::*, writing::Text};

/// Liveness probe answering `pong`.
#[handler]
pub(crate) async fn handler(res: &mut Response) {
    res.render(Text::Plain("pong"));
}
