//! Source abstraction over the upstream listing.

use async_trait::async_trait;
use kandilli_common::{Event, Result};

/// Something that can produce the current event listing.
///
/// The live implementation is [`KandilliClient`](crate::KandilliClient);
/// tests substitute canned data. Implementations return the full listing in
/// upstream order (most recent first) and never a partial list: any
/// fetch or extraction failure surfaces as a single error.
#[async_trait]
pub trait EventSource: Send + Sync {
    /// Fetch and parse the upstream listing.
    async fn events(&self) -> Result<Vec<Event>>;
}
