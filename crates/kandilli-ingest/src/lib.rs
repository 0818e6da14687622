//! Fetching and parsing of the Kandilli Observatory event listing.
//!
//! The observatory publishes recent events as a fixed-width plaintext table
//! inside a `<pre>` block on a single HTML page, encoded as windows-1254.
//! This crate downloads that page, decodes it, extracts the table and turns
//! each data line into an [`Event`](kandilli_common::Event). There is no
//! caching: every call re-fetches the upstream page.

pub mod client;
pub mod parse;
pub mod source;

pub use client::{KandilliClient, DEFAULT_UPSTREAM_URL};
pub use source::EventSource;
