//! # Passgate
//!
//! `passgate` puts a single shared password in front of HTTP handlers. Clients
//! are tracked with an opaque session token carried in the `session` cookie;
//! a session starts unauthenticated and flips to authenticated after a correct
//! password is posted to `/login`.
//!
//! ## Sessions
//!
//! Sessions live in an in-memory store for the lifetime of the process. There
//! is no expiry, no rotation and no sharing between processes.
//!
//! ## Gate
//!
//! Protected routes are wrapped in [`passgate::gate::AuthGateLayer`]. A request
//! whose session is not authenticated receives the login page instead of
//! reaching the wrapped handler.

pub mod cli;
pub mod passgate;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};
