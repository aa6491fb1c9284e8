//! Typed client for the [FFXIV Collect](https://ffxivcollect.com/) REST API.
//!
//! The entry point is [`Client`]: one accessor per collection category
//! (achievements, mounts, minions, titles, ...), specialized accessors for
//! the Triple Triad and Moogle Treasure Trove resource families, and
//! factories for character/user profile lookups.
//!
//! ```no_run
//! use xivcollect::{Client, Query};
//!
//! let client = Client::new();
//! let mount = client.mounts.show(1, None)?;
//! let hits = client.achievements.search("world", Some(Query::new().limit(10)))?;
//! let character = client.character(29193229)?;
//! let profile = character.show(None)?;
//! # Ok::<(), xivcollect::Error>(())
//! ```
//!
//! Every operation performs exactly one blocking GET against the service,
//! with no retries, caching or rate limiting. Failures of any kind surface
//! as [`Error::NotFound`]; construct the client with
//! [`Options`] `{ verbose: true, .. }` to see the underlying cause in the
//! `tracing` log.

pub mod character;
mod client;
pub mod collection;
mod error;
mod path;
mod transport;

pub use client::{Client, Lang, Options, Records, TripleTriad};
pub use error::{Error, Result};
pub use path::{Query, Scalar, LANG_TOKEN};

#[cfg(test)]
pub(crate) mod testutil;

pub(crate) mod prelude {
    pub type HttpClient = ureq::Agent;
    pub use crate::client::{Lang, Options};
    pub use crate::error::{Error, Result};
    pub use serde::{de::DeserializeOwned, Deserialize, Serialize};
    pub use std::sync::Arc;
    pub use tracing::{debug, error};
    pub use url::Url;

    const SERVICE_URL: &str = "https://ffxivcollect.com";
    pub const API_BASE_URL: &str = const_format::concatcp!(SERVICE_URL, "/api");
}
