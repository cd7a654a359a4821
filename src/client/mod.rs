//! User sources.
//!
//! The list view talks to a [`UserSource`] rather than to HTTP directly, so
//! the TUI can be driven by the real API or by an in-memory collection.
//!
//! ```ignore
//! use userdeck::client::{RandomDataClient, RandomDataClientConfig, UserSource};
//!
//! let client = RandomDataClient::new(RandomDataClientConfig::default())?;
//! for user in client.fetch_users()? {
//!     println!("{}", user.full_name());
//! }
//! ```

mod http;
pub mod response;

pub use http::{RandomDataClient, RandomDataClientConfig, DEFAULT_API_BASE, DEFAULT_PAGE_SIZE};
pub use response::decode_users;

use crate::error::{FetchErrorKind, Result, UserdeckError};
use crate::model::UserRecord;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Something that can produce one page of users.
///
/// Implementations perform a single attempt per call. Callers run this off
/// the UI thread, hence the `Send + Sync` bound.
pub trait UserSource: Send + Sync {
    /// Fetch the user collection, in the order the source returns it.
    fn fetch_users(&self) -> Result<Vec<UserRecord>>;

    /// Short name for logs.
    fn name(&self) -> &'static str;
}

/// In-memory source that returns the same outcome on every call.
///
/// Counts calls so tests can assert how many fetches were issued.
#[derive(Debug)]
pub struct StaticSource {
    outcome: std::result::Result<Vec<UserRecord>, FetchErrorKind>,
    calls: AtomicUsize,
}

impl StaticSource {
    /// A source that always succeeds with `users`.
    #[must_use]
    pub const fn new(users: Vec<UserRecord>) -> Self {
        Self {
            outcome: Ok(users),
            calls: AtomicUsize::new(0),
        }
    }

    /// A source that always fails with `kind`.
    #[must_use]
    pub const fn failing(kind: FetchErrorKind) -> Self {
        Self {
            outcome: Err(kind),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of times `fetch_users` has been called.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl UserSource for StaticSource {
    fn fetch_users(&self) -> Result<Vec<UserRecord>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcome
            .clone()
            .map_err(|kind| UserdeckError::fetch("static source", kind))
    }

    fn name(&self) -> &'static str {
        "static"
    }
}
