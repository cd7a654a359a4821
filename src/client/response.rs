//! Decoding of the `/users` response body.

use crate::error::{FetchErrorKind, Result, UserdeckError};
use crate::model::UserRecord;
use serde::Deserialize;

/// Shapes the users endpoint is known to return.
///
/// `size >= 2` yields an array; `size=1` yields a bare object.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum UsersBody {
    Many(Vec<UserRecord>),
    One(Box<UserRecord>),
}

/// Decode a response body into records, preserving response order.
///
/// A record with a missing or mistyped field fails the whole body.
pub fn decode_users(body: &str) -> Result<Vec<UserRecord>> {
    let parsed: UsersBody = serde_json::from_str(body).map_err(|e| {
        UserdeckError::fetch(
            "decoding users",
            FetchErrorKind::InvalidResponse(e.to_string()),
        )
    })?;

    Ok(match parsed {
        UsersBody::Many(users) => users,
        UsersBody::One(user) => vec![*user],
    })
}
