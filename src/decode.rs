//! Lenient JSON decoding for backend responses.
//!
//! The backend may omit fields or send `null` for them. Such fields decode to
//! their zero value instead of failing the whole response, so screens always
//! get something renderable.

use crate::{JukeJamError, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

/// Deserialize a field, mapping `null` to `T::default()`.
///
/// Combine with `#[serde(default)]` so that a missing key is covered as well.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decode a response body into `T`.
pub fn decode_json<T: DeserializeOwned>(body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|e| {
        log::warn!("Response body did not match expected shape: {e}");
        log::trace!("Undecodable body: {body}");
        JukeJamError::Decode(e.to_string())
    })
}
