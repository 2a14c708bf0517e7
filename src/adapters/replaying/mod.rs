//! Replaying adapters that replay recorded interactions.
//!
//! Outputs follow the recording convention: plain values for infallible
//! methods, `{"Ok": v}` / `{"Err": "message"}` for fallible ones.

pub mod clock;
pub mod editor;
pub mod filesystem;
pub mod id_gen;
pub mod issues;

use std::error::Error;
use std::sync::{Mutex, PoisonError};

use serde::de::DeserializeOwned;

use crate::cassette::replayer::CassetteReplayer;

pub use clock::ReplayingClock;
pub use editor::ReplayingEditor;
pub use filesystem::ReplayingFileSystem;
pub use id_gen::ReplayingIdGenerator;
pub use issues::ReplayingIssueTracker;

/// Take the next recorded output for `port::method`.
///
/// # Panics
///
/// Panics when the cassette has no further interaction for the pair.
pub(crate) fn next_output(
    replayer: &Mutex<CassetteReplayer>,
    port: &str,
    method: &str,
) -> serde_json::Value {
    let mut replayer = replayer.lock().unwrap_or_else(PoisonError::into_inner);
    replayer.next_interaction(port, method).output.clone()
}

/// Decode a plain recorded value.
///
/// # Panics
///
/// Panics if the value does not have the expected shape; a cassette that
/// does not match the code replaying it is a broken fixture.
pub(crate) fn replay_value<T: DeserializeOwned>(output: serde_json::Value, context: &str) -> T {
    serde_json::from_value(output)
        .unwrap_or_else(|e| panic!("{context}: recorded output has the wrong shape: {e}"))
}

/// Decode a recorded `Result`.
pub(crate) fn replay_result<T: DeserializeOwned>(
    output: serde_json::Value,
) -> Result<T, Box<dyn Error + Send + Sync>> {
    if let Some(err) = output.get("Err") {
        let msg = err.as_str().map_or_else(|| err.to_string(), str::to_string);
        return Err(msg.into());
    }
    let value = output.get("Ok").cloned().ok_or("recorded output is neither Ok nor Err")?;
    serde_json::from_value(value).map_err(|e| format!("failed to decode recorded output: {e}").into())
}
