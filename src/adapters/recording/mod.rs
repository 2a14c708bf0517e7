//! Recording adapters that capture interactions to cassettes.
//!
//! Each adapter delegates to an inner (usually live) implementation and
//! appends the call's input and outcome to the port's recorder.

pub mod clock;
pub mod editor;
pub mod filesystem;
pub mod id_gen;
pub mod issues;

use std::sync::{Arc, Mutex, PoisonError};

use serde::Serialize;
use tracing::warn;

use crate::cassette::recorder::CassetteRecorder;

pub use clock::RecordingClock;
pub use editor::RecordingEditor;
pub use filesystem::RecordingFileSystem;
pub use id_gen::RecordingIdGenerator;
pub use issues::RecordingIssueTracker;

/// Record an interaction with a simple (non-Result) return value.
///
/// Mirror of `replaying::next_output`. A value that cannot be serialized is
/// skipped with a warning; recording never fails the command itself.
pub(crate) fn record_interaction<I, O>(
    recorder: &Arc<Mutex<CassetteRecorder>>,
    port: &str,
    method: &str,
    input: &I,
    output: &O,
) where
    I: Serialize,
    O: Serialize,
{
    match (serde_json::to_value(input), serde_json::to_value(output)) {
        (Ok(input), Ok(output)) => push(recorder, port, method, input, output),
        (Err(e), _) | (_, Err(e)) => {
            warn!(port, method, error = %e, "skipping unserializable interaction");
        }
    }
}

/// Record a `Result<T, E>` interaction using the Ok/Err JSON convention.
///
/// Mirror of `replaying::replay_result`:
/// - `Ok(v)` is serialized as `{"Ok": v}`
/// - `Err(e)` is serialized as `{"Err": e.to_string()}`
pub(crate) fn record_result<T, E, I>(
    recorder: &Arc<Mutex<CassetteRecorder>>,
    port: &str,
    method: &str,
    input: &I,
    result: &Result<T, E>,
) where
    T: Serialize,
    E: std::fmt::Display,
    I: Serialize,
{
    let output = match result {
        Ok(v) => serde_json::to_value(v).map(|inner| serde_json::json!({ "Ok": inner })),
        Err(e) => Ok(serde_json::json!({ "Err": e.to_string() })),
    };
    match (serde_json::to_value(input), output) {
        (Ok(input), Ok(output)) => push(recorder, port, method, input, output),
        (Err(e), _) | (_, Err(e)) => {
            warn!(port, method, error = %e, "skipping unserializable interaction");
        }
    }
}

fn push(
    recorder: &Arc<Mutex<CassetteRecorder>>,
    port: &str,
    method: &str,
    input: serde_json::Value,
    output: serde_json::Value,
) {
    recorder.lock().unwrap_or_else(PoisonError::into_inner).record(port, method, input, output);
}
