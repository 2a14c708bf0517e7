//! Replaying adapter for the Clock port.

use std::sync::Mutex;

use chrono::{DateTime, Utc};

use super::{next_output, replay_value};
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::clock::Clock;

/// Replays recorded clock values from a cassette.
pub struct ReplayingClock {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingClock {
    /// Creates a new replaying clock from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl Clock for ReplayingClock {
    fn now(&self) -> DateTime<Utc> {
        replay_value(next_output(&self.replayer, "clock", "now"), "clock::now")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::replaying::test_support::replayer_for;
    use serde_json::json;

    #[test]
    fn serves_recorded_times_in_order() {
        let clock = ReplayingClock::new(replayer_for(
            "clock",
            "now",
            vec![json!("2024-06-15T10:30:00Z"), json!("2024-06-16T00:00:00Z")],
        ));

        assert_eq!(clock.now().to_rfc3339(), "2024-06-15T10:30:00+00:00");
        assert_eq!(clock.now().to_rfc3339(), "2024-06-16T00:00:00+00:00");
    }
}
