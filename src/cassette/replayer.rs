//! Replays recorded interactions from a cassette.

use std::collections::{HashMap, VecDeque};

use super::format::{Cassette, Interaction};

/// Interactions are queued per `(port, method)` pair.
type QueueKey = (String, String);

/// Replays interactions from a loaded cassette, serving them sequentially
/// per port/method pair.
///
/// Calls to different methods may interleave freely; only the order within
/// one method is significant.
pub struct CassetteReplayer {
    queues: HashMap<QueueKey, VecDeque<Interaction>>,
    /// Last interaction served, kept so `next_interaction` can hand out a reference.
    current: Option<Interaction>,
}

impl CassetteReplayer {
    /// Create a new replayer from a loaded cassette.
    #[must_use]
    pub fn new(cassette: &Cassette) -> Self {
        let mut queues: HashMap<QueueKey, VecDeque<Interaction>> = HashMap::new();
        for interaction in &cassette.interactions {
            queues
                .entry((interaction.port.clone(), interaction.method.clone()))
                .or_default()
                .push_back(interaction.clone());
        }
        Self { queues, current: None }
    }

    /// Return the next interaction for the given port and method.
    ///
    /// # Panics
    ///
    /// Panics if the cassette has no (more) interactions for the given
    /// port/method combination, listing what was requested and what remains.
    pub fn next_interaction(&mut self, port: &str, method: &str) -> &Interaction {
        let key = (port.to_string(), method.to_string());
        if !self.queues.contains_key(&key) {
            let mut available: Vec<String> =
                self.queues.keys().map(|(p, m)| format!("{p}::{m}")).collect();
            available.sort();
            panic!(
                "Cassette exhausted: no interactions recorded for port={port:?} method={method:?}. \
                 Available port::method pairs: [{}]",
                available.join(", ")
            );
        }

        let Some(next) = self.queues.get_mut(&key).and_then(VecDeque::pop_front) else {
            panic!(
                "Cassette exhausted: all interactions for port={port:?} method={method:?} \
                 have been consumed. Unconsumed elsewhere: {}",
                self.remaining()
            );
        };
        self.current.insert(next)
    }

    /// Number of interactions not yet served.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.queues.values().map(VecDeque::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;

    fn interaction(seq: u64, port: &str, method: &str, output: serde_json::Value) -> Interaction {
        Interaction { seq, port: port.into(), method: method.into(), input: json!({}), output }
    }

    fn make_cassette(interactions: Vec<Interaction>) -> Cassette {
        Cassette {
            name: "test".into(),
            recorded_at: Utc::now(),
            client_version: "test".into(),
            interactions,
        }
    }

    #[test]
    fn serves_each_method_in_recorded_order() {
        let cassette = make_cassette(vec![
            interaction(0, "issues", "search_issues", json!(1)),
            interaction(1, "fs", "read_to_string", json!(2)),
            interaction(2, "issues", "search_issues", json!(3)),
        ]);
        let mut replayer = CassetteReplayer::new(&cassette);
        assert_eq!(replayer.remaining(), 3);

        // fs is read first even though it was recorded second
        assert_eq!(replayer.next_interaction("fs", "read_to_string").seq, 1);
        assert_eq!(replayer.next_interaction("issues", "search_issues").output, json!(1));
        assert_eq!(replayer.next_interaction("issues", "search_issues").output, json!(3));
        assert_eq!(replayer.remaining(), 0);
    }

    #[test]
    #[should_panic(expected = "Cassette exhausted")]
    fn exhausted_method_panics() {
        let cassette = make_cassette(vec![interaction(0, "clock", "now", json!("x"))]);
        let mut replayer = CassetteReplayer::new(&cassette);
        let _ = replayer.next_interaction("clock", "now");
        let _ = replayer.next_interaction("clock", "now");
    }

    #[test]
    #[should_panic(expected = "no interactions recorded")]
    fn unknown_port_panics() {
        let mut replayer = CassetteReplayer::new(&make_cassette(vec![]));
        let _ = replayer.next_interaction("unknown", "method");
    }
}
