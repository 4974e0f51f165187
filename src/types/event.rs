// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use serde::Deserialize;
use serde::Serialize;

use crate::types::score::Score;
use crate::types::timestamp::Timestamp;

/// One completed review, as recorded by the host.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct ReviewEvent {
    /// When the review actually happened.
    pub reviewed_at: Timestamp,
    /// When the review had been due.
    pub scheduled_at: Timestamp,
    /// How long the learner took to answer, in milliseconds.
    pub response_ms: i64,
    /// The raw outcome code.
    pub score: Score,
}

/// A card's review record: the chronological history (ascending by
/// `reviewed_at`) plus the due date of the next, still-unreviewed
/// repetition, if one is scheduled.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct CardRecord {
    #[serde(default)]
    pub history: Vec<ReviewEvent>,
    #[serde(default)]
    pub next_due: Option<Timestamp>,
}

impl CardRecord {
    /// Whether the history is in chronological order. The host is supposed
    /// to guarantee this; we only use it to warn about bad producers.
    pub fn is_chronological(&self) -> bool {
        self.history
            .windows(2)
            .all(|pair| pair[0].reviewed_at <= pair[1].reviewed_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(reviewed_ms: i64) -> ReviewEvent {
        ReviewEvent {
            reviewed_at: Timestamp::from_epoch_ms(reviewed_ms).unwrap(),
            scheduled_at: Timestamp::from_epoch_ms(reviewed_ms).unwrap(),
            response_ms: 1000,
            score: Score::new(1.0),
        }
    }

    #[test]
    fn test_is_chronological() {
        let record = CardRecord {
            history: vec![event(10), event(20), event(20), event(30)],
            next_due: None,
        };
        assert!(record.is_chronological());

        let record = CardRecord {
            history: vec![event(20), event(10)],
            next_due: None,
        };
        assert!(!record.is_chronological());
    }

    #[test]
    fn test_deserialize_record() {
        let json = r#"{
            "history": [
                { "reviewed_at": 20, "scheduled_at": 15, "response_ms": 2000, "score": 0.5 }
            ],
            "next_due": 40
        }"#;
        let record: CardRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.history.len(), 1);
        assert_eq!(record.history[0].scheduled_at.epoch_ms(), 15);
        assert_eq!(record.next_due.unwrap().epoch_ms(), 40);
    }

    #[test]
    fn test_deserialize_empty_record() {
        let record: CardRecord = serde_json::from_str("{}").unwrap();
        assert!(record.history.is_empty());
        assert!(record.next_due.is_none());
    }
}
