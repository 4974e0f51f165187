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

use chrono::DateTime;
use chrono::Local;
use chrono::Utc;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;
use serde::de;

/// A point in time, stored and exchanged as milliseconds since the Unix
/// epoch, which is how the host records review timestamps.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    pub fn from_epoch_ms(ms: i64) -> Option<Self> {
        DateTime::from_timestamp_millis(ms).map(Self)
    }

    pub fn now() -> Self {
        Self(Utc::now())
    }

    pub fn parse_rfc3339(s: &str) -> Result<Self, chrono::ParseError> {
        let ts = DateTime::parse_from_rfc3339(s)?;
        Ok(Self(ts.with_timezone(&Utc)))
    }

    pub fn epoch_ms(self) -> i64 {
        self.0.timestamp_millis()
    }

    /// Milliseconds from `earlier` to `self`. Negative if `self` is earlier.
    pub fn ms_since(self, earlier: Timestamp) -> i64 {
        self.epoch_ms() - earlier.epoch_ms()
    }

    /// The date in the local timezone, e.g. "2025-03-14".
    pub fn local_date_string(self) -> String {
        self.0.with_timezone(&Local).format("%Y-%m-%d").to_string()
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.epoch_ms())
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let ms = i64::deserialize(deserializer)?;
        Timestamp::from_epoch_ms(ms)
            .ok_or_else(|| de::Error::custom(format!("timestamp out of range: {ms}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch_ms_round_trip() {
        let ts = Timestamp::from_epoch_ms(1_700_000_000_123).unwrap();
        assert_eq!(ts.epoch_ms(), 1_700_000_000_123);
    }

    #[test]
    fn test_ms_since() {
        let a = Timestamp::from_epoch_ms(1_000).unwrap();
        let b = Timestamp::from_epoch_ms(4_500).unwrap();
        assert_eq!(b.ms_since(a), 3_500);
        assert_eq!(a.ms_since(b), -3_500);
    }

    #[test]
    fn test_serde_as_integer() {
        let ts: Timestamp = serde_json::from_str("42000").unwrap();
        assert_eq!(ts.epoch_ms(), 42_000);
        assert_eq!(serde_json::to_string(&ts).unwrap(), "42000");
    }
}
