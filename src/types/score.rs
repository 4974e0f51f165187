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

/// The raw outcome code of a review, exactly as the host records it. The
/// host uses fractional codes (0.5 for a partial recall, 0.01 for a review
/// done ahead of schedule), so this is a float, not an integer.
///
/// A `Score` is not guaranteed to name a known [`Outcome`]: records written
/// by newer host versions may carry codes we have never seen, and everything
/// downstream must degrade gracefully rather than reject the record.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct Score(f64);

impl Score {
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

/// The recognized review outcomes.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Outcome {
    Forgot,
    PartiallyRecalled,
    RecalledWithEffort,
    EasilyRecalled,
    ViewedAsLeech,
    Reset,
    TooEarly,
}

impl Outcome {
    /// Decode a raw score. Unknown codes yield `None`; callers fall back to
    /// their documented defaults instead of erroring.
    pub fn from_score(score: Score) -> Option<Outcome> {
        let value = score.value();
        if value == 0.0 {
            Some(Outcome::Forgot)
        } else if value == 0.5 {
            Some(Outcome::PartiallyRecalled)
        } else if value == 1.0 {
            Some(Outcome::RecalledWithEffort)
        } else if value == 1.5 {
            Some(Outcome::EasilyRecalled)
        } else if value == 2.0 {
            Some(Outcome::ViewedAsLeech)
        } else if value == 3.0 {
            Some(Outcome::Reset)
        } else if value == 0.01 {
            Some(Outcome::TooEarly)
        } else {
            None
        }
    }

    pub fn score(self) -> Score {
        match self {
            Outcome::Forgot => Score(0.0),
            Outcome::PartiallyRecalled => Score(0.5),
            Outcome::RecalledWithEffort => Score(1.0),
            Outcome::EasilyRecalled => Score(1.5),
            Outcome::ViewedAsLeech => Score(2.0),
            Outcome::Reset => Score(3.0),
            Outcome::TooEarly => Score(0.01),
        }
    }
}
