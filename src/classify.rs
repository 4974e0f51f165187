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

//! Maps review outcomes and overdue ratios to presentation attributes.
//!
//! Every function here is total: unknown outcome codes and out-of-range
//! ratios resolve to documented fallbacks, never an error.

use serde::Serialize;

use crate::types::band::OverdueBand;
use crate::types::config::LabelStyle;
use crate::types::config::StyleConfig;
use crate::types::score::Outcome;
use crate::types::score::Score;

/// The presentation attributes of one square in the timeline.
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct Classification {
    pub label: String,
    pub fill_color: String,
    pub border_color: String,
}

/// Classify one review for display.
pub fn classify(score: Score, overdue_ratio: f64, config: &StyleConfig) -> Classification {
    Classification {
        label: label(score, config.label_style).to_string(),
        fill_color: fill_color(score, config),
        border_color: config.band_colors.color(border_band(overdue_ratio)).to_string(),
    }
}

/// The display name of a grade. Unknown codes get an empty label. The two
/// styles differ only for the two "recalled" grades.
pub fn label(score: Score, style: LabelStyle) -> &'static str {
    let outcome = match Outcome::from_score(score) {
        Some(outcome) => outcome,
        None => return "",
    };
    match (outcome, style) {
        (Outcome::Forgot, _) => "Forgot",
        (Outcome::RecalledWithEffort, LabelStyle::Remnote) => "Recalled with Effort",
        (Outcome::RecalledWithEffort, LabelStyle::Anki) => "Good",
        (Outcome::PartiallyRecalled, LabelStyle::Remnote) => "Partially Recalled",
        (Outcome::PartiallyRecalled, LabelStyle::Anki) => "Hard",
        (Outcome::EasilyRecalled, LabelStyle::Remnote) => "Easily Recalled",
        (Outcome::EasilyRecalled, LabelStyle::Anki) => "Easy",
        (Outcome::Reset, _) => "Reset",
        (Outcome::TooEarly, _) => "Too Early",
        (Outcome::ViewedAsLeech, _) => "Viewed as Leech",
    }
}

/// The fill of a square. In inherit mode this is the host's highlight-color
/// class token ("highlight-color--green"); outcomes without a highlight
/// slot, and unknown codes, get the bare prefix, which the host treats as
/// no color. Otherwise it is the configured hex for the outcome, with gray
/// for unknown codes.
pub fn fill_color(score: Score, config: &StyleConfig) -> String {
    let outcome = Outcome::from_score(score);
    if config.inherit_colors.0 {
        let name = outcome
            .and_then(|outcome| outcome.highlight_color())
            .map(|color| color.name())
            .unwrap_or("");
        format!("highlight-color--{name}")
    } else {
        config.square_colors.color(outcome).to_string()
    }
}

/// Band an overdue ratio for border emphasis. Up to 10% late counts as on
/// time and draws no border at all.
pub fn border_band(ratio: f64) -> OverdueBand {
    if ratio <= 1.1 {
        OverdueBand::None
    } else if ratio < 1.3 {
        OverdueBand::Low
    } else if ratio < 1.6 {
        OverdueBand::Medium
    } else if ratio < 2.0 {
        OverdueBand::High
    } else if ratio < 3.0 {
        OverdueBand::VeryHigh
    } else {
        OverdueBand::Critical
    }
}

/// Band an overdue ratio for a fill color. Same thresholds as
/// [`border_band`] but with no on-time band: anything under 1.3 is Low.
/// The asymmetry is deliberate; a pending square always needs some fill,
/// while a border can simply be absent.
pub fn fill_band(ratio: f64) -> OverdueBand {
    if ratio < 1.3 {
        OverdueBand::Low
    } else if ratio < 1.6 {
        OverdueBand::Medium
    } else if ratio < 2.0 {
        OverdueBand::High
    } else if ratio < 3.0 {
        OverdueBand::VeryHigh
    } else {
        OverdueBand::Critical
    }
}
