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

use crate::types::score::Outcome;

/// The host's six highlight-color slots. Squares can inherit their fill
/// from these instead of the configured hex palette.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum HighlightColor {
    Red,
    Orange,
    Green,
    Blue,
    Purple,
    Yellow,
}

impl HighlightColor {
    pub fn name(self) -> &'static str {
        match self {
            HighlightColor::Red => "red",
            HighlightColor::Orange => "orange",
            HighlightColor::Green => "green",
            HighlightColor::Blue => "blue",
            HighlightColor::Purple => "purple",
            HighlightColor::Yellow => "yellow",
        }
    }
}

impl Outcome {
    /// The highlight-color slot for an outcome. This is an explicit table:
    /// there is one slot fewer than there are outcomes, and ViewedAsLeech is
    /// the outcome without one.
    pub fn highlight_color(self) -> Option<HighlightColor> {
        match self {
            Outcome::Forgot => Some(HighlightColor::Red),
            Outcome::PartiallyRecalled => Some(HighlightColor::Orange),
            Outcome::RecalledWithEffort => Some(HighlightColor::Green),
            Outcome::EasilyRecalled => Some(HighlightColor::Blue),
            Outcome::Reset => Some(HighlightColor::Purple),
            Outcome::TooEarly => Some(HighlightColor::Yellow),
            Outcome::ViewedAsLeech => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leech_has_no_slot() {
        assert_eq!(Outcome::ViewedAsLeech.highlight_color(), None);
    }

    #[test]
    fn test_slot_names() {
        assert_eq!(Outcome::Forgot.highlight_color().unwrap().name(), "red");
        assert_eq!(
            Outcome::PartiallyRecalled.highlight_color().unwrap().name(),
            "orange"
        );
        assert_eq!(
            Outcome::RecalledWithEffort.highlight_color().unwrap().name(),
            "green"
        );
        assert_eq!(
            Outcome::EasilyRecalled.highlight_color().unwrap().name(),
            "blue"
        );
        assert_eq!(Outcome::Reset.highlight_color().unwrap().name(), "purple");
        assert_eq!(Outcome::TooEarly.highlight_color().unwrap().name(), "yellow");
    }
}
