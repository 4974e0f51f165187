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

use std::path::Path;

use serde::Deserialize;

use crate::error::Fallible;
use crate::types::band::OverdueBand;
use crate::types::score::Outcome;

/// How much detail the rendered timeline shows.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    #[default]
    Simple,
    Advanced,
}

/// Which set of grade names to display.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelStyle {
    /// Verbose names, e.g. "Recalled with Effort".
    #[default]
    Remnote,
    /// Short names, e.g. "Good".
    Anki,
}

/// A read-only snapshot of the user's display preferences, assembled once
/// per render. The core never mutates or persists it.
#[derive(Clone, PartialEq, Debug, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct StyleConfig {
    pub mode: DisplayMode,
    pub label_style: LabelStyle,
    pub inherit_colors: InheritColors,
    pub show_overdue_borders: ShowOverdueBorders,
    pub square_colors: SquareColors,
    pub band_colors: BandColors,
}

impl StyleConfig {
    pub fn load(path: &Path) -> Fallible<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: StyleConfig = toml::from_str(&contents)?;
        Ok(config)
    }
}

/// Whether square fills inherit the host's highlight colors rather than
/// using the configured hex palette. On by default.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Deserialize)]
#[serde(transparent)]
pub struct InheritColors(pub bool);

impl Default for InheritColors {
    fn default() -> Self {
        Self(true)
    }
}

/// Whether overdue borders are drawn in advanced mode. On by default.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Deserialize)]
#[serde(transparent)]
pub struct ShowOverdueBorders(pub bool);

impl Default for ShowOverdueBorders {
    fn default() -> Self {
        Self(true)
    }
}

/// The fill color for each outcome, as a CSS color string.
#[derive(Clone, PartialEq, Debug, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct SquareColors {
    pub forgot: String,
    pub hard: String,
    pub good: String,
    pub easy: String,
    pub reset: String,
    pub too_early: String,
    pub viewed_as_leech: String,
}

impl SquareColors {
    /// The configured fill for an outcome. Unrecognized outcomes get a
    /// neutral gray.
    pub fn color(&self, outcome: Option<Outcome>) -> &str {
        match outcome {
            Some(Outcome::Forgot) => &self.forgot,
            Some(Outcome::PartiallyRecalled) => &self.hard,
            Some(Outcome::RecalledWithEffort) => &self.good,
            Some(Outcome::EasilyRecalled) => &self.easy,
            Some(Outcome::Reset) => &self.reset,
            Some(Outcome::TooEarly) => &self.too_early,
            Some(Outcome::ViewedAsLeech) => &self.viewed_as_leech,
            None => "gray",
        }
    }
}

impl Default for SquareColors {
    fn default() -> Self {
        Self {
            forgot: "#c03c1c".to_string(),
            hard: "#D8A700".to_string(),
            good: "#B9D870".to_string(),
            easy: "#006344".to_string(),
            reset: "purple".to_string(),
            too_early: "#fffd8d".to_string(),
            viewed_as_leech: "gray".to_string(),
        }
    }
}

/// The emphasis color for each overdue band, as a CSS color string.
#[derive(Clone, PartialEq, Debug, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct BandColors {
    pub low: String,
    pub medium: String,
    pub high: String,
    pub very_high: String,
    pub critical: String,
}

impl BandColors {
    pub fn color(&self, band: OverdueBand) -> &str {
        match band {
            OverdueBand::None => "transparent",
            OverdueBand::Low => &self.low,
            OverdueBand::Medium => &self.medium,
            OverdueBand::High => &self.high,
            OverdueBand::VeryHigh => &self.very_high,
            OverdueBand::Critical => &self.critical,
        }
    }
}

impl Default for BandColors {
    fn default() -> Self {
        Self {
            low: "#8cb9de".to_string(),
            medium: "#f9d56e".to_string(),
            high: "#f2a65a".to_string(),
            very_high: "#f78fb3".to_string(),
            critical: "#d63447".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StyleConfig::default();
        assert_eq!(config.mode, DisplayMode::Simple);
        assert_eq!(config.label_style, LabelStyle::Remnote);
        assert!(config.inherit_colors.0);
        assert!(config.show_overdue_borders.0);
        assert_eq!(config.square_colors.color(Some(Outcome::Forgot)), "#c03c1c");
        assert_eq!(config.band_colors.color(OverdueBand::Critical), "#d63447");
        assert_eq!(config.band_colors.color(OverdueBand::None), "transparent");
    }

    #[test]
    fn test_unknown_outcome_falls_back_to_gray() {
        let config = StyleConfig::default();
        assert_eq!(config.square_colors.color(None), "gray");
    }

    #[test]
    fn test_parse_partial_toml() {
        let toml = r##"
            mode = "advanced"
            label-style = "anki"
            inherit-colors = false

            [square-colors]
            forgot = "#ff0000"

            [band-colors]
            very-high = "#123456"
        "##;
        let config: StyleConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.mode, DisplayMode::Advanced);
        assert_eq!(config.label_style, LabelStyle::Anki);
        assert!(!config.inherit_colors.0);
        assert!(config.show_overdue_borders.0);
        assert_eq!(config.square_colors.color(Some(Outcome::Forgot)), "#ff0000");
        assert_eq!(config.square_colors.color(Some(Outcome::Reset)), "purple");
        assert_eq!(config.band_colors.color(OverdueBand::VeryHigh), "#123456");
        assert_eq!(config.band_colors.color(OverdueBand::Low), "#8cb9de");
    }
}
