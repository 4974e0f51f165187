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

//! Review-history analytics for spaced repetition cards: derived timing
//! metrics (intervals, delays, overdue ratios, growth factors) and their
//! mapping to presentation attributes (labels, fills, border emphasis),
//! plus a small CLI that renders a card's history as HTML or JSON.

pub mod classify;
pub mod cli;
pub mod cmd;
pub mod error;
pub mod format;
pub mod metrics;
pub mod types;
pub mod view;

pub use classify::Classification;
pub use classify::classify;
pub use metrics::CardMetrics;
pub use metrics::compute_metrics;
