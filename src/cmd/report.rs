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

use std::fmt::Display;
use std::fmt::Formatter;
use std::path::Path;

use clap::ValueEnum;
use serde::Serialize;

use crate::classify::Classification;
use crate::classify::classify;
use crate::error::Fallible;
use crate::error::fail;
use crate::metrics::EventMetrics;
use crate::metrics::PendingMetrics;
use crate::metrics::Totals;
use crate::metrics::compute_metrics;
use crate::types::config::StyleConfig;
use crate::types::event::CardRecord;
use crate::types::event::ReviewEvent;
use crate::types::timestamp::Timestamp;
use crate::view::render_report;

#[derive(ValueEnum, Clone, Copy)]
pub enum ReportFormat {
    /// HTML output.
    Html,
    /// JSON output.
    Json,
}

impl Display for ReportFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Html => write!(f, "html"),
            ReportFormat::Json => write!(f, "json"),
        }
    }
}

/// One review in the JSON report: the raw event alongside its derived
/// metrics and its display classification.
#[derive(Serialize)]
struct ReportEvent<'a> {
    event: &'a ReviewEvent,
    metrics: &'a EventMetrics,
    classification: Classification,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    events: Vec<ReportEvent<'a>>,
    pending: Option<&'a PendingMetrics>,
    totals: &'a Totals,
}

/// Render a card's review history to stdout.
pub fn print_report(
    card_path: &Path,
    style_path: Option<&Path>,
    format: ReportFormat,
    now: Timestamp,
) -> Fallible<()> {
    if !card_path.exists() {
        return fail("card file does not exist.");
    }
    log::debug!("Loading card record...");
    let contents = std::fs::read_to_string(card_path)?;
    let card: CardRecord = serde_json::from_str(&contents)?;
    log::debug!("Loaded {} reviews.", card.history.len());
    let config = match style_path {
        Some(path) => StyleConfig::load(path)?,
        None => StyleConfig::default(),
    };
    let output = report(&card, &config, format, now)?;
    println!("{output}");
    Ok(())
}

fn report(
    card: &CardRecord,
    config: &StyleConfig,
    format: ReportFormat,
    now: Timestamp,
) -> Fallible<String> {
    if !card.is_chronological() {
        log::warn!("Review history is not in chronological order.");
    }
    let metrics = compute_metrics(&card.history, card.next_due, now);
    match format {
        ReportFormat::Html => Ok(render_report(card, &metrics, config).into_string()),
        ReportFormat::Json => {
            let events = card
                .history
                .iter()
                .zip(&metrics.per_event)
                .map(|(event, event_metrics)| ReportEvent {
                    event,
                    metrics: event_metrics,
                    classification: classify(event.score, event_metrics.overdue_ratio, config),
                })
                .collect();
            let report = JsonReport {
                events,
                pending: metrics.pending.as_ref(),
                totals: &metrics.totals,
            };
            Ok(serde_json::to_string_pretty(&report)?)
        }
    }
}
