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

use maud::DOCTYPE;
use maud::Markup;
use maud::PreEscaped;
use maud::html;

use crate::classify::border_band;
use crate::classify::classify;
use crate::classify::fill_band;
use crate::format::format_interval;
use crate::format::format_ratio;
use crate::format::format_response_time;
use crate::format::format_review_time;
use crate::metrics::CardMetrics;
use crate::metrics::EventMetrics;
use crate::metrics::PendingMetrics;
use crate::types::config::DisplayMode;
use crate::types::config::StyleConfig;
use crate::types::event::CardRecord;
use crate::types::event::ReviewEvent;
use crate::types::timestamp::Timestamp;

const STYLESHEET: &str = "
body { font-family: sans-serif; }
#squares { display: flex; gap: 4px; align-items: center; }
.square {
    width: 18px;
    height: 18px;
    border-radius: 3px;
    border: 2px solid transparent;
}
.square-separator {
    width: 2px;
    height: 22px;
    background-color: #999;
}
.highlight-color-- { background-color: #b5b5b5; }
.highlight-color--red { background-color: #e05252; }
.highlight-color--orange { background-color: #e8a33d; }
.highlight-color--green { background-color: #5cb85c; }
.highlight-color--blue { background-color: #5b9bd5; }
.highlight-color--purple { background-color: #9b59b6; }
.highlight-color--yellow { background-color: #e8d44d; }
";

/// Render a card's review history as a self-contained HTML page: one square
/// per review, a separator, and a square for the pending repetition.
pub fn render_report(card: &CardRecord, metrics: &CardMetrics, config: &StyleConfig) -> Markup {
    let has_pending = card.next_due.is_some();
    let body = html! {
        div id="squares" {
            @for (i, event) in card.history.iter().enumerate() {
                (event_square(event, &metrics.per_event[i], i == 0, config))
            }
            @if !card.history.is_empty() && has_pending {
                div .square-separator {}
            }
            @if let (Some(due), Some(pending)) = (card.next_due, &metrics.pending) {
                (pending_square(due, pending, metrics, config))
            }
        }
    };
    page_template(body)
}

fn event_square(
    event: &ReviewEvent,
    metrics: &EventMetrics,
    is_first: bool,
    config: &StyleConfig,
) -> Markup {
    let advanced = config.mode == DisplayMode::Advanced;
    let classification = classify(event.score, metrics.overdue_ratio, config);
    let border = if advanced && config.show_overdue_borders.0 {
        classification.border_color.as_str()
    } else {
        "transparent"
    };

    let mut tooltip = vec![
        format!("Pressed: {}", classification.label),
        format!("Practice Date: {}", event.reviewed_at.local_date_string()),
        format!("Response Time: {}", format_response_time(event.response_ms)),
    ];
    if metrics.next_interval_ms > 0 {
        tooltip.push(format!(
            "Next Interval: {}",
            format_interval(metrics.next_interval_ms)
        ));
    }
    if advanced && !is_first {
        tooltip.push(format!("Review Delay: {}", format_interval(metrics.delay_ms)));
        tooltip.push(format!(
            "Used Interval: {}",
            format_interval(metrics.used_interval_ms)
        ));
        tooltip.push(format!("Overdue Ratio: {}", format_ratio(metrics.overdue_ratio)));
        if metrics.growth_factor > 0.0 {
            tooltip.push(format!("U-Factor: {:.2}x", metrics.growth_factor));
        }
    }

    // In inherit mode the fill is a CSS class; in override mode it is an
    // inline background color.
    if config.inherit_colors.0 {
        html! {
            div class=(format!("square {}", classification.fill_color))
                style=(format!("border-color: {border};"))
                title=(tooltip.join("\n")) {}
        }
    } else {
        html! {
            div .square
                style=(format!(
                    "background-color: {}; border-color: {border};",
                    classification.fill_color
                ))
                title=(tooltip.join("\n")) {}
        }
    }
}

fn pending_square(
    due: Timestamp,
    pending: &PendingMetrics,
    metrics: &CardMetrics,
    config: &StyleConfig,
) -> Markup {
    let advanced = config.mode == DisplayMode::Advanced;
    let fill = config.band_colors.color(fill_band(pending.overdue_ratio));
    let border = if advanced && config.show_overdue_borders.0 {
        config.band_colors.color(border_band(pending.overdue_ratio))
    } else {
        fill
    };

    let mut tooltip = vec![
        "Totals & Current Repetition".to_string(),
        format!("Total Reviews: {}", metrics.totals.total_reviews),
        format!(
            "Total Review Time: {}",
            format_review_time(metrics.totals.total_review_time_ms)
        ),
        format!("Scheduled Date: {}", due.local_date_string()),
    ];
    if advanced {
        tooltip.push(format!(
            "Last Interval: {}",
            format_interval(pending.planned_interval_ms)
        ));
        tooltip.push(format!(
            "Used Interval: {}",
            format_interval(pending.used_interval_ms)
        ));
        tooltip.push(format!("Overdue Ratio: {}", format_ratio(pending.overdue_ratio)));
    }
    if pending.delay_ms > 0 {
        tooltip.push(format!("Current Delay: {}", format_interval(pending.delay_ms)));
    }

    html! {
        div .square
            style=(format!("background-color: {fill}; border-color: {border};"))
            title=(tooltip.join("\n")) {}
    }
}

fn page_template(body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                title { "Review History" }
                style { (PreEscaped(STYLESHEET)) }
            }
            body {
                (body)
            }
        }
    }
}
