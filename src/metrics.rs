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

//! Derived timing analytics for a card's review history.
//!
//! Everything here is a pure function of the history, the next due date,
//! and the current time. Degenerate inputs (empty history, zero or negative
//! intervals, no pending repetition) resolve to fixed fallback values; no
//! input can make these functions fail.

use serde::Serialize;

use crate::types::event::ReviewEvent;
use crate::types::timestamp::Timestamp;

/// Timing metrics for one completed review.
#[derive(Clone, Copy, PartialEq, Debug, Serialize)]
pub struct EventMetrics {
    /// Time between the previous review and this review's due date. Zero
    /// for the first review, which has no previous one.
    pub planned_interval_ms: i64,
    /// Time that actually elapsed between the previous review and this one.
    /// Zero for the first review.
    pub used_interval_ms: i64,
    /// How late the review was, or zero if it was on time or early.
    pub delay_ms: i64,
    /// `used / planned`, or 1 when there is no positive planned interval.
    /// 1.0 means reviewed exactly on schedule; greater means late.
    pub overdue_ratio: f64,
    /// Time from this review to the next scheduled one: the following
    /// event's due date, or the card's next due date for the last event.
    /// Zero when neither exists.
    pub next_interval_ms: i64,
    /// The U-factor: `next / used`, or 0 when no interval was used. An
    /// indicator of how much the schedule grew in response to this review.
    pub growth_factor: f64,
}

/// Timing metrics for the pending (not yet reviewed) repetition.
#[derive(Clone, Copy, PartialEq, Debug, Serialize)]
pub struct PendingMetrics {
    /// Time between the last review and the pending due date. Zero when
    /// the history is empty.
    pub planned_interval_ms: i64,
    /// How overdue the pending repetition already is, or zero if the due
    /// date is still in the future.
    pub delay_ms: i64,
    /// The planned interval plus the delay accrued so far.
    pub used_interval_ms: i64,
    /// `used / planned`, or 1 when there is no positive planned interval.
    pub overdue_ratio: f64,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize)]
pub struct Totals {
    pub total_reviews: usize,
    pub total_review_time_ms: i64,
}

/// The full output of the calculator for one card.
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct CardMetrics {
    pub per_event: Vec<EventMetrics>,
    pub pending: Option<PendingMetrics>,
    pub totals: Totals,
}

/// Compute all derived metrics for a card.
///
/// `history` must be ascending by `reviewed_at`; `next_due` is the due date
/// of the pending repetition, if any; `now` is the caller's clock reading.
pub fn compute_metrics(
    history: &[ReviewEvent],
    next_due: Option<Timestamp>,
    now: Timestamp,
) -> CardMetrics {
    let per_event = history
        .iter()
        .enumerate()
        .map(|(i, event)| event_metrics(history, i, event, next_due))
        .collect();
    let pending = next_due.map(|due| pending_metrics(history, due, now));
    let totals = Totals {
        total_reviews: history.len(),
        total_review_time_ms: history.iter().map(|event| event.response_ms.max(0)).sum(),
    };
    CardMetrics {
        per_event,
        pending,
        totals,
    }
}

fn event_metrics(
    history: &[ReviewEvent],
    i: usize,
    event: &ReviewEvent,
    next_due: Option<Timestamp>,
) -> EventMetrics {
    let previous = i.checked_sub(1).map(|p| &history[p]);
    let planned_interval_ms = match previous {
        Some(previous) => event.scheduled_at.ms_since(previous.reviewed_at).max(0),
        None => 0,
    };
    let used_interval_ms = match previous {
        Some(previous) => event.reviewed_at.ms_since(previous.reviewed_at).max(0),
        None => 0,
    };
    let delay_ms = event.reviewed_at.ms_since(event.scheduled_at).max(0);
    let next_interval_ms = match history.get(i + 1) {
        Some(following) => following.scheduled_at.ms_since(event.reviewed_at).max(0),
        None => match next_due {
            Some(due) => due.ms_since(event.reviewed_at).max(0),
            None => 0,
        },
    };
    EventMetrics {
        planned_interval_ms,
        used_interval_ms,
        delay_ms,
        overdue_ratio: ratio(used_interval_ms, planned_interval_ms),
        next_interval_ms,
        growth_factor: growth(next_interval_ms, used_interval_ms),
    }
}

fn pending_metrics(history: &[ReviewEvent], due: Timestamp, now: Timestamp) -> PendingMetrics {
    let planned_interval_ms = match history.last() {
        Some(last) => due.ms_since(last.reviewed_at).max(0),
        None => 0,
    };
    let delay_ms = now.ms_since(due).max(0);
    let used_interval_ms = planned_interval_ms + delay_ms;
    PendingMetrics {
        planned_interval_ms,
        delay_ms,
        used_interval_ms,
        overdue_ratio: ratio(used_interval_ms, planned_interval_ms),
    }
}

/// `used / planned` with the on-schedule fallback: a planned interval of
/// zero (first review, same-day schedule) reads as "reviewed on time".
fn ratio(used_ms: i64, planned_ms: i64) -> f64 {
    if planned_ms > 0 {
        used_ms as f64 / planned_ms as f64
    } else {
        1.0
    }
}

fn growth(next_ms: i64, used_ms: i64) -> f64 {
    if used_ms > 0 {
        next_ms as f64 / used_ms as f64
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::score::Score;

    fn ts(ms: i64) -> Timestamp {
        Timestamp::from_epoch_ms(ms).unwrap()
    }

    fn event(reviewed_ms: i64, scheduled_ms: i64, response_ms: i64) -> ReviewEvent {
        ReviewEvent {
            reviewed_at: ts(reviewed_ms),
            scheduled_at: ts(scheduled_ms),
            response_ms,
            score: Score::new(1.0),
        }
    }

    #[test]
    fn test_empty_history() {
        let metrics = compute_metrics(&[], None, ts(100));
        assert!(metrics.per_event.is_empty());
        assert!(metrics.pending.is_none());
        assert_eq!(metrics.totals.total_reviews, 0);
        assert_eq!(metrics.totals.total_review_time_ms, 0);
    }

    #[test]
    fn test_two_reviews_with_pending() {
        let history = [event(10, 10, 2000), event(20, 20, 3000)];
        let metrics = compute_metrics(&history, Some(ts(40)), ts(30));

        let first = metrics.per_event[0];
        assert_eq!(first.planned_interval_ms, 0);
        assert_eq!(first.used_interval_ms, 0);
        assert_eq!(first.delay_ms, 0);
        assert_eq!(first.overdue_ratio, 1.0);
        // The next interval of a non-last event comes from the following
        // event's due date.
        assert_eq!(first.next_interval_ms, 10);
        assert_eq!(first.growth_factor, 0.0);

        let second = metrics.per_event[1];
        assert_eq!(second.planned_interval_ms, 10);
        assert_eq!(second.used_interval_ms, 10);
        assert_eq!(second.overdue_ratio, 1.0);
        assert_eq!(second.next_interval_ms, 20);
        assert_eq!(second.growth_factor, 2.0);

        assert_eq!(metrics.totals.total_reviews, 2);
        assert_eq!(metrics.totals.total_review_time_ms, 5000);
    }

    #[test]
    fn test_late_review() {
        // Due at 30, reviewed at 40: ten units late.
        let history = [event(10, 10, 1000), event(40, 30, 1000)];
        let metrics = compute_metrics(&history, None, ts(50));
        let second = metrics.per_event[1];
        assert_eq!(second.planned_interval_ms, 20);
        assert_eq!(second.used_interval_ms, 30);
        assert_eq!(second.delay_ms, 10);
        assert_eq!(second.overdue_ratio, 1.5);
        // No next due date, so the last event has no next interval.
        assert_eq!(second.next_interval_ms, 0);
        assert_eq!(second.growth_factor, 0.0);
    }

    #[test]
    fn test_early_review_has_no_delay() {
        // Due at 40, reviewed at 30: early, so the delay is clamped to zero.
        let history = [event(10, 10, 1000), event(30, 40, 1000)];
        let metrics = compute_metrics(&history, None, ts(50));
        let second = metrics.per_event[1];
        assert_eq!(second.delay_ms, 0);
    }

    #[test]
    fn test_zero_planned_interval_falls_back_to_ratio_one() {
        // Scheduled at the same instant as the previous review.
        let history = [event(10, 10, 1000), event(25, 10, 1000)];
        let metrics = compute_metrics(&history, None, ts(50));
        assert_eq!(metrics.per_event[1].planned_interval_ms, 0);
        assert_eq!(metrics.per_event[1].overdue_ratio, 1.0);
    }

    #[test]
    fn test_pending_on_time() {
        let history = [event(10, 10, 1000)];
        let metrics = compute_metrics(&history, Some(ts(40)), ts(30));
        let pending = metrics.pending.unwrap();
        assert_eq!(pending.planned_interval_ms, 30);
        assert_eq!(pending.delay_ms, 0);
        assert_eq!(pending.used_interval_ms, 30);
        assert_eq!(pending.overdue_ratio, 1.0);
    }

    #[test]
    fn test_pending_overdue() {
        let history = [event(10, 10, 1000)];
        let metrics = compute_metrics(&history, Some(ts(40)), ts(70));
        let pending = metrics.pending.unwrap();
        assert_eq!(pending.planned_interval_ms, 30);
        assert_eq!(pending.delay_ms, 30);
        assert_eq!(pending.used_interval_ms, 60);
        assert_eq!(pending.overdue_ratio, 2.0);
    }

    #[test]
    fn test_pending_with_empty_history() {
        let metrics = compute_metrics(&[], Some(ts(40)), ts(100));
        let pending = metrics.pending.unwrap();
        assert_eq!(pending.planned_interval_ms, 0);
        assert_eq!(pending.delay_ms, 60);
        assert_eq!(pending.used_interval_ms, 60);
        // No positive planned interval, so the ratio falls back to 1.
        assert_eq!(pending.overdue_ratio, 1.0);
    }

    #[test]
    fn test_determinism() {
        let history = [event(10, 10, 2000), event(40, 30, 3000)];
        let a = compute_metrics(&history, Some(ts(60)), ts(55));
        let b = compute_metrics(&history, Some(ts(60)), ts(55));
        assert_eq!(a, b);
    }
}
