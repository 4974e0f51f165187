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

const MS_IN_DAY: f64 = 1000.0 * 60.0 * 60.0 * 24.0;
const DAYS_IN_MONTH: f64 = 30.44;
const DAYS_IN_YEAR: f64 = 365.25;

/// Format an interval in whole days, months, and years, e.g. "17d",
/// "2m 3d", "1y 2m". Intervals under a day round to "0d".
pub fn format_interval(ms: i64) -> String {
    let total_days = (ms as f64 / MS_IN_DAY).round();
    if total_days >= DAYS_IN_YEAR {
        let years = (total_days / DAYS_IN_YEAR).floor();
        let months = ((total_days % DAYS_IN_YEAR) / DAYS_IN_MONTH).floor();
        if months > 0.0 {
            format!("{years}y {months}m")
        } else {
            format!("{years}y")
        }
    } else if total_days > 30.0 {
        let months = (total_days / DAYS_IN_MONTH).floor();
        let days = (total_days % DAYS_IN_MONTH).round();
        if days > 0.0 {
            format!("{months}m {days}d")
        } else {
            format!("{months}m")
        }
    } else {
        format!("{total_days}d")
    }
}

/// Format an overdue ratio as a whole percentage, e.g. "150%".
pub fn format_ratio(ratio: f64) -> String {
    format!("{}%", (ratio * 100.0).round())
}

/// Format a response duration in whole seconds, e.g. "3s".
pub fn format_response_time(ms: i64) -> String {
    format!("{}s", (ms as f64 / 1000.0).round())
}

/// Format a total review time in whole minutes, e.g. "12 min".
pub fn format_review_time(ms: i64) -> String {
    format!("{} min", (ms as f64 / 60000.0).round())
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAY: i64 = 24 * 60 * 60 * 1000;

    #[test]
    fn test_format_days() {
        assert_eq!(format_interval(0), "0d");
        assert_eq!(format_interval(DAY), "1d");
        assert_eq!(format_interval(17 * DAY), "17d");
        assert_eq!(format_interval(30 * DAY), "30d");
    }

    #[test]
    fn test_format_months() {
        assert_eq!(format_interval(31 * DAY), "1m 1d");
        assert_eq!(format_interval(64 * DAY), "2m 3d");
    }

    #[test]
    fn test_format_years() {
        assert_eq!(format_interval(366 * DAY), "1y");
        assert_eq!(format_interval(430 * DAY), "1y 2m");
    }

    #[test]
    fn test_format_ratio() {
        assert_eq!(format_ratio(1.0), "100%");
        assert_eq!(format_ratio(1.504), "150%");
    }

    #[test]
    fn test_format_response_time() {
        assert_eq!(format_response_time(2000), "2s");
        assert_eq!(format_response_time(2400), "2s");
    }

    #[test]
    fn test_format_review_time() {
        assert_eq!(format_review_time(125_000), "2 min");
    }
}
