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

use std::path::PathBuf;

use clap::Parser;

use crate::cmd::report::ReportFormat;
use crate::cmd::report::print_report;
use crate::error::Fallible;
use crate::types::timestamp::Timestamp;

#[derive(Parser)]
#[command(version, about, long_about = None)]
enum Command {
    /// Render a card's review history.
    Report {
        /// Path to the card record JSON file.
        card: PathBuf,
        /// Optional path to a style configuration TOML file.
        #[arg(long)]
        style: Option<PathBuf>,
        /// Output format.
        #[arg(long, default_value_t = ReportFormat::Html)]
        format: ReportFormat,
        /// Compute overdue metrics against this time (RFC 3339) instead of
        /// the wall clock.
        #[arg(long)]
        now: Option<String>,
    },
}

pub fn entrypoint() -> Fallible<()> {
    let cli: Command = Command::parse();
    match cli {
        Command::Report {
            card,
            style,
            format,
            now,
        } => {
            let now = match now {
                Some(now) => Timestamp::parse_rfc3339(&now)?,
                None => Timestamp::now(),
            };
            print_report(&card, style.as_deref(), format, now)
        }
    }
}
