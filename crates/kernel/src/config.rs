// Copyright (C) 2024 Ryan Daum <ryan.daum@gmail.com>
//
// This program is free software: you can redistribute it and/or modify it under
// the terms of the GNU General Public License as published by the Free Software
// Foundation, version 3.
//
// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
// FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along with
// this program. If not, see <https://www.gnu.org/licenses/>.
//

//! Config is created by the runner binary from its config file and CLI flags, and handed to
//! the fixture runner.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Fixtures to run, by name. Empty means the whole catalogue.
    pub fixtures: Vec<String>,
    /// Count known discrepancies that fail as documented as failures, rather than as
    /// expected failures.
    pub strict_discrepancies: bool,
    pub report_format: ReportFormat,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{"strict_discrepancies": true}"#).unwrap();
        assert_eq!(
            config,
            Config {
                fixtures: vec![],
                strict_discrepancies: true,
                report_format: ReportFormat::Text,
            }
        );
    }

    #[test]
    fn test_report_format_names() {
        let config: Config = serde_json::from_str(r#"{"report_format": "json"}"#).unwrap();
        assert_eq!(config.report_format, ReportFormat::Json);
    }
}
