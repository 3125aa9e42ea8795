// Copyright (C) 2025 Ryan Daum <ryan.daum@gmail.com> This program is free
// software: you can redistribute it and/or modify it under the terms of the GNU
// General Public License as published by the Free Software Foundation, version
// 3.
//
// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
// FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along with
// this program. If not, see <https://www.gnu.org/licenses/>.
//

use clap::builder::ValueHint;
use clap_derive::{Parser, ValueEnum};
use eyre::eyre;
use figment::Figment;
use figment::providers::{Format as ProviderFormat, Serialized, Yaml};
use forin_kernel::{Config, ReportFormat};
use std::path::PathBuf;

/// Report formats selectable from the command line
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// One line per fixture, followed by a summary
    Text,
    /// The full run report as JSON
    Json,
}

#[derive(Parser, Debug)] // requires `derive` feature
#[command(version, about = "Run the for-in enumeration fixtures")]
pub struct Args {
    #[arg(
        long,
        value_name = "config",
        help = "Path to configuration (YAML) file to use, if any. If not specified, defaults are used.\
                Configuration file values can be overridden by command line arguments.",
        value_hint = ValueHint::FilePath
    )]
    pub config_file: Option<PathBuf>,

    #[arg(
        short,
        long = "fixture",
        value_name = "name",
        help = "Fixture to run; may be repeated. If none are given, the whole catalogue runs."
    )]
    pub fixtures: Vec<String>,

    #[arg(
        long,
        help = "Treat known discrepancies that fail as documented as failures",
        default_value = "false"
    )]
    pub strict: bool,

    #[arg(long, value_enum, help = "Report format")]
    pub format: Option<Format>,

    #[arg(long, help = "List the available fixtures and exit")]
    pub list: bool,

    #[arg(long, help = "Enable debug logging", default_value = "false")]
    pub debug: bool,
}

impl Args {
    fn merge_config(&self, mut config: Config) -> Config {
        if !self.fixtures.is_empty() {
            config.fixtures = self.fixtures.clone();
        }
        if self.strict {
            config.strict_discrepancies = true;
        }
        if let Some(format) = self.format {
            config.report_format = match format {
                Format::Text => ReportFormat::Text,
                Format::Json => ReportFormat::Json,
            };
        }
        config
    }

    /// Load the configuration file if we have it, and then merge the arguments into it.
    pub fn load_config(&self) -> Result<Config, eyre::Report> {
        let config = match &self.config_file {
            Some(config_path) => {
                if !config_path.exists() {
                    return Err(eyre!(
                        "Configuration file {:?} does not exist",
                        config_path
                    ));
                }
                Figment::new()
                    .merge(Serialized::defaults(Config::default()))
                    .merge(Yaml::file(config_path))
                    .extract::<Config>()
                    .map_err(|e| {
                        eyre!(
                            "Failed to parse configuration from {:?}: {}",
                            config_path,
                            e
                        )
                    })?
            }
            None => Config::default(),
        };
        Ok(self.merge_config(config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    fn config_file(contents: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        f
    }

    #[test]
    fn test_defaults_without_file() {
        let args = Args::try_parse_from(["forin-runner"]).unwrap();
        assert_eq!(args.load_config().unwrap(), Config::default());
    }

    #[test]
    fn test_file_values() {
        let f = config_file("fixtures:\n  - forin\nreport_format: json\n");
        let path = f.path().to_str().unwrap();
        let args = Args::try_parse_from(["forin-runner", "--config-file", path]).unwrap();
        let config = args.load_config().unwrap();
        assert_eq!(config.fixtures, vec!["forin".to_string()]);
        assert_eq!(config.report_format, ReportFormat::Json);
        assert!(!config.strict_discrepancies);
    }

    #[test]
    fn test_flags_override_file() {
        let f = config_file("fixtures: [forin]\nreport_format: json\n");
        let path = f.path().to_str().unwrap();
        let args = Args::try_parse_from([
            "forin-runner",
            "--config-file",
            path,
            "-f",
            "empty-record",
            "--fixture",
            "single-property",
            "--strict",
            "--format",
            "text",
        ])
        .unwrap();
        let config = args.load_config().unwrap();
        assert_eq!(
            config,
            Config {
                fixtures: vec!["empty-record".into(), "single-property".into()],
                strict_discrepancies: true,
                report_format: ReportFormat::Text,
            }
        );
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let args =
            Args::try_parse_from(["forin-runner", "--config-file", "/nonexistent/forin.yaml"])
                .unwrap();
        assert!(args.load_config().is_err());
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let f = config_file("strict_discrepancies: [not, a, bool]\n");
        let path = f.path().to_str().unwrap();
        let args = Args::try_parse_from(["forin-runner", "--config-file", path]).unwrap();
        assert!(args.load_config().is_err());
    }
}
