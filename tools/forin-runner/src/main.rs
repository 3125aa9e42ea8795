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

mod args;
mod logging;

use crate::args::Args;
use crate::logging::init_tracing;
use clap::Parser;
use forin_kernel::{Expectation, ReportFormat, catalogue, run_fixtures};
use tracing::{debug, error, info};

fn list_fixtures() {
    for fixture in catalogue() {
        let marker = match fixture.expectation {
            Expectation::Pass => "",
            Expectation::KnownDiscrepancy(_) => " [known discrepancy]",
        };
        println!("{:<18} {}{marker}", fixture.name, fixture.description);
    }
}

fn main() -> Result<(), eyre::Report> {
    color_eyre::install()?;
    let args: Args = Args::parse();
    init_tracing(args.debug)?;

    if args.list {
        list_fixtures();
        return Ok(());
    }

    let config = args.load_config()?;
    debug!(?config, "loaded configuration");

    let report = run_fixtures(&config)?;
    match config.report_format {
        ReportFormat::Text => print!("{}", report.render_text()),
        ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    if !report.is_success() {
        error!("fixture run failed");
        std::process::exit(1);
    }
    info!(fixtures = report.results.len(), "fixture run succeeded");
    Ok(())
}
