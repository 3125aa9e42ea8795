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

//! Runs the whole fixture catalogue the way the runner binary does.

use forin_kernel::fixture::forin_record;
use forin_kernel::{Config, Outcome, ReportFormat, run_fixtures, test_for_in};
use forin_var::{Record, loose_eq, v_arrow, v_int, v_str, v_string};
use pretty_assertions::assert_eq;
use test_case::test_case;

#[test]
fn test_full_catalogue() {
    let report = run_fixtures(&Config::default()).unwrap();
    let outcomes: Vec<_> = report
        .results
        .iter()
        .map(|r| (r.name.as_str(), r.outcome))
        .collect();
    assert_eq!(
        outcomes,
        vec![
            ("forin", Outcome::ExpectedFailure),
            ("forin-value", Outcome::Passed),
            ("empty-record", Outcome::Passed),
            ("single-property", Outcome::Passed),
            ("non-callable", Outcome::Passed),
            ("throwing-callable", Outcome::Passed),
        ]
    );
    assert!(report.is_success());
}

#[test]
fn test_strict_run_fails_on_documented_discrepancy() {
    let config = Config {
        strict_discrepancies: true,
        ..Default::default()
    };
    let report = run_fixtures(&config).unwrap();
    assert!(!report.is_success());
    assert_eq!(report.count(Outcome::ExpectedFailure), 1);
}

#[test]
fn test_selected_fixtures_run_in_given_order() {
    let config = Config {
        fixtures: vec!["single-property".into(), "empty-record".into()],
        strict_discrepancies: false,
        report_format: ReportFormat::Text,
    };
    let report = run_fixtures(&config).unwrap();
    let names: Vec<_> = report.results.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["single-property", "empty-record"]);
}

#[test]
fn test_json_report_shape() {
    let config = Config {
        fixtures: vec!["forin".into()],
        ..Default::default()
    };
    let report = run_fixtures(&config).unwrap();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["results"][0]["name"], "forin");
    assert_eq!(json["results"][0]["outcome"], "expected_failure");
    assert_eq!(json["results"][0]["diagnostic"], "Assertion failed: q == 7");
}

#[test]
fn test_repeated_runs_agree() {
    let first = test_for_in(&forin_record()).unwrap();
    let second = test_for_in(&forin_record()).unwrap();
    assert_eq!(first, "7whatever");
    assert_eq!(first, second);
}

// The accumulated string is compared against 7 exactly as the fixture does. "7whatever"
// becomes NaN under string-to-number conversion, so the comparison is false. This is
// kept as written.
#[test]
fn test_accumulated_string_is_not_loosely_seven() {
    let q = v_string(test_for_in(&forin_record()).unwrap());
    assert!(!loose_eq(&q, &v_int(7)));
}

#[test_case(&[], ""; "no properties")]
#[test_case(&["7"], "7"; "one property")]
#[test_case(&["b", "a", "c"], "bac"; "definition order")]
#[test_case(&["", "x", ""], "x"; "empty results contribute nothing")]
fn test_accumulation(results: &[&'static str], expected: &str) {
    let record = Record::build(
        results
            .iter()
            .enumerate()
            .map(|(i, &s)| (format!("p{i}"), v_arrow(move || Ok(v_str(s))))),
    );
    assert_eq!(test_for_in(&record).unwrap(), expected);
}
