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

//! Cost of one enumeration pass, from the two-property fixture up to wide records.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use forin_kernel::fixture::forin_record;
use forin_kernel::test_for_in;
use forin_var::{Record, v_arrow, v_int};

fn for_in_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("test_for_in");

    let fixture = forin_record();
    group.bench_function("fixture", |b| b.iter(|| test_for_in(black_box(&fixture))));

    for width in [16usize, 256, 4096] {
        let record = Record::build(
            (0..width).map(|i| (format!("p{i}"), v_arrow(move || Ok(v_int(i as i64))))),
        );
        group.bench_with_input(BenchmarkId::new("width", width), &record, |b, r| {
            b.iter(|| test_for_in(black_box(r)))
        });
    }
    group.finish();
}

criterion_group!(benches, for_in_pass);
criterion_main!(benches);
