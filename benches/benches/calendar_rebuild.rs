// Copyright 2025 the Circlet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::rc::Rc;

use chrono::{Months, NaiveDate, Weekday};
use circlet_calendar::{DateHighlighter, FixedClock, MonthGrid, SimpleDateHighlighter};
use circlet_grid::GridAdapter;
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn bench_set_date(c: &mut Criterion) {
    let start = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
    let mut grid = MonthGrid::new(Weekday::Mon, start, Rc::new(FixedClock::new(start)));
    let mut group = c.benchmark_group("month_grid");
    group.bench_function("set_date_year", |b| {
        b.iter(|| {
            for m in 0..12 {
                let date = start.checked_add_months(Months::new(m)).unwrap();
                grid.set_date(black_box(date));
            }
        });
    });

    let highlights = Rc::new(SimpleDateHighlighter::new());
    for d in (1..=28).step_by(3) {
        highlights.insert(NaiveDate::from_ymd_opt(2024, 1, d).unwrap());
    }
    grid.set_date(start);
    grid.set_highlighter(Some(highlights.clone()));
    group.bench_function("borders_after_highlight_change", |b| {
        b.iter(|| {
            highlights.toggle(start);
            highlights.notify_data_set_changed();
            let mut rings = 0;
            for i in 0..grid.count() {
                rings += grid.borders(black_box(i)).len();
            }
            rings
        });
    });
    group.finish();
}

criterion_group!(benches, bench_set_date);
criterion_main!(benches);
