// benches/filter.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use brainport_jobs::{filter, JobRecord};

fn synthetic_jobs(n: usize) -> Vec<JobRecord> {
    const TITLES: [&str; 5] = ["Software Engineer", "Mechatronics Designer", "Nurse", "Data Analyst", "Operator"];
    const COMPANIES: [&str; 4] = ["ASML", "Philips", "Signify", "VDL"];
    const PLACES: [&str; 3] = ["Eindhoven", "Veldhoven", "Helmond"];
    (0..n)
        .map(|i| JobRecord {
            title: Some(format!("{} {}", TITLES[i % TITLES.len()], i)),
            company: Some(COMPANIES[i % COMPANIES.len()].to_string()),
            location: Some(PLACES[i % PLACES.len()].to_string()),
            description: Some("Work on the next generation of lithography systems in a multidisciplinary team.".repeat(3)),
            date: Some("2024-05-01".to_string()),
            url: Some(format!("https://brainporteindhoven.com/en/job/{i}")),
        })
        .collect()
}

fn bench_filter(c: &mut Criterion) {
    let jobs = synthetic_jobs(5_000);

    c.bench_function("filter_empty_query", |b| {
        b.iter(|| black_box(filter::filter_jobs(black_box(&jobs), "").len()))
    });

    c.bench_function("filter_company", |b| {
        b.iter(|| black_box(filter::filter_jobs(black_box(&jobs), "asml").len()))
    });

    c.bench_function("filter_description_miss", |b| {
        b.iter(|| black_box(filter::filter_jobs(black_box(&jobs), "quantum").len()))
    });

    let q = filter::Query::new("Engineer");
    c.bench_function("matching_rows_title", |b| {
        b.iter(|| black_box(filter::matching_rows(black_box(&jobs), &q).len()))
    });
}

criterion_group!(benches, bench_filter);
criterion_main!(benches);
