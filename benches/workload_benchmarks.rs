//! Performance benchmarks for the workload engine.
//!
//! This benchmark suite verifies that the calculation pipeline meets
//! performance targets:
//! - Single-consultant week with 1 assignment: < 1ms mean
//! - Single-consultant month with 20 assignments: < 5ms mean
//! - Team of 25 over a month: < 50ms mean
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use workload_engine::api::{AppState, create_router};
use workload_engine::config::HolidayCalendar;

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Creates a benchmark state with the shipped holiday calendars.
fn create_bench_state() -> AppState {
    let calendar = HolidayCalendar::load("./config/holidays").expect("Failed to load calendars");
    AppState::new(calendar)
}

fn weekday_schedule() -> serde_json::Value {
    serde_json::json!([
        {"weekday": "monday", "work_hours": "8", "admin_hours": "1", "payroll_capacity_hours": "6"},
        {"weekday": "tuesday", "work_hours": "8", "admin_hours": "1", "payroll_capacity_hours": "6"},
        {"weekday": "wednesday", "work_hours": "8", "admin_hours": "1", "payroll_capacity_hours": "6"},
        {"weekday": "thursday", "work_hours": "8", "admin_hours": "1", "payroll_capacity_hours": "6"},
        {"weekday": "friday", "work_hours": "8", "admin_hours": "1", "payroll_capacity_hours": "6"},
    ])
}

/// EFT dates staggered across March 2024 so windows overlap realistically.
fn create_assignments(count: usize) -> Vec<serde_json::Value> {
    (0..count)
        .map(|i| {
            let day = 4 + (i % 25);
            serde_json::json!({
                "id": format!("pa_{:03}", i + 1),
                "name": format!("Pay run {:03}", i + 1),
                "client_name": format!("Client {:03}", i % 10),
                "eft_date": format!("2024-03-{:02}", day),
                "processing_days_before_eft": 1 + (i % 5),
                "total_processing_hours": "9",
                "status": "pending"
            })
        })
        .collect()
}

fn create_workload_body(assignment_count: usize, start: &str, end: &str) -> String {
    let request = serde_json::json!({
        "consultant_id": "cons_bench",
        "country_code": "AU",
        "as_of": start,
        "period": {"type": "range", "start_date": start, "end_date": end},
        "schedule": weekday_schedule(),
        "assignments": create_assignments(assignment_count)
    });
    request.to_string()
}

fn create_team_body(member_count: usize) -> String {
    let members: Vec<serde_json::Value> = (0..member_count)
        .map(|i| {
            serde_json::json!({
                "consultant_id": format!("cons_{:03}", i),
                "schedule": weekday_schedule(),
                "assignments": create_assignments(8)
            })
        })
        .collect();

    serde_json::json!({
        "members": members,
        "country_code": "AU",
        "as_of": "2024-03-13",
        "period": {"type": "current_month"}
    })
    .to_string()
}

async fn post(router: axum::Router, uri: &str, body: String) -> axum::response::Response {
    router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap()
}

/// Benchmark: one consultant, one week, one assignment.
///
/// Target: < 1ms mean
fn bench_single_week(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(create_bench_state());
    let body = create_workload_body(1, "2024-03-11", "2024-03-17");

    c.bench_function("workload_single_week", |b| {
        b.to_async(&rt).iter(|| async {
            let response = post(router.clone(), "/workload", body.clone()).await;
            black_box(response)
        })
    });
}

/// Benchmark: one consultant, a full month, 20 overlapping assignments.
///
/// Target: < 5ms mean
fn bench_month_20_assignments(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(create_bench_state());
    let body = create_workload_body(20, "2024-03-01", "2024-03-31");

    c.bench_function("workload_month_20_assignments", |b| {
        b.to_async(&rt).iter(|| async {
            let response = post(router.clone(), "/workload", body.clone()).await;
            black_box(response)
        })
    });
}

/// Benchmark: assignment counts from 1 to 50 to understand scaling behavior.
fn bench_assignment_scaling(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(create_bench_state());

    let mut group = c.benchmark_group("assignment_scaling");
    for count in [1, 5, 10, 20, 50] {
        let body = create_workload_body(count, "2024-03-01", "2024-03-31");
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("assignments", count), &count, |b, _| {
            b.to_async(&rt).iter(|| async {
                let response = post(router.clone(), "/workload", body.clone()).await;
                black_box(response)
            })
        });
    }
    group.finish();
}

/// Benchmark: team capacity for growing team sizes.
///
/// Target for 25 members over a month: < 50ms mean
fn bench_team_scaling(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(create_bench_state());

    let mut group = c.benchmark_group("team_scaling");
    group.sample_size(20);
    for members in [2, 5, 10, 25] {
        let body = create_team_body(members);
        group.throughput(Throughput::Elements(members as u64));
        group.bench_with_input(BenchmarkId::new("members", members), &members, |b, _| {
            b.to_async(&rt).iter(|| async {
                let response = post(router.clone(), "/team-capacity", body.clone()).await;
                black_box(response)
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_single_week,
    bench_month_20_assignments,
    bench_assignment_scaling,
    bench_team_scaling,
);
criterion_main!(benches);
