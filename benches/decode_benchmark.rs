//! Benchmarks for decoding users responses.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use userdeck::client::decode_users;

fn users_body(count: u64) -> String {
    let users: Vec<serde_json::Value> = (1..=count)
        .map(|id| {
            serde_json::json!({
                "id": id,
                "uid": format!("00000000-0000-0000-0000-{id:012}"),
                "first_name": format!("First{id}"),
                "last_name": format!("Last{id}"),
                "username": format!("user.{id}"),
                "email": format!("user{id}@email.com"),
                "avatar": format!("https://robohash.org/{id}.png?size=300x300&set=set1"),
                "gender": "Polygender",
                "phone_number": "+1 555-0100",
                "date_of_birth": "1985-04-12",
                "employment": { "title": "Analyst", "key_skill": "Teamwork" },
                "address": { "city": "Springfield", "country": "United States" }
            })
        })
        .collect();
    serde_json::to_string(&users).unwrap_or_default()
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_users");

    for count in [1_u64, 10, 100] {
        let body = users_body(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &body, |b, body| {
            b.iter(|| decode_users(black_box(body)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_decode);
criterion_main!(benches);
