//! Path and traversal performance benchmarks
//!
//! Plain timing harness covering:
//! - Path parsing without the cache
//! - Cached compilation
//! - Resolution of single, wildcard and multi-key paths
//! - Full retrieval with decorations

use std::hint::black_box;
use std::time::Instant;

use dendro_core::prelude::*;
use serde_json::json;

fn main() {
    println!("dendro traversal benchmarks\n");

    let source = fixture(200);

    bench_parse();
    bench_compile();
    bench_resolve(&source);
    bench_retrieve(&source);
}

fn fixture(patients: usize) -> Value {
    let items: Vec<Value> = (0..patients)
        .map(|i| {
            json!({
                "patient": {
                    "id": format!("p{i}"),
                    "active": i % 2 == 0,
                    "ints": [i, i + 1, i + 2],
                    "dicts": [{"num": i, "inner": {"msg": "hello"}}],
                }
            })
        })
        .collect();
    json!({ "data": items })
}

fn report(label: &str, iterations: u32, start: Instant) {
    let duration = start.elapsed();
    let average = duration / iterations;
    println!("   {label}: {iterations} runs in {duration:?} (avg {average:?})");
}

fn bench_parse() {
    println!("1. Parsing (uncached)");
    let iterations = 10_000;
    for raw in ["data[0].patient.id", "data[*].patient.dicts[*].[num, inner.msg]"] {
        let start = Instant::now();
        for _ in 0..iterations {
            black_box(parse(black_box(raw)).ok());
        }
        report(raw, iterations, start);
    }
    println!();
}

fn bench_compile() {
    println!("2. Compilation through the global cache");
    let iterations = 100_000;
    let start = Instant::now();
    for _ in 0..iterations {
        black_box(compile(black_box("data[*].patient.ints[-1]")).ok());
    }
    report("cached", iterations, start);
    println!();
}

fn bench_resolve(source: &Value) {
    println!("3. Resolution");
    let iterations = 1_000;
    for raw in [
        "data[100].patient.id",
        "data[*].patient.id",
        "data[*].patient.[id, active]",
        "data[10:50].patient.ints",
    ] {
        let Ok(path) = parse(raw) else {
            println!("   {raw}: failed to parse");
            continue;
        };
        let start = Instant::now();
        for _ in 0..iterations {
            black_box(resolve(source, &path));
        }
        report(raw, iterations, start);
    }
    println!();
}

fn bench_retrieve(source: &Value) {
    println!("4. Retrieval with decorations");
    let iterations = 1_000;
    let options = GetOptions::new()
        .flatten(true)
        .only_if(|v| v.as_array().is_some_and(|items| !items.is_empty()))
        .apply(|v| json!(v.as_array().map_or(0, Vec::len)));
    let start = Instant::now();
    for _ in 0..iterations {
        black_box(get(source, "data[*].patient.ints", &options).ok());
    }
    report("flatten + only_if + apply", iterations, start);
    println!();
}
