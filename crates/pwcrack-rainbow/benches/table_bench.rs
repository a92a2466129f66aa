//! テーブル検索ベンチマーク
//!
//! ミニテーブルと既定パラメータのテーブル（7文字, 2000 x 2000）での検索性能の計測。
//!
//! ## 実行方法
//!
//! ```powershell
//! cargo bench --bench table_bench
//! ```

use std::sync::OnceLock;
use std::time::{Duration, Instant};

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use pwcrack_rainbow::{
    Digest, Hasher, RainbowTable, TableParams, build_table, crack, crack_parallel,
};

// =============================================================================
// Table Building
// =============================================================================

/// Cached mini table for benchmarks
static MINI_TABLE: OnceLock<RainbowTable> = OnceLock::new();

fn get_mini_table() -> &'static RainbowTable {
    MINI_TABLE.get_or_init(|| {
        let params = TableParams::new(4, 200, 200).unwrap();
        build_table(params, Hasher::md5()).unwrap()
    })
}

/// Cached default table for benchmarks
static DEFAULT_TABLE: OnceLock<RainbowTable> = OnceLock::new();

fn get_default_table() -> &'static RainbowTable {
    DEFAULT_TABLE.get_or_init(|| {
        eprintln!("[table_bench] Building default table...");
        let start = Instant::now();
        let table = build_table(TableParams::default(), Hasher::md5()).unwrap();
        eprintln!(
            "[table_bench] Built {} chains in {:.2}s",
            table.len(),
            start.elapsed().as_secs_f64()
        );
        table
    })
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Digest of the password at the middle column of the middle chain
fn middle_target(table: &RainbowTable) -> Digest {
    let params = table.params();
    let entry = &table.chains()[table.len() / 2];
    let password = pwcrack_rainbow::domain::chain::advance_chain(
        &entry.start,
        0..params.chain_length / 2,
        params,
        table.hasher(),
    );
    table.hasher().hash(&password)
}

// =============================================================================
// Criterion Configuration
// =============================================================================

/// Configuration for table benchmarks (longer measurement time)
fn table_criterion() -> Criterion {
    Criterion::default()
        .sample_size(10) // Search is expensive, fewer samples
        .measurement_time(Duration::from_secs(30))
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_crack_mini_table(c: &mut Criterion) {
    let table = get_mini_table();
    let target = middle_target(table);
    let missing = table.hasher().hash("not in table");

    let mut group = c.benchmark_group("crack_mini_table");

    group.bench_function("sequential_hit", |b| {
        b.iter(|| crack(table, black_box(&target)))
    });
    group.bench_function("parallel_hit", |b| {
        b.iter(|| crack_parallel(table, black_box(&target)))
    });
    group.bench_function("parallel_miss", |b| {
        b.iter(|| crack_parallel(table, black_box(&missing)))
    });

    group.finish();
}

fn bench_crack_default_table(c: &mut Criterion) {
    let table = get_default_table();
    let target = middle_target(table);

    let mut group = c.benchmark_group("crack_default_table");

    group.bench_function("parallel_hit", |b| {
        b.iter(|| crack_parallel(table, black_box(&target)))
    });

    group.finish();
}

criterion_group! {
    name = benches;
    config = table_criterion();
    targets =
        bench_crack_mini_table,
        bench_crack_default_table,
}

criterion_main!(benches);
