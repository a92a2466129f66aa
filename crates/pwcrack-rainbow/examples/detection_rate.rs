//! 検出率評価スクリプト
//!
//! レインボーテーブルを構築し、検出率と検索速度を計測する。
//! サンプリングはパスワード空間全体から一様抽出する。
//! 実測の検出率はカバレッジ（到達可能なパスワードの割合）と一致するはず。
//!
//! ## 実行方法
//!
//! ```powershell
//! # 既定パラメータ（7文字, 2000 x 2000）
//! cargo run --example detection_rate -p pwcrack-rainbow --release
//! # パスワード長, チェーン長, チェーン数を指定
//! cargo run --example detection_rate -p pwcrack-rainbow --release -- 4 500 2000
//! ```
//!
//! ## 出力例
//!
//! ```text
//! [Detection Rate Evaluation]
//! Parameters: length=4, chain_length=500, chains=2000
//! Sample count: 200
//!
//! Coverage: 565,412/1,679,616 (33.66%)
//! Detection rate: 68/200 (34.0%)
//! Total time: 1.23s
//! Average time per query: 6.2ms
//! ```

use std::env;
use std::time::Instant;

use pwcrack_rainbow::{
    Hasher, TableParams, build_table, crack_parallel, measure_coverage, password_for_index,
};
use rand::Rng;

const SAMPLE_COUNT: usize = 200;

fn main() {
    let params = match parse_params() {
        Ok(params) => params,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Usage: detection_rate [password_length chain_length num_chains]");
            std::process::exit(1);
        }
    };

    println!("[Detection Rate Evaluation]");
    println!(
        "Parameters: length={}, chain_length={}, chains={}",
        params.password_length, params.chain_length, params.num_chains
    );

    println!("Building table...");
    let start = Instant::now();
    let table = match build_table(params, Hasher::md5()) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Error: Failed to build table: {}", e);
            std::process::exit(1);
        }
    };
    println!(
        "Built {} chains in {:.2}s",
        table.len(),
        start.elapsed().as_secs_f64()
    );
    println!("Sample count: {}", SAMPLE_COUNT);
    println!();

    match measure_coverage(&table) {
        Ok(report) => println!(
            "Coverage: {}/{} ({:.2}%)",
            report.covered,
            report.space,
            report.ratio() * 100.0
        ),
        Err(e) => eprintln!("Error: Failed to measure coverage: {}", e),
    }

    // Generate random passwords
    let mut rng = rand::thread_rng();
    let space = params.password_space();
    let samples: Vec<String> = (0..SAMPLE_COUNT)
        .filter_map(|_| password_for_index(rng.gen_range(0..space), params.password_length).ok())
        .collect();

    // Measure detection rate
    let mut detected = 0;
    let start = Instant::now();

    for (i, password) in samples.iter().enumerate() {
        let target = table.hasher().hash(password);

        if crack_parallel(&table, &target).as_ref() == Ok(password) {
            detected += 1;
        }

        // Progress indicator
        if (i + 1) % 10 == 0 {
            eprint!("\rProgress: {}/{}", i + 1, samples.len());
        }
    }
    eprintln!();

    let total_time = start.elapsed();
    let avg_time_ms = total_time.as_secs_f64() / samples.len() as f64 * 1000.0;
    let rate = detected as f64 / samples.len() as f64 * 100.0;

    // Output results
    println!(
        "Detection rate: {}/{} ({:.1}%)",
        detected,
        samples.len(),
        rate
    );
    println!("Total time: {:.2}s", total_time.as_secs_f64());
    println!("Average time per query: {:.1}ms", avg_time_ms);
}

/// Table parameters from the command line, or the defaults
fn parse_params() -> Result<TableParams, String> {
    let args: Vec<String> = env::args().skip(1).collect();

    match args.as_slice() {
        [] => Ok(TableParams::default()),
        [length, chain_length, num_chains] => {
            let length = length.parse().map_err(|_| format!("invalid length '{}'", length))?;
            let chain_length = chain_length
                .parse()
                .map_err(|_| format!("invalid chain length '{}'", chain_length))?;
            let num_chains = num_chains
                .parse()
                .map_err(|_| format!("invalid chain count '{}'", num_chains))?;
            TableParams::new(length, chain_length, num_chains).map_err(|e| e.to_string())
        }
        _ => Err("expected 0 or 3 arguments".to_string()),
    }
}
