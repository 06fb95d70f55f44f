//! `extract_benchmarks` entry point.

use std::process::ExitCode;

fn main() -> ExitCode {
    match bench_extractor_cli::run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
