//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `rollcount_core` linkage.
//! - Keep output deterministic for quick local sanity checks.
//!
//! File logging is enabled only when `ROLLCOUNT_LOG_DIR` is set; the level
//! comes from `ROLLCOUNT_LOG_LEVEL` or the build-mode default.

use rollcount_core::{default_log_level, init_logging, AttendanceService, DayKey, Mark};
use std::process::ExitCode;

const LOG_DIR_ENV: &str = "ROLLCOUNT_LOG_DIR";
const LOG_LEVEL_ENV: &str = "ROLLCOUNT_LOG_LEVEL";

fn main() -> ExitCode {
    if let Ok(log_dir) = std::env::var(LOG_DIR_ENV) {
        let level =
            std::env::var(LOG_LEVEL_ENV).unwrap_or_else(|_| default_log_level().to_string());
        if let Err(err) = init_logging(&level, &log_dir) {
            eprintln!("rollcount_cli logging disabled: {err}");
            return ExitCode::FAILURE;
        }
    }

    println!("rollcount_core ping={}", rollcount_core::ping());
    println!("rollcount_core version={}", rollcount_core::core_version());

    let mut service = AttendanceService::new();
    for (day, mark) in [(1, Mark::Present), (2, Mark::Present), (3, Mark::Absent)] {
        service.select_day(DayKey::from_epoch_ms(day));
        if let Err(err) = service.confirm(mark) {
            eprintln!("rollcount_cli probe failed: {err}");
            return ExitCode::FAILURE;
        }
    }

    let summary = service.summary();
    println!(
        "rollcount_core probe percentage={} present={} absent={}",
        summary.percentage_label(),
        summary.present,
        summary.absent
    );
    ExitCode::SUCCESS
}
