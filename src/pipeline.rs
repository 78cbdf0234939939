//! Record derivation orchestration.
//!
//! [`derive_record`] is the pure per-record pipeline; [`Deriver`] maps it
//! over a table, in parallel by default, preserving input order and
//! collecting per-record failures alongside the successes.

use crate::errors::{PipelineError, RecordError};
use crate::features;
use crate::models::{BatteryRecord, DerivedRecord};
use crate::validation;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Validates a raw record and runs the seven feature stages in order.
///
/// The temperature stress and voltage stability computed here are the same
/// values folded into the health score; the aggregator never recomputes them.
pub fn derive_record(record: &BatteryRecord) -> Result<DerivedRecord, RecordError> {
    validation::validate_record(record)?;

    let efficiency_pct =
        features::efficiency_pct(record.state_of_health_pct, record.state_of_charge_pct);
    let capacity_fade_pct =
        features::capacity_fade_pct(record.initial_capacity_ah, record.full_charge_capacity_ah);
    let temperature_stress = features::temperature_stress(record.temperature_c);
    let voltage_stability =
        features::voltage_stability(record.voltage_v, record.state_of_charge_pct);
    let charge_rate = features::charge_rate(
        record.voltage_v,
        record.temperature_c,
        record.internal_resistance_mohm,
    );
    let life_span_remaining =
        features::remaining_life(record.cycle_count, record.state_of_health_pct);
    let health_score = features::health_score(
        record.state_of_health_pct,
        record.internal_resistance_mohm,
        record.cycle_count,
        temperature_stress,
        voltage_stability,
    );

    Ok(DerivedRecord {
        battery_id: record.battery_id.clone(),
        state_of_charge_pct: record.state_of_charge_pct,
        state_of_health_pct: record.state_of_health_pct,
        cycle_count: record.cycle_count,
        initial_capacity_ah: record.initial_capacity_ah,
        full_charge_capacity_ah: record.full_charge_capacity_ah,
        voltage_v: record.voltage_v,
        temperature_c: record.temperature_c,
        internal_resistance_mohm: record.internal_resistance_mohm,
        efficiency_pct,
        life_span_remaining,
        charge_rate,
        temperature_stress,
        voltage_stability,
        health_score,
        capacity_fade_pct,
    })
}

/// A record the pipeline rejected, with its position in the input table.
#[derive(Debug)]
pub struct RecordFailure {
    pub index: usize,
    pub battery_id: String,
    pub error: RecordError,
}

/// Outcome of a bulk derivation pass. `derived` keeps input order with the
/// rejected records removed; `failures` keeps input order too.
#[derive(Debug)]
pub struct DerivationReport {
    pub derived: Vec<DerivedRecord>,
    pub failures: Vec<RecordFailure>,
    pub elapsed: Duration,
}

impl DerivationReport {
    pub fn total_records(&self) -> usize {
        self.derived.len() + self.failures.len()
    }
}

/// Bulk derivation runner.
pub struct Deriver {
    num_workers: usize,
    sequential: bool,
    show_progress: bool,
}

impl Deriver {
    pub fn new() -> Self {
        Self {
            num_workers: num_cpus::get(),
            sequential: false,
            show_progress: true,
        }
    }

    /// `0` keeps one worker per core.
    pub fn with_workers(mut self, num_workers: usize) -> Self {
        if num_workers > 0 {
            self.num_workers = num_workers;
        }
        self
    }

    pub fn sequential(mut self, sequential: bool) -> Self {
        self.sequential = sequential;
        self
    }

    pub fn show_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    pub fn run(&self, records: &[BatteryRecord]) -> Result<DerivationReport, PipelineError> {
        let start = Instant::now();
        info!(
            "Deriving features for {} records ({})",
            records.len(),
            if self.sequential {
                "sequential".to_string()
            } else {
                format!("{} workers", self.num_workers)
            }
        );

        let progress = Arc::new(if self.show_progress && !records.is_empty() {
            let bar = ProgressBar::new(records.len() as u64);
            bar.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
                    .unwrap()
                    .progress_chars("#>-"),
            );
            bar
        } else {
            ProgressBar::hidden()
        });

        let results: Vec<Result<DerivedRecord, RecordError>> = if self.sequential {
            records
                .iter()
                .map(|record| {
                    let result = derive_record(record);
                    progress.inc(1);
                    result
                })
                .collect()
        } else {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(self.num_workers)
                .build()
                .map_err(|e| PipelineError::ThreadPool(e.to_string()))?;
            pool.install(|| {
                records
                    .par_iter()
                    .map(|record| {
                        let progress = Arc::clone(&progress);
                        let result = derive_record(record);
                        progress.inc(1);
                        result
                    })
                    .collect()
            })
        };
        progress.finish_and_clear();

        let mut derived = Vec::with_capacity(records.len());
        let mut failures = Vec::new();
        for (index, result) in results.into_iter().enumerate() {
            match result {
                Ok(record) => derived.push(record),
                Err(error) => {
                    warn!(
                        "Rejected record {} ('{}'): {}",
                        index, records[index].battery_id, error
                    );
                    failures.push(RecordFailure {
                        index,
                        battery_id: records[index].battery_id.clone(),
                        error,
                    });
                }
            }
        }

        let elapsed = start.elapsed();
        info!(
            "Derived {} records, rejected {} in {:.2?}",
            derived.len(),
            failures.len(),
            elapsed
        );

        Ok(DerivationReport {
            derived,
            failures,
            elapsed,
        })
    }
}

impl Default for Deriver {
    fn default() -> Self {
        Self::new()
    }
}
