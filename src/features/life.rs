//! Remaining life span estimation.

use crate::models::RemainingLife;

/// Cycle budget a pack can undergo over its full life.
pub const MAX_CYCLES: f64 = 2000.0;

/// Years of life represented by each remaining cycle.
const YEARS_PER_CYCLE: f64 = 0.5;

/// The years component has always been reported modulo 15 by this dataset's
/// analysis; downstream consumers expect the wrapped value, so it is kept.
/// Flagged with stakeholders as a probable cap-vs-wrap mixup.
const YEARS_WRAP: i64 = 15;

/// Estimates remaining life from the cycle count and state of health,
/// decomposed into years (wrapped modulo 15), months and days.
///
/// A pack past its cycle budget yields a negative raw estimate; components
/// truncate toward zero so all three carry the sign.
pub fn remaining_life(cycle_count: u32, soh_pct: f64) -> RemainingLife {
    let remaining_cycles = MAX_CYCLES - cycle_count as f64;
    let raw_years = remaining_cycles * YEARS_PER_CYCLE * (soh_pct / 100.0);

    let years = raw_years.trunc();
    let month_fraction = (raw_years - years) * 12.0;
    let months = month_fraction.trunc();
    let days = ((month_fraction - months) * 30.0).trunc();

    RemainingLife {
        years: years as i64 % YEARS_WRAP,
        months: months as i64,
        days: days as i64,
    }
}
