//! Composite battery health score.

use super::life::MAX_CYCLES;

const SOH_WEIGHT: f64 = 0.35;
const RESISTANCE_WEIGHT: f64 = 0.25;
const TEMP_STRESS_WEIGHT: f64 = 0.15;
const VOLTAGE_STABILITY_WEIGHT: f64 = 0.15;
const CYCLE_COUNT_WEIGHT: f64 = 0.10;

/// Weighted 0-100 score over state of health, internal resistance, cycle
/// count and the already-derived temperature stress and voltage stability.
///
/// The stress and stability values must be the ones emitted for the same
/// record; they are threaded in as arguments rather than recomputed so the
/// standalone columns and the score can never disagree.
pub fn health_score(
    soh_pct: f64,
    resistance_mohm: f64,
    cycle_count: u32,
    temperature_stress: u8,
    voltage_stability: u8,
) -> u8 {
    // Lower resistance is better; typical pack range is ~20-150 mΩ.
    let normalized_resistance = ((150.0 - resistance_mohm) / 1.3).clamp(0.0, 100.0);
    let normalized_cycles = (1.0 - (cycle_count as f64 / MAX_CYCLES).clamp(0.0, 1.0)) * 100.0;
    // Invert stress so lower stress scores higher; scale stability to 0-100.
    let score = SOH_WEIGHT * soh_pct
        + RESISTANCE_WEIGHT * normalized_resistance
        + TEMP_STRESS_WEIGHT * (100.0 - temperature_stress as f64)
        + VOLTAGE_STABILITY_WEIGHT * (voltage_stability as f64 * 10.0)
        + CYCLE_COUNT_WEIGHT * normalized_cycles;

    score.round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pristine_pack_scores_a_hundred() {
        assert_eq!(health_score(100.0, 15.0, 0, 0, 10), 100);
    }

    #[test]
    fn worst_case_floors_at_two() {
        // Stability 1 still contributes 1.5 points; score rounds to 2.
        assert_eq!(health_score(0.0, 150.0, 2000, 100, 1), 2);
        assert_eq!(health_score(0.0, 200.0, 3000, 100, 1), 2);
    }

    #[test]
    fn resistance_normalization_clamps_at_both_ends() {
        // 15 mΩ normalizes past 100 and clamps; 150 mΩ bottoms out at 0.
        let low_r = health_score(80.0, 15.0, 1000, 0, 10);
        let high_r = health_score(80.0, 150.0, 1000, 0, 10);
        assert_eq!(low_r - high_r, 25);
    }

    #[test]
    fn cycle_count_beyond_budget_clamps() {
        assert_eq!(
            health_score(80.0, 50.0, 2000, 20, 8),
            health_score(80.0, 50.0, 5000, 20, 8)
        );
    }

    #[test]
    fn known_mid_range_example() {
        // 0.35*80 + 0.25*(100/1.3) + 0.15*80 + 0.15*80 + 0.10*50 = 76.2 -> 76
        assert_eq!(health_score(80.0, 50.0, 1000, 20, 8), 76);
    }
}
