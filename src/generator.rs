//! Synthetic battery telemetry generator.
//!
//! Produces a plausible fleet snapshot: capacity size classes, a newer/older
//! cycle-count mix, SOH decaying with cycles, voltage tracking SOC, and
//! internal resistance growing with age. Values are rounded to the precision
//! the source dataset ships with.

use crate::models::BatteryRecord;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

/// Capacity ranges (Ah) per pack size class.
const SMALL_PACK_AH: (f64, f64) = (30.0, 50.0);
const MEDIUM_PACK_AH: (f64, f64) = (60.0, 85.0);
const LARGE_PACK_AH: (f64, f64) = (90.0, 120.0);

/// Generate `rows` records. A fixed `seed` makes the table reproducible.
pub fn generate_records(rows: usize, seed: Option<u64>) -> Vec<BatteryRecord> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    info!(
        "Generating {} synthetic battery records (seed: {:?})",
        rows, seed
    );
    (0..rows).map(|i| generate_record(&mut rng, i)).collect()
}

fn generate_record(rng: &mut StdRng, index: usize) -> BatteryRecord {
    // 60% newer packs, 40% well-used ones (some past their cycle budget).
    let cycle_count: u32 = if rng.gen_bool(0.6) {
        rng.gen_range(50..=800)
    } else {
        rng.gen_range(800..=3000)
    };

    // SOH follows a per-pack degradation curve with ±3% measurement noise.
    let decay_rate = rng.gen_range(0.01..0.018);
    let soh = (100.0 - decay_rate * cycle_count as f64 + rng.gen_range(-3.0..3.0))
        .clamp(60.0, 100.0);

    // Mostly normal usage range, with some nearly-full and some low packs.
    let soc = match rng.gen::<f64>() {
        roll if roll < 0.70 => rng.gen_range(30.0..85.0),
        roll if roll < 0.85 => rng.gen_range(85.0..100.0),
        _ => rng.gen_range(10.0..30.0),
    };

    let initial_capacity = {
        let (min, max) = match rng.gen::<f64>() {
            roll if roll < 0.3 => SMALL_PACK_AH,
            roll if roll < 0.7 => MEDIUM_PACK_AH,
            _ => LARGE_PACK_AH,
        };
        rng.gen_range(min..max)
    };
    let full_charge_capacity = initial_capacity * (soh / 100.0);

    // Voltage is driven by SOC across the standard lithium-ion range,
    // plus measurement noise.
    let voltage = (3.0 + 1.2 * (soc / 100.0) + rng.gen_range(-0.1f64..0.1)).clamp(3.0, 4.2);

    // Recent charging (high SOC) nudges temperature up; ambient varies,
    // occasionally to extremes.
    let soc_effect = (soc - 50.0) / 10.0;
    let ambient_effect: f64 = if rng.gen_bool(0.7) {
        rng.gen_range(-5.0..5.0)
    } else {
        rng.gen_range(-10.0..15.0)
    };
    let temperature = (25.0 + soc_effect + ambient_effect).clamp(10.0, 45.0);

    // Resistance grows with cycles, drops slightly when warm, rises with
    // poor health, ±10% pack-to-pack spread, floored at 15 mΩ.
    let mut resistance =
        rng.gen_range(18.0..25.0) + rng.gen_range(0.012..0.018) * cycle_count as f64;
    resistance *= 1.0 - (temperature - 25.0) * 0.005;
    resistance *= 1.0 + (100.0 - soh) * 0.01;
    resistance *= rng.gen_range(0.9..1.1);
    resistance = resistance.max(15.0);

    BatteryRecord {
        battery_id: format!("Battery {}", index + 1),
        state_of_charge_pct: round_to(soc, 2),
        state_of_health_pct: round_to(soh, 2),
        cycle_count,
        initial_capacity_ah: round_to(initial_capacity, 1),
        full_charge_capacity_ah: round_to(full_charge_capacity, 1),
        voltage_v: round_to(voltage, 3),
        temperature_c: round_to(temperature, 1),
        internal_resistance_mohm: round_to(resistance, 2),
    }
}

fn round_to(value: f64, digits: i32) -> f64 {
    let factor = 10f64.powi(digits);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_record;

    #[test]
    fn generates_the_requested_row_count() {
        assert_eq!(generate_records(25, Some(1)).len(), 25);
        assert!(generate_records(0, Some(1)).is_empty());
    }

    #[test]
    fn same_seed_reproduces_the_table() {
        assert_eq!(generate_records(50, Some(42)), generate_records(50, Some(42)));
    }

    #[test]
    fn different_seeds_differ() {
        assert_ne!(generate_records(50, Some(1)), generate_records(50, Some(2)));
    }

    #[test]
    fn generated_records_pass_validation_and_stay_in_range() {
        for record in generate_records(300, Some(7)) {
            validate_record(&record).expect("generated record should validate");
            assert!((60.0..=100.0).contains(&record.state_of_health_pct));
            assert!((10.0..=100.0).contains(&record.state_of_charge_pct));
            assert!((3.0..=4.2).contains(&record.voltage_v));
            assert!((10.0..=45.0).contains(&record.temperature_c));
            assert!(record.internal_resistance_mohm >= 15.0);
            assert!((50..=3000).contains(&record.cycle_count));
            assert!(record.full_charge_capacity_ah <= record.initial_capacity_ah + 0.1);
        }
    }

    #[test]
    fn identifiers_are_unique_and_sequential() {
        let records = generate_records(3, Some(9));
        let ids: Vec<&str> = records.iter().map(|r| r.battery_id.as_str()).collect();
        assert_eq!(ids, vec!["Battery 1", "Battery 2", "Battery 3"]);
    }
}
