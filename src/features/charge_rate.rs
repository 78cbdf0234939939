//! Charging/discharging rate classification.
//!
//! A priority decision list, not independent rules: the first matching rule
//! wins, so a pack satisfying both the Fast and Moderate conditions is Fast.

use crate::models::ChargeRate;

type Predicate = fn(f64, f64, f64) -> bool;

const RULES: [(Predicate, ChargeRate); 2] = [
    (supports_fast, ChargeRate::Fast),
    (supports_moderate, ChargeRate::Moderate),
];

fn supports_fast(voltage_v: f64, temperature_c: f64, resistance_mohm: f64) -> bool {
    voltage_v > 4.0 && temperature_c < 30.0 && resistance_mohm < 50.0
}

fn supports_moderate(voltage_v: f64, temperature_c: f64, resistance_mohm: f64) -> bool {
    voltage_v > 3.7 && temperature_c < 35.0 && resistance_mohm < 75.0
}

pub fn charge_rate(voltage_v: f64, temperature_c: f64, resistance_mohm: f64) -> ChargeRate {
    RULES
        .iter()
        .find(|(matches, _)| matches(voltage_v, temperature_c, resistance_mohm))
        .map(|(_, class)| *class)
        .unwrap_or(ChargeRate::Slow)
}
