//! Voltage stability rating.

/// Deviation thresholds (V) in ascending order with the rating awarded when
/// the deviation falls below them. Anything at or past the last threshold
/// rates 1.
const DEVIATION_STEPS: [(f64, u8); 9] = [
    (0.05, 10),
    (0.10, 9),
    (0.15, 8),
    (0.20, 7),
    (0.25, 6),
    (0.30, 5),
    (0.35, 4),
    (0.40, 3),
    (0.45, 2),
];

/// Linear open-circuit voltage model: 3.2 V at 0% SOC up to 4.2 V at 100%.
pub fn expected_voltage(soc_pct: f64) -> f64 {
    3.2 + (soc_pct / 100.0) * 1.0
}

/// Rates how closely the measured voltage tracks the SOC-expected voltage,
/// 10 (most stable) down to 1.
pub fn voltage_stability(voltage_v: f64, soc_pct: f64) -> u8 {
    let deviation = (voltage_v - expected_voltage(soc_pct)).abs();
    DEVIATION_STEPS
        .iter()
        .find(|(threshold, _)| deviation < *threshold)
        .map(|(_, rating)| *rating)
        .unwrap_or(1)
}
