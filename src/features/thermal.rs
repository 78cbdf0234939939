//! Temperature stress classification.

/// Stress factor in {0, 20, 40, 60, 80, 100} from the cell temperature.
///
/// Lithium-ion packs are happiest in the 20-25 °C band; stress grows by 20
/// per 5 °C band moving away from it and saturates at 100 outside [0, 45].
/// The checks are ordered and mutually exclusive; each boundary belongs to
/// the band closer to the ideal range.
pub fn temperature_stress(temperature_c: f64) -> u8 {
    let t = temperature_c;
    if (20.0..=25.0).contains(&t) {
        0
    } else if (15.0..20.0).contains(&t) || (25.0..=30.0).contains(&t) {
        20
    } else if (10.0..15.0).contains(&t) || (30.0..=35.0).contains(&t) {
        40
    } else if (5.0..10.0).contains(&t) || (35.0..=40.0).contains(&t) {
        60
    } else if (0.0..5.0).contains(&t) || (40.0..=45.0).contains(&t) {
        80
    } else {
        100
    }
}
