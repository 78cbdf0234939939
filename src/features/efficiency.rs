//! Efficiency and capacity fade, the two direct capacity-derived metrics.

/// Weighted blend of state of health and state of charge, clamped to [0, 100].
pub fn efficiency_pct(soh_pct: f64, soc_pct: f64) -> f64 {
    (0.6 * soh_pct + 0.4 * soc_pct).clamp(0.0, 100.0)
}

/// Permanent capacity loss relative to the rated capacity, in percent.
///
/// Returns `None` for a zero rated capacity: that is a reported null in the
/// output table, not a failure.
pub fn capacity_fade_pct(initial_capacity_ah: f64, full_charge_capacity_ah: f64) -> Option<f64> {
    if initial_capacity_ah == 0.0 {
        return None;
    }
    Some((1.0 - full_charge_capacity_ah / initial_capacity_ah) * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn efficiency_extremes() {
        assert_relative_eq!(efficiency_pct(100.0, 100.0), 100.0);
        assert_relative_eq!(efficiency_pct(0.0, 0.0), 0.0);
    }

    #[test]
    fn efficiency_is_the_weighted_blend() {
        assert_relative_eq!(efficiency_pct(90.0, 50.0), 0.6 * 90.0 + 0.4 * 50.0);
    }

    #[test]
    fn efficiency_stays_in_range_over_the_domain() {
        for soh in 0..=100 {
            for soc in (0..=100).step_by(5) {
                let e = efficiency_pct(soh as f64, soc as f64);
                assert!((0.0..=100.0).contains(&e), "soh={soh} soc={soc} -> {e}");
            }
        }
    }

    #[test]
    fn fade_of_eighty_from_hundred_is_twenty_percent() {
        assert_relative_eq!(capacity_fade_pct(100.0, 80.0).unwrap(), 20.0);
    }

    #[test]
    fn zero_rated_capacity_reports_null() {
        assert_eq!(capacity_fade_pct(0.0, 0.0), None);
        assert_eq!(capacity_fade_pct(0.0, 75.0), None);
    }

    #[test]
    fn fade_can_be_negative_when_full_exceeds_rated() {
        assert!(capacity_fade_pct(100.0, 105.0).unwrap() < 0.0);
    }
}
