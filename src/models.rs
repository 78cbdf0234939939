//! Typed record structs for the battery telemetry tables.
//!
//! Column names (including the non-ASCII unit symbols) follow the source
//! dataset exactly so that existing consumers of the CSV keep working.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One raw telemetry snapshot for a single battery pack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatteryRecord {
    #[serde(rename = "Battery")]
    pub battery_id: String,
    #[serde(rename = "State of Charge (SOC) (%)")]
    pub state_of_charge_pct: f64,
    #[serde(rename = "State of Health (SOH) (%)")]
    pub state_of_health_pct: f64,
    #[serde(rename = "Cycle Count")]
    pub cycle_count: u32,
    #[serde(rename = "Initial Rated Capacity (Ah)")]
    pub initial_capacity_ah: f64,
    #[serde(rename = "Full Charge Capacity (Ah)")]
    pub full_charge_capacity_ah: f64,
    #[serde(rename = "Voltage (V)")]
    pub voltage_v: f64,
    #[serde(rename = "Temperature (°C)")]
    pub temperature_c: f64,
    #[serde(rename = "Internal Resistance (mΩ)")]
    pub internal_resistance_mohm: f64,
}

/// Charging/discharging rate class, ordered fastest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChargeRate {
    Fast,
    Moderate,
    Slow,
}

impl fmt::Display for ChargeRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChargeRate::Fast => write!(f, "Fast"),
            ChargeRate::Moderate => write!(f, "Moderate"),
            ChargeRate::Slow => write!(f, "Slow"),
        }
    }
}

/// Estimated remaining life span, decomposed into calendar components.
///
/// All three components carry the same sign: a battery past its cycle budget
/// reports negative values. Rendered as `"Y years, M months, D days"` in the
/// output table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemainingLife {
    pub years: i64,
    pub months: i64,
    pub days: i64,
}

impl fmt::Display for RemainingLife {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} years, {} months, {} days",
            self.years, self.months, self.days
        )
    }
}

impl FromStr for RemainingLife {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(", ");
        let mut component = |suffix: &str| -> Result<i64, String> {
            let part = parts
                .next()
                .ok_or_else(|| format!("missing '{suffix}' component in '{s}'"))?;
            let number = part
                .strip_suffix(suffix)
                .ok_or_else(|| format!("expected '{suffix}' suffix in '{part}'"))?;
            number
                .trim()
                .parse::<i64>()
                .map_err(|e| format!("bad number in '{part}': {e}"))
        };
        Ok(RemainingLife {
            years: component(" years")?,
            months: component(" months")?,
            days: component(" days")?,
        })
    }
}

impl Serialize for RemainingLife {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for RemainingLife {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A raw record augmented with the seven derived columns.
///
/// Column order matches the original analysis output: raw fields first, then
/// the derived fields in the order they were historically appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedRecord {
    #[serde(rename = "Battery")]
    pub battery_id: String,
    #[serde(rename = "State of Charge (SOC) (%)")]
    pub state_of_charge_pct: f64,
    #[serde(rename = "State of Health (SOH) (%)")]
    pub state_of_health_pct: f64,
    #[serde(rename = "Cycle Count")]
    pub cycle_count: u32,
    #[serde(rename = "Initial Rated Capacity (Ah)")]
    pub initial_capacity_ah: f64,
    #[serde(rename = "Full Charge Capacity (Ah)")]
    pub full_charge_capacity_ah: f64,
    #[serde(rename = "Voltage (V)")]
    pub voltage_v: f64,
    #[serde(rename = "Temperature (°C)")]
    pub temperature_c: f64,
    #[serde(rename = "Internal Resistance (mΩ)")]
    pub internal_resistance_mohm: f64,

    #[serde(rename = "Efficiency (%)")]
    pub efficiency_pct: f64,
    #[serde(rename = "Life Span Remaining")]
    pub life_span_remaining: RemainingLife,
    #[serde(rename = "Charging/Discharging Rate")]
    pub charge_rate: ChargeRate,
    #[serde(rename = "Temperature Stress Factor")]
    pub temperature_stress: u8,
    #[serde(rename = "Voltage Stability Rating")]
    pub voltage_stability: u8,
    #[serde(rename = "Battery Health Score")]
    pub health_score: u8,
    #[serde(rename = "Capacity Fade (%)")]
    pub capacity_fade_pct: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn charge_rate_display_matches_serde_name() {
        assert_eq!(ChargeRate::Fast.to_string(), "Fast");
        assert_eq!(ChargeRate::Moderate.to_string(), "Moderate");
        assert_eq!(ChargeRate::Slow.to_string(), "Slow");
    }

    #[test]
    fn remaining_life_round_trips_through_display() {
        let life = RemainingLife {
            years: 10,
            months: 4,
            days: 15,
        };
        let rendered = life.to_string();
        assert_eq!(rendered, "10 years, 4 months, 15 days");
        assert_eq!(rendered.parse::<RemainingLife>().unwrap(), life);
    }

    #[test]
    fn remaining_life_parses_negative_components() {
        let parsed: RemainingLife = "0 years, -6 months, 0 days".parse().unwrap();
        assert_eq!(
            parsed,
            RemainingLife {
                years: 0,
                months: -6,
                days: 0
            }
        );
    }

    #[test]
    fn remaining_life_rejects_garbage() {
        assert!("ten years".parse::<RemainingLife>().is_err());
        assert!("1 years, 2 months".parse::<RemainingLife>().is_err());
    }
}
