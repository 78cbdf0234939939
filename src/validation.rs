//! Per-field validity checks applied before any feature computation.
//!
//! The pipeline rejects bad records instead of coercing them: a record that
//! fails any check here is reported as a per-record failure and skipped.
//! Bounds are the conceptual field domains, not the tighter ranges the
//! synthetic generator happens to produce.

use crate::errors::RecordError;
use crate::models::BatteryRecord;

pub fn validate_record(record: &BatteryRecord) -> Result<(), RecordError> {
    if record.battery_id.trim().is_empty() {
        return Err(RecordError::EmptyId);
    }

    check_range(
        "State of Charge (SOC) (%)",
        record.state_of_charge_pct,
        0.0,
        100.0,
    )?;
    check_range(
        "State of Health (SOH) (%)",
        record.state_of_health_pct,
        0.0,
        100.0,
    )?;
    // Zero initial capacity is legal input: capacity fade reports null for it.
    check_non_negative("Initial Rated Capacity (Ah)", record.initial_capacity_ah)?;
    check_non_negative("Full Charge Capacity (Ah)", record.full_charge_capacity_ah)?;
    check_positive("Voltage (V)", record.voltage_v)?;
    check_finite("Temperature (°C)", record.temperature_c)?;
    check_positive("Internal Resistance (mΩ)", record.internal_resistance_mohm)?;

    Ok(())
}

fn check_finite(column: &'static str, value: f64) -> Result<(), RecordError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(RecordError::NonFinite { column, value })
    }
}

fn check_range(column: &'static str, value: f64, min: f64, max: f64) -> Result<(), RecordError> {
    check_finite(column, value)?;
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(RecordError::OutOfRange {
            column,
            value,
            min,
            max,
        })
    }
}

fn check_non_negative(column: &'static str, value: f64) -> Result<(), RecordError> {
    check_finite(column, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(RecordError::Negative { column, value })
    }
}

fn check_positive(column: &'static str, value: f64) -> Result<(), RecordError> {
    check_finite(column, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(RecordError::NotPositive { column, value })
    }
}
