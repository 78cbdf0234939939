//! Pure per-record feature functions.
//!
//! Each function is total over validated input and deterministic; the
//! orchestration (and the one hard ordering dependency: the health score
//! consumes the temperature stress and voltage stability computed here)
//! lives in [`crate::pipeline`].

pub mod charge_rate;
pub mod efficiency;
pub mod health;
pub mod life;
pub mod thermal;
pub mod voltage;

pub use charge_rate::charge_rate;
pub use efficiency::{capacity_fade_pct, efficiency_pct};
pub use health::health_score;
pub use life::remaining_life;
pub use thermal::temperature_stress;
pub use voltage::{expected_voltage, voltage_stability};
