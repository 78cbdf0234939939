//! Aggregate summary of a derived table.
//!
//! The exploratory numbers the dashboards plot: distribution counts and
//! basic statistics. Printable for the console and serializable to JSON for
//! downstream chart tooling.

use crate::models::{ChargeRate, DerivedRecord};
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::Write;

#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct StatBlock {
    pub mean: f64,
    pub min: f64,
    pub max: f64,
}

impl StatBlock {
    fn from_values(values: impl Iterator<Item = f64>) -> Self {
        let mut count = 0usize;
        let mut sum = 0.0;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for value in values {
            count += 1;
            sum += value;
            min = min.min(value);
            max = max.max(value);
        }
        if count == 0 {
            return Self::default();
        }
        Self {
            mean: sum / count as f64,
            min,
            max,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct ChargeRateCounts {
    pub fast: usize,
    pub moderate: usize,
    pub slow: usize,
}

/// Health score bands matching the dashboard reference lines.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct HealthBands {
    /// score >= 90
    pub excellent: usize,
    /// 80..=89
    pub good: usize,
    /// 70..=79
    pub poor: usize,
    /// score < 70
    pub critical: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct TableSummary {
    pub records: usize,
    pub efficiency_pct: StatBlock,
    pub health_score: StatBlock,
    /// Mean over the rows with a reported fade (null fades excluded).
    pub mean_capacity_fade_pct: Option<f64>,
    pub charge_rate_counts: ChargeRateCounts,
    pub health_bands: HealthBands,
    /// Records per temperature stress level (0, 20, .., 100).
    pub temperature_stress_counts: BTreeMap<u8, usize>,
}

impl TableSummary {
    pub fn from_records(records: &[DerivedRecord]) -> Self {
        let mut charge_rate_counts = ChargeRateCounts::default();
        let mut health_bands = HealthBands::default();
        let mut temperature_stress_counts = BTreeMap::new();
        let mut fade_sum = 0.0;
        let mut fade_count = 0usize;

        for record in records {
            match record.charge_rate {
                ChargeRate::Fast => charge_rate_counts.fast += 1,
                ChargeRate::Moderate => charge_rate_counts.moderate += 1,
                ChargeRate::Slow => charge_rate_counts.slow += 1,
            }
            match record.health_score {
                90..=u8::MAX => health_bands.excellent += 1,
                80..=89 => health_bands.good += 1,
                70..=79 => health_bands.poor += 1,
                _ => health_bands.critical += 1,
            }
            *temperature_stress_counts
                .entry(record.temperature_stress)
                .or_insert(0) += 1;
            if let Some(fade) = record.capacity_fade_pct {
                fade_sum += fade;
                fade_count += 1;
            }
        }

        Self {
            records: records.len(),
            efficiency_pct: StatBlock::from_values(records.iter().map(|r| r.efficiency_pct)),
            health_score: StatBlock::from_values(records.iter().map(|r| r.health_score as f64)),
            mean_capacity_fade_pct: (fade_count > 0).then(|| fade_sum / fade_count as f64),
            charge_rate_counts,
            health_bands,
            temperature_stress_counts,
        }
    }

    pub fn print(&self) {
        println!("\n========== Derived Table Summary ==========");
        println!("Records: {}", self.records);
        println!(
            "Efficiency (%): mean {:.2}, min {:.2}, max {:.2}",
            self.efficiency_pct.mean, self.efficiency_pct.min, self.efficiency_pct.max
        );
        println!(
            "Health Score: mean {:.1}, min {:.0}, max {:.0}",
            self.health_score.mean, self.health_score.min, self.health_score.max
        );
        match self.mean_capacity_fade_pct {
            Some(fade) => println!("Capacity Fade (%): mean {fade:.2}"),
            None => println!("Capacity Fade (%): no reported values"),
        }
        println!(
            "Charge Rate: {} fast / {} moderate / {} slow",
            self.charge_rate_counts.fast,
            self.charge_rate_counts.moderate,
            self.charge_rate_counts.slow
        );
        println!(
            "Health Bands: {} excellent / {} good / {} poor / {} critical",
            self.health_bands.excellent,
            self.health_bands.good,
            self.health_bands.poor,
            self.health_bands.critical
        );
        let stress_line: Vec<String> = self
            .temperature_stress_counts
            .iter()
            .map(|(stress, count)| format!("{stress}:{count}"))
            .collect();
        println!("Temperature Stress: {}", stress_line.join("  "));
        println!("===========================================");
    }

    pub fn write_json<W: Write>(&self, writer: W) -> serde_json::Result<()> {
        serde_json::to_writer_pretty(writer, self)
    }
}
