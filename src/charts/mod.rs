//! Charts - Chart-ready series derived from a record list
//!
//! Every derivation is a pure function over `&[EquipmentRecord]`. An empty
//! or absent record list yields [`ChartData::NoData`] so the caller can show a
//! placeholder instead of an empty chart.
//!
//! ```text
//! Dataset.equipment_records
//!        │
//!        ├──► type_distribution()  ──► pie
//!        ├──► type_averages()      ──► grouped bar
//!        └──► trend_series(20)     ──► line
//! ```

mod averages;
mod distribution;
mod trend;

pub use averages::*;
pub use distribution::*;
pub use trend::*;

use crate::constants::TREND_LIMIT;
use crate::domain::{Dataset, EquipmentRecord};

/// Result of a derivation: either a series or an explicit "no data" signal
#[derive(Debug, Clone, PartialEq)]
pub enum ChartData<T> {
    NoData,
    Ready(T),
}

impl<T> ChartData<T> {
    pub fn is_no_data(&self) -> bool {
        matches!(self, ChartData::NoData)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            ChartData::Ready(value) => Some(value),
            ChartData::NoData => None,
        }
    }
}

/// The three chart inputs of the overview
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSet {
    pub distribution: TypeDistribution,
    pub averages: TypeAverages,
    pub trend: TrendSeries,
}

impl ChartSet {
    /// Derive all charts from a record list
    pub fn derive(records: &[EquipmentRecord]) -> ChartData<ChartSet> {
        match (
            type_distribution(records),
            type_averages(records),
            trend_series(records, TREND_LIMIT),
        ) {
            (ChartData::Ready(distribution), ChartData::Ready(averages), ChartData::Ready(trend)) => {
                ChartData::Ready(ChartSet {
                    distribution,
                    averages,
                    trend,
                })
            }
            _ => ChartData::NoData,
        }
    }

    /// Derive from an optional dataset, treating absence as "no data"
    pub fn from_dataset(dataset: Option<&Dataset>) -> ChartData<ChartSet> {
        match dataset {
            Some(dataset) => Self::derive(dataset.records()),
            None => ChartData::NoData,
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::domain::EquipmentRecord;

    /// 25 records: 10 Pumps, 10 Valves, 5 Reactors, interleaved
    pub fn mixed_records() -> Vec<EquipmentRecord> {
        (0..25)
            .map(|i| {
                let (kind, base) = match i % 5 {
                    0 | 2 => ("Pump", 100.0),
                    1 | 3 => ("Valve", 50.0),
                    _ => ("Reactor", 200.0),
                };
                let step = i as f64;
                EquipmentRecord {
                    id: Some(i as u64 + 1),
                    equipment_name: format!("{kind}-{}", i + 1),
                    equipment_type: kind.to_string(),
                    flowrate: base + step,
                    pressure: base / 10.0 + step / 10.0,
                    temperature: base + 20.0,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_records_yield_no_data_everywhere() {
        assert!(ChartSet::derive(&[]).is_no_data());
        assert!(type_distribution(&[]).is_no_data());
        assert!(type_averages(&[]).is_no_data());
        assert!(trend_series(&[], TREND_LIMIT).is_no_data());
    }

    #[test]
    fn absent_dataset_yields_no_data() {
        assert!(ChartSet::from_dataset(None).is_no_data());
        let empty = Dataset::default();
        assert!(ChartSet::from_dataset(Some(&empty)).is_no_data());
    }

    #[test]
    fn derive_bundles_all_three() {
        let records = fixtures::mixed_records();
        let charts = ChartSet::derive(&records);
        let set = charts.ready().expect("charts ready");
        assert_eq!(set.distribution.total(), 25);
        assert_eq!(set.averages.len(), 3);
        assert_eq!(set.trend.len(), 20);
    }
}
