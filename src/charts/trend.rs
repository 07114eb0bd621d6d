//! Bounded trend series (line chart input)

use super::ChartData;
use crate::domain::{EquipmentRecord, Parameter};

/// Parallel sequences over the first records, index-aligned
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrendSeries {
    pub labels: Vec<String>,
    pub flowrate: Vec<f64>,
    pub pressure: Vec<f64>,
    pub temperature: Vec<f64>,
}

impl TrendSeries {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn series(&self, parameter: Parameter) -> &[f64] {
        match parameter {
            Parameter::Flowrate => &self.flowrate,
            Parameter::Pressure => &self.pressure,
            Parameter::Temperature => &self.temperature,
        }
    }
}

/// Project the first `limit` records, in their existing order
pub fn trend_series(records: &[EquipmentRecord], limit: usize) -> ChartData<TrendSeries> {
    let head = &records[..records.len().min(limit)];
    if head.is_empty() {
        return ChartData::NoData;
    }

    let mut trend = TrendSeries {
        labels: Vec::with_capacity(head.len()),
        flowrate: Vec::with_capacity(head.len()),
        pressure: Vec::with_capacity(head.len()),
        temperature: Vec::with_capacity(head.len()),
    };
    for record in head {
        trend.labels.push(record.equipment_name.clone());
        trend.flowrate.push(record.flowrate);
        trend.pressure.push(record.pressure);
        trend.temperature.push(record.temperature);
    }

    ChartData::Ready(trend)
}
