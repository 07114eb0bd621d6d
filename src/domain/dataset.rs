//! Dataset - One uploaded CSV with its backend-computed summary

use chrono::{DateTime, Utc};
use hashlink::LinkedHashMap;
use serde::{Deserialize, Serialize};

use crate::domain::equipment::{EquipmentRecord, Parameter};
use crate::domain::timestamp;
use crate::error::{Error, Result};

/// Backend identifier of a dataset
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DatasetId(pub u64);

impl DatasetId {
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl From<u64> for DatasetId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for DatasetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Aggregates precomputed by the backend at upload time
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryStats {
    pub total_count: u64,
    pub avg_flowrate: Option<f64>,
    pub avg_pressure: Option<f64>,
    pub avg_temperature: Option<f64>,
    /// Type label -> record count, in backend order
    pub equipment_types: LinkedHashMap<String, u64>,
}

impl SummaryStats {
    /// Backend average for a parameter, if it was reported
    pub fn average(&self, parameter: Parameter) -> Option<f64> {
        let value = match parameter {
            Parameter::Flowrate => self.avg_flowrate,
            Parameter::Pressure => self.avg_pressure,
            Parameter::Temperature => self.avg_temperature,
        };
        value.filter(|v| v.is_finite())
    }
}

/// The unit of data the dashboard operates on
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub id: Option<DatasetId>,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default, deserialize_with = "timestamp::deserialize_option")]
    pub upload_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub row_count: Option<u64>,
    #[serde(default)]
    pub summary_stats: Option<SummaryStats>,
    /// Rows in upload order
    #[serde(default)]
    pub equipment_records: Vec<EquipmentRecord>,
}

impl Dataset {
    /// Build a dataset from bare records (no backend metadata)
    pub fn from_records(records: Vec<EquipmentRecord>) -> Self {
        Self {
            equipment_records: records,
            ..Default::default()
        }
    }

    pub fn records(&self) -> &[EquipmentRecord] {
        &self.equipment_records
    }

    pub fn is_empty(&self) -> bool {
        self.equipment_records.is_empty()
    }

    /// Label used in notices and headers
    pub fn display_name(&self) -> String {
        match (&self.filename, self.id) {
            (Some(name), Some(id)) => format!("{name} (#{id})"),
            (Some(name), None) => name.clone(),
            (None, Some(id)) => format!("Dataset #{id}"),
            (None, None) => "Untitled dataset".to_string(),
        }
    }

    /// Check every record carries finite measurements
    pub fn validate(&self) -> Result<()> {
        for (index, record) in self.equipment_records.iter().enumerate() {
            record.validate().map_err(|e| Error::Malformed {
                message: format!("record {index}: {e}"),
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DATASET_JSON: &str = r#"{
        "id": 3,
        "filename": "sample_equipment_data.csv",
        "upload_date": "2025-01-20T10:15:30.123456Z",
        "row_count": 2,
        "summary_stats": {
            "total_count": 2,
            "avg_flowrate": 150.0,
            "avg_pressure": 6.0,
            "avg_temperature": 100.0,
            "equipment_types": {"Reactor": 1, "Pump": 1}
        },
        "equipment_records": [
            {"id": 10, "equipment_name": "Reactor-1", "equipment_type": "Reactor", "flowrate": 200.0, "pressure": 7.0, "temperature": 120.0},
            {"id": 11, "equipment_name": "Pump-1", "equipment_type": "Pump", "flowrate": 100.0, "pressure": 5.0, "temperature": 80.0}
        ]
    }"#;

    #[test]
    fn deserializes_full_dataset() {
        let dataset: Dataset = serde_json::from_str(DATASET_JSON).expect("valid dataset");
        assert_eq!(dataset.id, Some(DatasetId(3)));
        assert_eq!(dataset.records().len(), 2);
        assert!(dataset.validate().is_ok());

        let stats = dataset.summary_stats.expect("summary present");
        let types: Vec<_> = stats.equipment_types.keys().cloned().collect();
        assert_eq!(types, vec!["Reactor", "Pump"]);
        assert_eq!(stats.average(Parameter::Pressure), Some(6.0));
    }

    #[test]
    fn naive_upload_date_is_read_as_utc() {
        let json = DATASET_JSON.replace("10:15:30.123456Z", "10:15:30.123456");
        let dataset: Dataset = serde_json::from_str(&json).expect("naive timestamp accepted");
        let expected: Dataset = serde_json::from_str(DATASET_JSON).expect("valid dataset");
        assert_eq!(dataset.upload_date, expected.upload_date);
        assert_eq!(dataset.records().len(), 2);
    }

    #[test]
    fn null_upload_date_is_none() {
        let dataset: Dataset =
            serde_json::from_str(r#"{"id": 1, "upload_date": null}"#).expect("null date");
        assert_eq!(dataset.upload_date, None);
    }

    #[test]
    fn missing_averages_are_none() {
        let stats: SummaryStats = serde_json::from_str(r#"{"total_count": 0}"#).expect("partial stats");
        assert_eq!(stats.average(Parameter::Flowrate), None);
        assert!(stats.equipment_types.is_empty());
    }

    #[test]
    fn records_default_to_empty() {
        let dataset: Dataset =
            serde_json::from_str(r#"{"id": 1, "filename": "a.csv"}"#).expect("bare dataset");
        assert!(dataset.is_empty());
        assert_eq!(dataset.display_name(), "a.csv (#1)");
    }
}
