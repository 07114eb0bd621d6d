//! Equipment - One measured asset

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A measured parameter of an equipment record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parameter {
    /// Flowrate (L/min)
    Flowrate,
    /// Pressure (bar)
    Pressure,
    /// Temperature (°C)
    Temperature,
}

impl Parameter {
    /// All parameters in display order
    pub const ALL: [Parameter; 3] = [
        Parameter::Flowrate,
        Parameter::Pressure,
        Parameter::Temperature,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Parameter::Flowrate => "Flowrate",
            Parameter::Pressure => "Pressure",
            Parameter::Temperature => "Temperature",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Parameter::Flowrate => "L/min",
            Parameter::Pressure => "bar",
            Parameter::Temperature => "°C",
        }
    }
}

/// One row of an uploaded CSV
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentRecord {
    /// Backend row identifier
    #[serde(default)]
    pub id: Option<u64>,
    /// Display name, not unique
    pub equipment_name: String,
    /// Categorical type label
    pub equipment_type: String,
    /// Flowrate (L/min)
    pub flowrate: f64,
    /// Pressure (bar)
    pub pressure: f64,
    /// Temperature (°C)
    pub temperature: f64,
}

impl EquipmentRecord {
    /// Create a record without a backend id
    pub fn new(
        name: impl Into<String>,
        equipment_type: impl Into<String>,
        flowrate: f64,
        pressure: f64,
        temperature: f64,
    ) -> Self {
        Self {
            id: None,
            equipment_name: name.into(),
            equipment_type: equipment_type.into(),
            flowrate,
            pressure,
            temperature,
        }
    }

    /// Value of a single parameter
    pub fn value(&self, parameter: Parameter) -> f64 {
        match parameter {
            Parameter::Flowrate => self.flowrate,
            Parameter::Pressure => self.pressure,
            Parameter::Temperature => self.temperature,
        }
    }

    /// Stable key for table rows, falling back to the row position
    pub fn row_key(&self, position: usize) -> u64 {
        self.id.unwrap_or(position as u64)
    }

    /// Reject NaN or infinite measurements
    pub fn validate(&self) -> Result<()> {
        for parameter in Parameter::ALL {
            let value = self.value(parameter);
            if !value.is_finite() {
                return Err(Error::Malformed {
                    message: format!(
                        "{} of '{}' is not a finite number ({value})",
                        parameter.label().to_lowercase(),
                        self.equipment_name
                    ),
                });
            }
        }
        Ok(())
    }
}
