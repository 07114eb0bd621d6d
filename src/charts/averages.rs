//! Per-type parameter averages (grouped bar chart input)

use hashlink::LinkedHashMap;

use super::ChartData;
use crate::domain::{EquipmentRecord, Parameter};

/// Mean measurements of one equipment type
#[derive(Debug, Clone, PartialEq)]
pub struct TypeAverage {
    pub equipment_type: String,
    /// Number of records averaged, always at least 1
    pub count: usize,
    pub flowrate: f64,
    pub pressure: f64,
    pub temperature: f64,
}

impl TypeAverage {
    pub fn value(&self, parameter: Parameter) -> f64 {
        match parameter {
            Parameter::Flowrate => self.flowrate,
            Parameter::Pressure => self.pressure,
            Parameter::Temperature => self.temperature,
        }
    }
}

/// Averages for every type, in order of first appearance
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TypeAverages {
    entries: Vec<TypeAverage>,
}

impl TypeAverages {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TypeAverage> {
        self.entries.iter()
    }

    pub fn get(&self, equipment_type: &str) -> Option<&TypeAverage> {
        self.entries.iter().find(|e| e.equipment_type == equipment_type)
    }

    pub fn labels(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.equipment_type.as_str()).collect()
    }

    /// One bar series: the given parameter across all types
    pub fn series(&self, parameter: Parameter) -> Vec<f64> {
        self.entries.iter().map(|e| e.value(parameter)).collect()
    }
}

#[derive(Default)]
struct Sums {
    count: usize,
    flowrate: f64,
    pressure: f64,
    temperature: f64,
}

impl Sums {
    fn add(&mut self, record: &EquipmentRecord) {
        self.count += 1;
        self.flowrate += record.flowrate;
        self.pressure += record.pressure;
        self.temperature += record.temperature;
    }
}

/// Arithmetic mean of each parameter per type
pub fn type_averages(records: &[EquipmentRecord]) -> ChartData<TypeAverages> {
    if records.is_empty() {
        return ChartData::NoData;
    }

    let mut sums: LinkedHashMap<&str, Sums> = LinkedHashMap::new();
    for record in records {
        match sums.get_mut(record.equipment_type.as_str()) {
            Some(entry) => entry.add(record),
            None => {
                let mut entry = Sums::default();
                entry.add(record);
                sums.insert(record.equipment_type.as_str(), entry);
            }
        }
    }

    // A type only exists because a record carried it, so count >= 1
    let entries = sums
        .into_iter()
        .map(|(equipment_type, s)| {
            let n = s.count as f64;
            TypeAverage {
                equipment_type: equipment_type.to_string(),
                count: s.count,
                flowrate: s.flowrate / n,
                pressure: s.pressure / n,
                temperature: s.temperature / n,
            }
        })
        .collect();

    ChartData::Ready(TypeAverages { entries })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::fixtures::mixed_records;
    use crate::charts::type_distribution;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn averages_match_hand_computed_fixture() {
        let records = vec![
            EquipmentRecord::new("Pump-1", "Pump", 120.0, 5.0, 110.0),
            EquipmentRecord::new("Valve-1", "Valve", 60.0, 4.0, 90.0),
            EquipmentRecord::new("Pump-2", "Pump", 80.0, 7.0, 100.0),
            EquipmentRecord::new("Pump-3", "Pump", 100.0, 6.0, 120.0),
        ];

        let averages = type_averages(&records);
        let averages = averages.ready().expect("non-empty");
        assert_eq!(averages.labels(), vec!["Pump", "Valve"]);

        let pump = averages.get("Pump").expect("pump");
        assert_eq!(pump.count, 3);
        assert_close(pump.flowrate, 100.0);
        assert_close(pump.pressure, 6.0);
        assert_close(pump.temperature, 110.0);

        let valve = averages.get("Valve").expect("valve");
        assert_eq!(valve.count, 1);
        assert_close(valve.flowrate, 60.0);
        assert_close(valve.pressure, 4.0);
        assert_close(valve.temperature, 90.0);
    }

    #[test]
    fn labels_follow_distribution_order() {
        let records = vec![
            EquipmentRecord::new("Pump-1", "Pump", 1.0, 1.0, 1.0),
            EquipmentRecord::new("Valve-1", "Valve", 2.0, 2.0, 2.0),
            EquipmentRecord::new("Pump-2", "Pump", 3.0, 3.0, 3.0),
        ];

        let averages = type_averages(&records);
        let distribution = type_distribution(&records);
        assert_eq!(
            averages.ready().expect("averages").labels(),
            distribution.ready().expect("distribution").labels()
        );
        assert_eq!(averages.ready().expect("averages").labels(), vec!["Pump", "Valve"]);
    }

    #[test]
    fn averages_over_mixed_fixture() {
        let averages = type_averages(&mixed_records());
        let averages = averages.ready().expect("non-empty");

        let pump = averages.get("Pump").expect("pump");
        assert_close(pump.flowrate, 111.0);
        assert_close(pump.pressure, 11.1);
        assert_close(pump.temperature, 120.0);

        let reactor = averages.get("Reactor").expect("reactor");
        assert_eq!(reactor.count, 5);
        assert_close(reactor.flowrate, 214.0);
        assert_close(reactor.pressure, 21.4);

        let flowrates = averages.series(Parameter::Flowrate);
        assert_eq!(flowrates.len(), 3);
        assert_close(flowrates[1], 62.0);
    }
}
