//! Type distribution (pie chart input)

use hashlink::LinkedHashMap;

use super::ChartData;
use crate::domain::EquipmentRecord;

/// Occurrence count per equipment type, in order of first appearance
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TypeDistribution {
    counts: LinkedHashMap<String, usize>,
}

impl TypeDistribution {
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn get(&self, equipment_type: &str) -> Option<usize> {
        self.counts.get(equipment_type).copied()
    }

    /// (type, count) pairs in legend order
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn labels(&self) -> Vec<&str> {
        self.counts.keys().map(String::as_str).collect()
    }

    pub fn counts(&self) -> Vec<usize> {
        self.counts.values().copied().collect()
    }

    /// Sum of all counts, equal to the number of records
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Percentage of records with the given type
    pub fn share(&self, equipment_type: &str) -> Option<f64> {
        let total = self.total();
        if total == 0 {
            return None;
        }
        self.get(equipment_type)
            .map(|count| count as f64 * 100.0 / total as f64)
    }
}

/// Count records per type in a single pass
pub fn type_distribution(records: &[EquipmentRecord]) -> ChartData<TypeDistribution> {
    if records.is_empty() {
        return ChartData::NoData;
    }

    let mut counts: LinkedHashMap<String, usize> = LinkedHashMap::new();
    for record in records {
        match counts.get_mut(&record.equipment_type) {
            Some(count) => *count += 1,
            None => {
                counts.insert(record.equipment_type.clone(), 1);
            }
        }
    }

    ChartData::Ready(TypeDistribution { counts })
}
