//! Charts - Text rendering of the three overview charts

use std::fmt::Write;

use crate::charts::{ChartData, ChartSet, TrendSeries, TypeAverages, TypeDistribution};
use crate::domain::Parameter;
use crate::utils::format::{format_measurement, truncate};

pub const NO_CHART_DATA: &str = "No data available for charts";

/// Width of the label column
const LABEL_WIDTH: usize = 20;

/// Render all charts, or the placeholder
pub fn render_charts(charts: &ChartData<ChartSet>) -> String {
    match charts {
        ChartData::NoData => format!("{NO_CHART_DATA}\n"),
        ChartData::Ready(set) => {
            let mut out = render_distribution(&set.distribution);
            out.push('\n');
            out.push_str(&render_averages(&set.averages));
            out.push('\n');
            out.push_str(&render_trend(&set.trend));
            out
        }
    }
}

pub fn render_distribution(distribution: &TypeDistribution) -> String {
    let mut out = String::from("Equipment Type Distribution\n");
    for (kind, count) in distribution.iter() {
        let share = distribution.share(kind).unwrap_or_default();
        let _ = writeln!(
            out,
            "  {:<LABEL_WIDTH$} {count:>5} ({share:.1}%)",
            truncate(kind, LABEL_WIDTH)
        );
    }
    out
}

pub fn render_averages(averages: &TypeAverages) -> String {
    let mut out = String::from("Average Parameters by Equipment Type\n");
    let _ = write!(out, "  {:<LABEL_WIDTH$}", "Type");
    for parameter in Parameter::ALL {
        let _ = write!(out, " {:>18}", header(parameter));
    }
    out.push('\n');
    for average in averages.iter() {
        let _ = write!(
            out,
            "  {:<LABEL_WIDTH$}",
            truncate(&average.equipment_type, LABEL_WIDTH)
        );
        for parameter in Parameter::ALL {
            let _ = write!(out, " {:>18}", format_measurement(average.value(parameter)));
        }
        out.push('\n');
    }
    out
}

pub fn render_trend(trend: &TrendSeries) -> String {
    let mut out = format!("Parameter Trends (First {} Items)\n", trend.len());
    let _ = write!(out, "  {:<LABEL_WIDTH$}", "Equipment");
    for parameter in Parameter::ALL {
        let _ = write!(out, " {:>18}", header(parameter));
    }
    out.push('\n');
    for (index, label) in trend.labels.iter().enumerate() {
        let _ = write!(out, "  {:<LABEL_WIDTH$}", truncate(label, LABEL_WIDTH));
        for parameter in Parameter::ALL {
            let value = trend.series(parameter)[index];
            let _ = write!(out, " {:>18}", format_measurement(value));
        }
        out.push('\n');
    }
    out
}

fn header(parameter: Parameter) -> String {
    format!("{} ({})", parameter.label(), parameter.unit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::fixtures::mixed_records;
    use crate::domain::EquipmentRecord;

    #[test]
    fn placeholder_for_no_data() {
        assert_eq!(render_charts(&ChartData::NoData).trim_end(), NO_CHART_DATA);
    }

    #[test]
    fn renders_every_section() {
        let text = render_charts(&ChartSet::derive(&mixed_records()));

        assert!(text.contains("Equipment Type Distribution"));
        assert!(text.contains("(40.0%)"));
        assert!(text.contains("(20.0%)"));
        assert!(text.contains("Average Parameters by Equipment Type"));
        assert!(text.contains("Parameter Trends (First 20 Items)"));
        // Records beyond the trend limit are not listed
        assert!(text.contains("Pump-1 "));
        assert!(!text.contains("Pump-21"));
    }

    #[test]
    fn types_keep_first_appearance_order() {
        let records = vec![
            EquipmentRecord::new("Pump-1", "Pump", 1.0, 1.0, 1.0),
            EquipmentRecord::new("Valve-1", "Valve", 2.0, 2.0, 2.0),
            EquipmentRecord::new("Pump-2", "Pump", 3.0, 3.0, 3.0),
        ];
        let set = ChartSet::derive(&records);
        let set = set.ready().expect("charts");

        for section in [
            render_distribution(&set.distribution),
            render_averages(&set.averages),
        ] {
            let pump = section.find("  Pump").expect("pump row");
            let valve = section.find("  Valve").expect("valve row");
            assert!(pump < valve, "wrong order in:\n{section}");
        }
    }
}
