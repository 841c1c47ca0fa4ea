use crate::time_series::RollingSeriesBuffer;

/// Compute X (point index) and Y (minutes) upper bounds for the study chart
pub fn compute_chart_params(series: &RollingSeriesBuffer) -> (f64, f64) {
    let x_max = (series.len().saturating_sub(1) as f64).max(1.0);
    let y_max = series.max_value().ceil();
    (x_max, y_max)
}

/// First and last bucket labels for the X axis
pub fn edge_labels(series: &RollingSeriesBuffer) -> (String, String) {
    let first = series.iter().next().map(|p| p.label.clone());
    let last = series.last().map(|p| p.label.clone());
    (first.unwrap_or_default(), last.unwrap_or_default())
}

/// Format a simple numeric label consistently
pub fn format_label(val: f64) -> String {
    if (val - val.round()).abs() < f64::EPSILON {
        format!("{}", val.round())
    } else {
        format!("{val:.2}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_chart_params_empty() {
        let series = RollingSeriesBuffer::default();
        assert_eq!(compute_chart_params(&series), (1.0, 1.0));
    }

    #[test]
    fn test_compute_chart_params_rounds_up() {
        let mut series = RollingSeriesBuffer::default();
        series.tick("a", 0.0);
        series.tick("b", 2.3);
        series.tick("c", 4.02);
        assert_eq!(compute_chart_params(&series), (2.0, 5.0));
    }

    #[test]
    fn test_edge_labels() {
        let mut series = RollingSeriesBuffer::default();
        assert_eq!(edge_labels(&series), (String::new(), String::new()));
        series.tick("10:00", 0.0);
        series.tick("10:05", 1.0);
        assert_eq!(edge_labels(&series), ("10:00".into(), "10:05".into()));
    }

    #[test]
    fn test_format_label() {
        assert_eq!(format_label(1.0), "1");
        assert_eq!(format_label(1.2345), "1.23");
    }
}
