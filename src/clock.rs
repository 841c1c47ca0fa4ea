use chrono::{Duration, Local, NaiveDateTime};

/// Chart buckets are wall-clock minutes
pub const LABEL_FORMAT: &str = "%H:%M";

/// Minutes between the zero-value points the chart starts with
pub const SEED_SPACING_MINUTES: i64 = 5;

/// Supplies the bucket label for the current tick
pub trait LabelSource {
    fn now_label(&mut self) -> String;
}

impl<F> LabelSource for F
where
    F: FnMut() -> String,
{
    fn now_label(&mut self) -> String {
        self()
    }
}

/// Production label source using the local wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl LabelSource for LocalClock {
    fn now_label(&mut self) -> String {
        format_label(Local::now().naive_local())
    }
}

impl LocalClock {
    pub fn seed_labels(&self, count: usize) -> Vec<String> {
        seed_labels(Local::now().naive_local(), count)
    }
}

pub fn format_label(at: NaiveDateTime) -> String {
    at.format(LABEL_FORMAT).to_string()
}

/// `count` labels ending at `now`, oldest first, spaced five minutes apart
pub fn seed_labels(now: NaiveDateTime, count: usize) -> Vec<String> {
    (0..count as i64)
        .rev()
        .map(|i| format_label(now - Duration::minutes(i * SEED_SPACING_MINUTES)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 1)
            .and_then(|d| d.and_hms_opt(h, m, 30))
            .unwrap()
    }

    #[test]
    fn test_format_label() {
        assert_eq!(format_label(at(9, 5)), "09:05");
        assert_eq!(format_label(at(23, 59)), "23:59");
    }

    #[test]
    fn test_seed_labels_are_oldest_first() {
        assert_eq!(
            seed_labels(at(14, 32), 6),
            vec!["14:07", "14:12", "14:17", "14:22", "14:27", "14:32"]
        );
    }

    #[test]
    fn test_seed_labels_cross_midnight() {
        assert_eq!(seed_labels(at(0, 3), 2), vec!["23:58", "00:03"]);
    }

    #[test]
    fn test_closure_is_a_label_source() {
        let mut n = 0;
        let mut source = || {
            n += 1;
            format!("t{n}")
        };
        assert_eq!(source.now_label(), "t1");
        assert_eq!(source.now_label(), "t2");
    }

    #[test]
    fn test_local_clock_label_shape() {
        let label = LocalClock.now_label();
        assert_eq!(label.len(), 5);
        assert_eq!(&label[2..3], ":");
        assert_eq!(LocalClock.seed_labels(6).len(), 6);
    }
}
