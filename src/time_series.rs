/// Number of points kept on the study chart
pub const SERIES_CAPACITY: usize = 10;

/// Number of zero-value points the chart starts with
pub const SEED_POINTS: usize = 6;

#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPoint {
    pub label: String,
    pub value: f64,
}

impl SeriesPoint {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// What a [`RollingSeriesBuffer::tick`] did with the incoming sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickKind {
    /// Same bucket as the last point; its value was overwritten
    Amended,
    /// New bucket; a point was appended (and possibly the oldest evicted)
    Appended,
}

/// Fixed-capacity window of labelled samples, oldest first.
///
/// Ticks within the same label bucket refine the newest point instead of
/// adding one, so storage stays at `capacity` however long the session runs.
#[derive(Debug, Clone, PartialEq)]
pub struct RollingSeriesBuffer {
    samples: Vec<SeriesPoint>,
    capacity: usize,
}

impl RollingSeriesBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            samples: Vec::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Buffer pre-filled with zero-value points under the given labels
    pub fn seeded<I, S>(labels: I, capacity: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut buffer = Self::new(capacity);
        for label in labels {
            buffer.samples.push(SeriesPoint::new(label, 0.0));
        }
        buffer.evict_overflow();
        buffer
    }

    pub fn tick(&mut self, label: &str, value: f64) -> &[SeriesPoint] {
        self.push(label, value);
        self.samples()
    }

    /// Same as [`tick`](Self::tick) but reports which branch was taken
    pub fn push(&mut self, label: &str, value: f64) -> TickKind {
        let same_bucket = self.samples.last().is_some_and(|last| last.label == label);
        let kind = if same_bucket {
            if let Some(last) = self.samples.last_mut() {
                last.value = value;
            }
            TickKind::Amended
        } else {
            self.samples.push(SeriesPoint::new(label, value));
            TickKind::Appended
        };
        self.evict_overflow();
        kind
    }

    fn evict_overflow(&mut self) {
        if self.samples.len() > self.capacity {
            let excess = self.samples.len() - self.capacity;
            self.samples.drain(..excess);
        }
    }

    pub fn samples(&self) -> &[SeriesPoint] {
        &self.samples
    }

    pub fn iter(&self) -> impl Iterator<Item = &SeriesPoint> {
        self.samples.iter()
    }

    pub fn last(&self) -> Option<&SeriesPoint> {
        self.samples.last()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Highest value in the window, never below 1.0 so the y axis has a span
    pub fn max_value(&self) -> f64 {
        self.samples
            .iter()
            .map(|p| p.value)
            .fold(1.0_f64, f64::max)
    }

    /// Points as (index, value) pairs for plotting
    pub fn plot_points(&self) -> Vec<(f64, f64)> {
        self.samples
            .iter()
            .enumerate()
            .map(|(i, p)| (i as f64, p.value))
            .collect()
    }
}

impl Default for RollingSeriesBuffer {
    fn default() -> Self {
        Self::new(SERIES_CAPACITY)
    }
}
