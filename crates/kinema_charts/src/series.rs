//! Append-only sample storage for the chart feeds
//!
//! One run produces one [`SampleSet`]: a shared sequence of time labels and
//! three parallel scalar series. Appends happen at the cadence the simulation
//! controller enforces, so growth is bounded by wall-clock time rather than
//! frame rate. Reset clears everything in place.

/// A single labelled scalar series.
#[derive(Clone, Debug, Default)]
pub struct SampleSeries {
    name: String,
    values: Vec<f64>,
}

impl SampleSeries {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: Vec::new(),
        }
    }

    /// Validated construction from pre-existing parts.
    pub fn from_parts(name: impl Into<String>, values: Vec<f64>) -> anyhow::Result<Self> {
        anyhow::ensure!(
            values.iter().all(|v| v.is_finite()),
            "series values must be finite"
        );
        Ok(Self {
            name: name.into(),
            values,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Min/max over the series, or `None` while empty.
    pub fn y_min_max(&self) -> Option<(f64, f64)> {
        if self.values.is_empty() {
            return None;
        }
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &v in &self.values {
            min = min.min(v);
            max = max.max(v);
        }
        Some((min, max))
    }

    fn push(&mut self, value: f64) {
        self.values.push(value);
    }

    fn clear(&mut self) {
        self.values.clear();
    }
}

/// The three synchronized series of one simulation run, sharing one label
/// axis.
#[derive(Clone, Debug)]
pub struct SampleSet {
    labels: Vec<String>,
    position: SampleSeries,
    velocity: SampleSeries,
    acceleration: SampleSeries,
}

impl SampleSet {
    pub fn new() -> Self {
        Self {
            labels: Vec::new(),
            position: SampleSeries::new("position"),
            velocity: SampleSeries::new("velocity"),
            acceleration: SampleSeries::new("acceleration"),
        }
    }

    /// Append one sample across all three series.
    pub fn append(
        &mut self,
        label: impl Into<String>,
        position: f64,
        velocity: f64,
        acceleration: f64,
    ) {
        self.labels.push(label.into());
        self.position.push(position);
        self.velocity.push(velocity);
        self.acceleration.push(acceleration);
    }

    /// Drop all samples in place; capacity is kept for the next run.
    pub fn clear(&mut self) {
        self.labels.clear();
        self.position.clear();
        self.velocity.clear();
        self.acceleration.clear();
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn position(&self) -> &SampleSeries {
        &self.position
    }

    pub fn velocity(&self) -> &SampleSeries {
        &self.velocity
    }

    pub fn acceleration(&self) -> &SampleSeries {
        &self.acceleration
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl Default for SampleSet {
    fn default() -> Self {
        Self::new()
    }
}
