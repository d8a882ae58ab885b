//! Task Record - one unit of observed or to-be-predicted work

use serde::{Deserialize, Serialize};

/// Barycentric coordinates of a task inside the category triangle.
///
/// A `Proportions` value always carries all three coordinates. Records
/// either have a complete triple or none at all, so a partially specified
/// triple can never reach the model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Proportions {
    a: f64,
    b: f64,
    c: f64,
}

impl Proportions {
    /// The degenerate triple used for tasks with no logged time.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Create a proportion triple.
    ///
    /// The values are stored as given; callers supplying their own
    /// coordinates are trusted to keep them on the simplex.
    #[must_use]
    pub const fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    /// Build a triple from three independently optional coordinates.
    ///
    /// Returns `None` unless all three are present.
    #[must_use]
    pub const fn from_parts(a: Option<f64>, b: Option<f64>, c: Option<f64>) -> Option<Self> {
        match (a, b, c) {
            (Some(a), Some(b), Some(c)) => Some(Self::new(a, b, c)),
            _ => None,
        }
    }

    /// Proportion of governance work.
    #[must_use]
    pub const fn a(&self) -> f64 {
        self.a
    }

    /// Proportion of platform work.
    #[must_use]
    pub const fn b(&self) -> f64 {
        self.b
    }

    /// Proportion of data-science work.
    #[must_use]
    pub const fn c(&self) -> f64 {
        self.c
    }

    /// Coordinates as an array, in category order.
    #[must_use]
    pub const fn to_array(self) -> [f64; 3] {
        [self.a, self.b, self.c]
    }

    /// Sum of the three coordinates.
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.a + self.b + self.c
    }
}

/// Task Record represents a single task, ticket or project instance.
///
/// Durations are in arbitrary but consistent units (e.g. hours). The three
/// categories are governance, platform and data-science work; the model
/// treats them symmetrically.
///
/// Records are immutable once built. Use [`crate::model::normalize`] to
/// obtain a copy with `total` and the proportion triple filled in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "TaskRecordWire", into = "TaskRecordWire")]
pub struct TaskRecord {
    id: Option<String>,
    duration_a: f64,
    duration_b: f64,
    duration_c: f64,
    total: Option<f64>,
    proportions: Option<Proportions>,
}

impl TaskRecord {
    /// Create a task record from raw durations only.
    #[must_use]
    pub const fn new(duration_a: f64, duration_b: f64, duration_c: f64) -> Self {
        Self {
            id: None,
            duration_a,
            duration_b,
            duration_c,
            total: None,
            proportions: None,
        }
    }

    /// Create a builder for constructing a task record with optional fields.
    #[must_use]
    pub const fn builder(duration_a: f64, duration_b: f64, duration_c: f64) -> TaskRecordBuilder {
        TaskRecordBuilder::new(duration_a, duration_b, duration_c)
    }

    /// Get the opaque task identifier, if any.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Time spent on governance work.
    #[must_use]
    pub const fn duration_a(&self) -> f64 {
        self.duration_a
    }

    /// Time spent on platform work.
    #[must_use]
    pub const fn duration_b(&self) -> f64 {
        self.duration_b
    }

    /// Time spent on data-science work.
    #[must_use]
    pub const fn duration_c(&self) -> f64 {
        self.duration_c
    }

    /// Sum of the three category durations.
    #[must_use]
    pub fn duration_sum(&self) -> f64 {
        self.duration_a + self.duration_b + self.duration_c
    }

    /// Recorded total time, if any.
    #[must_use]
    pub const fn total(&self) -> Option<f64> {
        self.total
    }

    /// Caller-supplied or derived proportions, if any.
    #[must_use]
    pub const fn proportions(&self) -> Option<Proportions> {
        self.proportions
    }

    pub(crate) fn with_derived(mut self, total: f64, proportions: Proportions) -> Self {
        self.total = Some(total);
        self.proportions = Some(proportions);
        self
    }
}

/// Builder for `TaskRecord`.
#[derive(Debug)]
pub struct TaskRecordBuilder {
    record: TaskRecord,
}

impl TaskRecordBuilder {
    /// Create a new builder with the required durations.
    #[must_use]
    pub const fn new(duration_a: f64, duration_b: f64, duration_c: f64) -> Self {
        Self {
            record: TaskRecord::new(duration_a, duration_b, duration_c),
        }
    }

    /// Set the task identifier.
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.record.id = Some(id.into());
        self
    }

    /// Set the observed total time.
    #[must_use]
    pub fn total(mut self, total: f64) -> Self {
        self.record.total = Some(total);
        self
    }

    /// Set a known proportion triple.
    #[must_use]
    pub fn proportions(mut self, proportions: Proportions) -> Self {
        self.record.proportions = Some(proportions);
        self
    }

    /// Build the `TaskRecord`.
    #[must_use]
    pub fn build(self) -> TaskRecord {
        self.record
    }
}

/// Flat field set exchanged with storage and the command surface.
///
/// Accepts the legacy column names of older task logs on input.
#[derive(Debug, Default, Serialize, Deserialize)]
pub(crate) struct TaskRecordWire {
    #[serde(default, alias = "task_id")]
    pub(crate) id: Option<String>,
    #[serde(default, alias = "T_gov")]
    pub(crate) duration_a: f64,
    #[serde(default, alias = "T_azure")]
    pub(crate) duration_b: f64,
    #[serde(default, alias = "T_ds")]
    pub(crate) duration_c: f64,
    #[serde(default, alias = "T_total")]
    pub(crate) total: Option<f64>,
    #[serde(default, alias = "p_gov")]
    pub(crate) proportion_a: Option<f64>,
    #[serde(default, alias = "p_azure")]
    pub(crate) proportion_b: Option<f64>,
    #[serde(default, alias = "p_ds")]
    pub(crate) proportion_c: Option<f64>,
}

impl From<TaskRecordWire> for TaskRecord {
    fn from(wire: TaskRecordWire) -> Self {
        let proportions =
            Proportions::from_parts(wire.proportion_a, wire.proportion_b, wire.proportion_c);
        let any_given = wire.proportion_a.is_some()
            || wire.proportion_b.is_some()
            || wire.proportion_c.is_some();
        if proportions.is_none() && any_given {
            tracing::debug!(
                id = wire.id.as_deref().unwrap_or(""),
                "partial proportion triple ignored, proportions will be derived from durations"
            );
        }

        Self {
            id: wire.id,
            duration_a: wire.duration_a,
            duration_b: wire.duration_b,
            duration_c: wire.duration_c,
            total: wire.total,
            proportions,
        }
    }
}

impl From<TaskRecord> for TaskRecordWire {
    fn from(record: TaskRecord) -> Self {
        let (proportion_a, proportion_b, proportion_c) = record
            .proportions
            .map_or((None, None, None), |p| (Some(p.a), Some(p.b), Some(p.c)));

        Self {
            id: record.id,
            duration_a: record.duration_a,
            duration_b: record.duration_b,
            duration_c: record.duration_c,
            total: record.total,
            proportion_a,
            proportion_b,
            proportion_c,
        }
    }
}
