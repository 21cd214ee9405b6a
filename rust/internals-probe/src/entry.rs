/// A single key/value pair read from a store or from the cookie header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// The key, unique within one snapshot
    pub key: String,
    /// The value (empty when the host reported none)
    pub value: String,
    /// UTF-8 byte length of `value`; tracked for storage areas, not cookies
    pub size: Option<usize>,
}

impl Entry {
    /// Create an entry whose size is tracked.
    pub fn sized(key: impl Into<String>, value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            key: key.into(),
            size: Some(crate::bytes_for_string(&value)),
            value,
        }
    }

    /// Create an entry without a size.
    pub fn without_size(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            size: None,
        }
    }
}

/// Aggregates shown in the header of a key/value table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    /// Number of entries in the snapshot
    pub items: usize,
    /// Sum of entry sizes, or 0 when sizes are not tracked
    pub bytes: usize,
}

impl Totals {
    /// Compute totals over a snapshot.
    pub fn of(entries: &[Entry], track_sizes: bool) -> Self {
        let bytes = if track_sizes {
            entries.iter().filter_map(|entry| entry.size).sum()
        } else {
            0
        };

        Self {
            items: entries.len(),
            bytes,
        }
    }
}

/// A display-only label/value row.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricItem {
    /// Row label
    pub label: String,
    /// Row value, already formatted
    pub value: String,
    /// Whether the value is visually emphasized
    pub accent: bool,
    /// Optional status indicator shown before the value
    pub dot: Option<bool>,
}

impl MetricItem {
    /// A plain row.
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            accent: false,
            dot: None,
        }
    }

    /// Mark the value as emphasized.
    pub fn accent(mut self) -> Self {
        self.accent = true;
        self
    }

    /// Attach a status indicator.
    pub fn dot(mut self, on: bool) -> Self {
        self.dot = Some(on);
        self
    }
}

/// A non-negative duration derived from navigation or paint timing.
#[derive(Debug, Clone, PartialEq)]
pub struct PerformanceMetric {
    /// Human readable label
    pub label: String,
    /// Duration in milliseconds, never negative
    pub value_ms: f64,
}

impl PerformanceMetric {
    /// Create a metric, clamping the value at zero.
    pub fn new(label: impl Into<String>, value_ms: f64) -> Self {
        Self {
            label: label.into(),
            value_ms: if value_ms.is_nan() { 0.0 } else { value_ms.max(0.0) },
        }
    }
}
