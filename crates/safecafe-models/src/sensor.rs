//! Field sensor readings.

use crate::status::{SensorStatus, Trend};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// One field sensor as shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorReading {
    /// Stable identifier, e.g. `soil_humidity`.
    pub id: String,
    pub display_name: String,
    pub value: f64,
    /// Display unit (`%`, `°C`, `lux`).
    pub unit: String,
    pub status: SensorStatus,
    pub trend: Trend,
}

impl SensorReading {
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        value: f64,
        unit: impl Into<String>,
        status: SensorStatus,
        trend: Trend,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            value,
            unit: unit.into(),
            status,
            trend,
        }
    }

    /// Value with one decimal and its unit, e.g. `24.3°C`.
    pub fn formatted_value(&self) -> String {
        if self.unit == "%" || self.unit.starts_with('°') {
            format!("{:.1}{}", self.value, self.unit)
        } else {
            format!("{:.1} {}", self.value, self.unit)
        }
    }
}

/// Recent values for one sensor, oldest first.
#[derive(Debug, Clone, Default)]
pub struct ReadingHistory {
    values: VecDeque<f64>,
    capacity: usize,
}

impl ReadingHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            values: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a value, evicting the oldest once full.
    pub fn push(&mut self, value: f64) {
        if self.capacity == 0 {
            return;
        }
        if self.values.len() == self.capacity {
            self.values.pop_front();
        }
        self.values.push_back(value);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn latest(&self) -> Option<f64> {
        self.values.back().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &f64> {
        self.values.iter()
    }

    /// (min, max) over the retained window.
    pub fn bounds(&self) -> Option<(f64, f64)> {
        let mut it = self.values.iter().copied();
        let first = it.next()?;
        Some(it.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_evicts_oldest() {
        let mut h = ReadingHistory::new(3);
        for v in [1.0, 2.0, 3.0, 4.0] {
            h.push(v);
        }
        let kept: Vec<f64> = h.iter().copied().collect();
        assert_eq!(kept, vec![2.0, 3.0, 4.0]);
        assert_eq!(h.latest(), Some(4.0));
        assert_eq!(h.bounds(), Some((2.0, 4.0)));
    }

    #[test]
    fn test_zero_capacity_history_stays_empty() {
        let mut h = ReadingHistory::new(0);
        h.push(1.0);
        assert!(h.is_empty());
        assert_eq!(h.bounds(), None);
    }

    #[test]
    fn test_formatted_value_units() {
        let t = SensorReading::new("t", "Air Temperature", 24.26, "°C", SensorStatus::Normal, Trend::Up);
        assert_eq!(t.formatted_value(), "24.3°C");
        let l = SensorReading::new("l", "Light", 850.0, "lux", SensorStatus::Normal, Trend::Up);
        assert_eq!(l.formatted_value(), "850.0 lux");
    }
}
