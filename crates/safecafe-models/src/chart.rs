//! Series for the 24h temperature and humidity charts.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    #[default]
    Temperature,
    Humidity,
}

impl ChartKind {
    pub fn toggle(self) -> Self {
        match self {
            ChartKind::Temperature => ChartKind::Humidity,
            ChartKind::Humidity => ChartKind::Temperature,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ChartKind::Temperature => "Temperature (24h)",
            ChartKind::Humidity => "Humidity (24h)",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            ChartKind::Temperature => "°C",
            ChartKind::Humidity => "%",
        }
    }
}

/// One hourly sample: the farm average plus three field stations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub hour: u32,
    pub value: f64,
    pub stations: [f64; 3],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub kind: ChartKind,
    pub points: Vec<ChartPoint>,
}

impl ChartSeries {
    /// (min, max) across the average and every station.
    pub fn bounds(&self) -> Option<(f64, f64)> {
        self.points
            .iter()
            .flat_map(|p| std::iter::once(p.value).chain(p.stations))
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((f64::min(lo, v), f64::max(hi, v))),
            })
    }
}
