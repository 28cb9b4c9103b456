//! Synthetic 24h history for the sensor charts.

use crate::config::FeedConfig;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use safecafe_models::{ChartKind, ChartPoint, ChartSeries};

/// Shape of one curve: `base + sin(hour * freq) * amp + uniform(0, 1) * noise`.
#[derive(Debug, Clone, Copy)]
struct Curve {
    base: f64,
    freq: f64,
    amp: f64,
    noise: f64,
}

impl Curve {
    const fn new(base: f64, freq: f64, amp: f64, noise: f64) -> Self {
        Self {
            base,
            freq,
            amp,
            noise,
        }
    }

    fn sample<R: Rng + ?Sized>(&self, hour: u32, rng: &mut R) -> f64 {
        self.base + (hour as f64 * self.freq).sin() * self.amp + rng.gen::<f64>() * self.noise
    }
}

const TEMPERATURE: [Curve; 4] = [
    Curve::new(22.0, 0.3, 3.0, 1.5),
    Curve::new(21.5, 0.25, 2.8, 0.8),
    Curve::new(22.8, 0.35, 3.2, 0.9),
    Curve::new(21.2, 0.28, 2.5, 0.7),
];

const HUMIDITY: [Curve; 4] = [
    Curve::new(65.0, 0.2, 8.0, 3.0),
    Curve::new(68.0, 0.18, 7.0, 2.5),
    Curve::new(62.0, 0.22, 9.0, 3.2),
    Curve::new(70.0, 0.25, 6.0, 2.8),
];

pub const HOURS: u32 = 24;

/// Generate one hourly series: the farm average plus three field stations.
pub fn generate_series<R: Rng + ?Sized>(kind: ChartKind, rng: &mut R) -> ChartSeries {
    let curves = match kind {
        ChartKind::Temperature => &TEMPERATURE,
        ChartKind::Humidity => &HUMIDITY,
    };
    let points = (0..HOURS)
        .map(|hour| ChartPoint {
            hour,
            value: curves[0].sample(hour, rng),
            stations: [
                curves[1].sample(hour, rng),
                curves[2].sample(hour, rng),
                curves[3].sample(hour, rng),
            ],
        })
        .collect();
    ChartSeries { kind, points }
}

/// Temperature and humidity series for one dashboard instance.
pub fn daily_charts(config: &FeedConfig) -> (ChartSeries, ChartSeries) {
    let mut rng = match config.task_seed(3) {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };
    (
        generate_series(ChartKind::Temperature, &mut rng),
        generate_series(ChartKind::Humidity, &mut rng),
    )
}
