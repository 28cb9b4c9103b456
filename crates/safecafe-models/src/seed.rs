//! Hard-coded initial records used in place of real sensor and backend input.

use crate::alert::Alert;
use crate::analysis::{AnalysisKind, AnalysisResult, AnalysisStats, AnalysisStatus};
use crate::market::MarketPrice;
use crate::sensor::SensorReading;
use crate::status::{AlertSeverity, SensorStatus, Trend};
use chrono::{DateTime, Duration, Utc};

pub fn sensors() -> Vec<SensorReading> {
    vec![
        SensorReading::new("soil_humidity", "Soil Humidity", 65.0, "%", SensorStatus::Normal, Trend::Stable),
        SensorReading::new("temperature", "Air Temperature", 24.0, "°C", SensorStatus::Normal, Trend::Up),
        SensorReading::new("air_humidity", "Air Humidity", 78.0, "%", SensorStatus::Warning, Trend::Down),
        SensorReading::new("light_intensity", "Light Intensity", 850.0, "lux", SensorStatus::Normal, Trend::Up),
    ]
}

pub fn markets(now: DateTime<Utc>) -> Vec<MarketPrice> {
    let quote = |market: &str, price: f64, change: f64, change_pct: f64, currency: &str, unit: &str| {
        MarketPrice {
            market: market.to_string(),
            price,
            change,
            change_pct,
            currency: currency.to_string(),
            unit: unit.to_string(),
            last_update: now,
        }
    };
    vec![
        quote("ICE Arabica", 168.45, 2.35, 1.41, "USD", "¢/lb"),
        quote("BMF Santos", 892.5, -5.25, -0.58, "BRL", "R$/sc"),
        quote("LIFFE Robusta", 2245.0, 15.0, 0.67, "USD", "$/ton"),
    ]
}

/// Seeded alerts. All start active except the scheduled-irrigation notice.
pub fn alerts(now: DateTime<Utc>) -> Vec<Alert> {
    let alert = |id: &str, severity, title: &str, description: &str, age: Duration, resolved| Alert {
        id: id.to_string(),
        severity,
        title: title.to_string(),
        description: description.to_string(),
        created_at: now - age,
        resolved,
    };
    vec![
        alert(
            "1",
            AlertSeverity::Alert,
            "Low Soil Humidity",
            "Soil humidity is at 35%, below the recommended minimum of 50%",
            Duration::minutes(30),
            false,
        ),
        alert(
            "2",
            AlertSeverity::Warning,
            "High Temperature",
            "Air temperature reached 32°C, monitor to avoid plant stress",
            Duration::hours(2),
            false,
        ),
        alert(
            "3",
            AlertSeverity::Alert,
            "Possible Pest Detected",
            "Suspicious patterns detected on coffee leaves in sector B",
            Duration::hours(4),
            false,
        ),
        alert(
            "4",
            AlertSeverity::Info,
            "Irrigation Scheduled",
            "Irrigation system will switch on at 18:00",
            Duration::hours(6),
            true,
        ),
    ]
}

pub fn analysis_results(now: DateTime<Utc>) -> Vec<AnalysisResult> {
    let owned = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();
    vec![
        AnalysisResult {
            id: "1".into(),
            kind: AnalysisKind::Leaf,
            image: Some("/placeholder.svg?height=200&width=200&text=Healthy+Arabica+Leaf".into()),
            captured_at: now - Duration::minutes(30),
            confidence: 94.5,
            status: AnalysisStatus::Healthy,
            details: "Healthy Coffea arabica leaf with no signs of disease".into(),
            recommendations: owned(&["Keep irrigation controlled", "Monitor weekly"]),
            variety_note: Some("Typical Arabica leaves with deep green colouring".into()),
        },
        AnalysisResult {
            id: "2".into(),
            kind: AnalysisKind::Leaf,
            image: Some("/placeholder.svg?height=200&width=200&text=Arabica+Leaf+Rust".into()),
            captured_at: now - Duration::hours(2),
            confidence: 87.2,
            status: AnalysisStatus::Diseased,
            details: "Coffee leaf rust (Hemileia vastatrix) detected, common in Arabica".into(),
            recommendations: owned(&[
                "Apply an Arabica-specific fungicide",
                "Improve ventilation",
                "Reduce leaf moisture",
            ]),
            variety_note: Some("Arabica is more susceptible to leaf rust than other varieties".into()),
        },
        AnalysisResult {
            id: "3".into(),
            kind: AnalysisKind::Fruit,
            image: Some("/placeholder.svg?height=200&width=200&text=Ripe+Arabica+Cherry".into()),
            captured_at: now - Duration::hours(4),
            confidence: 91.8,
            status: AnalysisStatus::Ready,
            details: "Arabica cherries at the ideal point, deep red colour".into(),
            recommendations: owned(&["Start selective harvest", "Process within 12h to keep quality"]),
            variety_note: Some("Ripe Arabica cherries yield a high-quality cup".into()),
        },
        AnalysisResult {
            id: "4".into(),
            kind: AnalysisKind::Fruit,
            image: Some("/placeholder.svg?height=200&width=200&text=Green+Arabica".into()),
            captured_at: now - Duration::hours(6),
            confidence: 89.3,
            status: AnalysisStatus::NotReady,
            details: "Arabica cherries still green, wait for full ripening".into(),
            recommendations: owned(&["Wait 3-4 weeks", "Monitor the gradual colour change"]),
            variety_note: Some("Arabica ripens slowly but produces better quality".into()),
        },
    ]
}

pub fn analysis_stats() -> AnalysisStats {
    AnalysisStats {
        total_analyses: 156,
        healthy_leaves: 89,
        diseased_leaves: 12,
        ready_fruits: 34,
        not_ready_fruits: 21,
        average_confidence: 91.2,
        quality_grade: "Premium".into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_one_alert_starts_resolved() {
        let alerts = alerts(Utc::now());
        let resolved: Vec<_> = alerts.iter().filter(|a| a.resolved).map(|a| a.id.as_str()).collect();
        assert_eq!(resolved, vec!["4"]);
    }

    #[test]
    fn test_seed_sizes() {
        assert_eq!(sensors().len(), 4);
        assert_eq!(markets(Utc::now()).len(), 3);
        assert_eq!(analysis_results(Utc::now()).len(), 4);
    }

    #[test]
    fn test_seed_ids_unique() {
        let s = sensors();
        let mut ids: Vec<_> = s.iter().map(|r| r.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), s.len());
    }
}
