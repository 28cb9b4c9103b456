//! Mock predictive-analysis records.
//!
//! These pair an image reference with a classification outcome. There is no
//! capture or inference pipeline behind them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Image shown when a record carries no image reference.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisKind {
    Leaf,
    Fruit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisStatus {
    Healthy,
    Diseased,
    Ready,
    NotReady,
}

impl AnalysisStatus {
    /// Healthy leaves and ripe fruit are the favourable outcomes.
    pub fn is_favourable(&self) -> bool {
        matches!(self, AnalysisStatus::Healthy | AnalysisStatus::Ready)
    }

    pub fn headline(&self) -> &'static str {
        match self {
            AnalysisStatus::Healthy => "Healthy Arabica",
            AnalysisStatus::Diseased => "Disease Detected",
            AnalysisStatus::Ready => "Arabica Ready",
            AnalysisStatus::NotReady => "Awaiting Ripening",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub id: String,
    pub kind: AnalysisKind,
    pub image: Option<String>,
    pub captured_at: DateTime<Utc>,
    /// Classifier confidence in percent.
    pub confidence: f64,
    pub status: AnalysisStatus,
    pub details: String,
    pub recommendations: Vec<String>,
    pub variety_note: Option<String>,
}

impl AnalysisResult {
    pub fn image_or_placeholder(&self) -> &str {
        match self.image.as_deref() {
            Some(img) if !img.trim().is_empty() => img,
            _ => PLACEHOLDER_IMAGE,
        }
    }
}

/// Aggregate counters displayed above the result lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisStats {
    pub total_analyses: u32,
    pub healthy_leaves: u32,
    pub diseased_leaves: u32,
    pub ready_fruits: u32,
    pub not_ready_fruits: u32,
    pub average_confidence: f64,
    pub quality_grade: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(image: Option<&str>) -> AnalysisResult {
        AnalysisResult {
            id: "x".into(),
            kind: AnalysisKind::Leaf,
            image: image.map(str::to_string),
            captured_at: Utc::now(),
            confidence: 90.0,
            status: AnalysisStatus::Healthy,
            details: String::new(),
            recommendations: vec![],
            variety_note: None,
        }
    }

    #[test]
    fn test_missing_or_blank_image_uses_placeholder() {
        assert_eq!(record(None).image_or_placeholder(), PLACEHOLDER_IMAGE);
        assert_eq!(record(Some("  ")).image_or_placeholder(), PLACEHOLDER_IMAGE);
        assert_eq!(record(Some("/leaf.png")).image_or_placeholder(), "/leaf.png");
    }

    #[test]
    fn test_favourable_outcomes() {
        assert!(AnalysisStatus::Healthy.is_favourable());
        assert!(AnalysisStatus::Ready.is_favourable());
        assert!(!AnalysisStatus::Diseased.is_favourable());
        assert!(!AnalysisStatus::NotReady.is_favourable());
    }
}
