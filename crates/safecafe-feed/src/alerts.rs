//! Alert lifecycle: active → resolved, one way only.

use crate::error::AlertError;
use safecafe_models::Alert;
use tracing::info;

/// Result of a resolve request that named a known alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveOutcome {
    Resolved,
    AlreadyResolved,
}

/// Alerts owned by one alerts view instance.
#[derive(Debug, Clone, Default)]
pub struct AlertBook {
    alerts: Vec<Alert>,
}

impl AlertBook {
    pub fn new(alerts: Vec<Alert>) -> Self {
        Self { alerts }
    }

    /// Mark alert `id` resolved. Resolving twice is a no-op.
    pub fn resolve(&mut self, id: &str) -> Result<ResolveOutcome, AlertError> {
        let alert = self
            .alerts
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| AlertError::NotFound(id.to_string()))?;

        if alert.resolved {
            return Ok(ResolveOutcome::AlreadyResolved);
        }
        alert.resolved = true;
        info!(alert_id = %id, title = %alert.title, "[ALERTS] Alert resolved");
        Ok(ResolveOutcome::Resolved)
    }

    pub fn get(&self, id: &str) -> Option<&Alert> {
        self.alerts.iter().find(|a| a.id == id)
    }

    pub fn all(&self) -> &[Alert] {
        &self.alerts
    }

    pub fn active(&self) -> impl Iterator<Item = &Alert> {
        self.alerts.iter().filter(|a| a.is_active())
    }

    pub fn resolved(&self) -> impl Iterator<Item = &Alert> {
        self.alerts.iter().filter(|a| !a.is_active())
    }

    pub fn active_count(&self) -> usize {
        self.active().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use safecafe_models::seed;

    fn book() -> AlertBook {
        AlertBook::new(seed::alerts(Utc::now()))
    }

    #[test]
    fn test_resolve_transitions_only_target() {
        let mut book = book();
        let before: Vec<bool> = book.all().iter().map(|a| a.resolved).collect();
        assert!(!book.get("2").unwrap().resolved);

        assert_eq!(book.resolve("2"), Ok(ResolveOutcome::Resolved));

        assert!(book.get("2").unwrap().resolved);
        for (alert, was) in book.all().iter().zip(before) {
            if alert.id != "2" {
                assert_eq!(alert.resolved, was);
            }
        }
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let mut book = book();
        book.resolve("1").unwrap();
        let snapshot = book.all().to_vec();
        assert_eq!(book.resolve("1"), Ok(ResolveOutcome::AlreadyResolved));
        assert_eq!(book.all(), snapshot.as_slice());
    }

    #[test]
    fn test_pre_resolved_seed_reports_already_resolved() {
        let mut book = book();
        assert_eq!(book.resolve("4"), Ok(ResolveOutcome::AlreadyResolved));
    }

    #[test]
    fn test_unknown_id_changes_nothing() {
        let mut book = book();
        let snapshot = book.all().to_vec();
        assert_eq!(book.resolve("99"), Err(AlertError::NotFound("99".into())));
        assert_eq!(book.all(), snapshot.as_slice());
    }

    #[test]
    fn test_partition_counts() {
        let mut book = book();
        assert_eq!(book.active_count(), 3);
        assert_eq!(book.resolved().count(), 1);
        book.resolve("3").unwrap();
        assert_eq!(book.active_count(), 2);
        assert_eq!(book.resolved().count(), 2);
        assert!(book.active().all(|a| a.is_active()));
        assert!(book.resolved().all(|a| !a.is_active()));
        assert_eq!(book.active_count() + book.resolved().count(), book.all().len());
    }
}
