//! Team Workload
//!
//! Assigned vs available weekly hours per person. Assignment lists are
//! fetched with bounded concurrency; one failing person never aborts the rest.

use std::future::Future;

use futures::stream::{self, StreamExt};

use crate::error::ApiError;
use crate::models::{Assignment, ManPower};

pub const DEFAULT_WEEKLY_HOURS: f64 = 40.0;

/// Utilization band used to color the assigned-hours bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UtilizationLevel {
    /// <= 80 %
    Normal,
    /// (80, 100] %
    High,
    /// > 100 %
    Over,
}

impl UtilizationLevel {
    pub fn classify(utilization: f64) -> Self {
        if utilization > 100.0 {
            UtilizationLevel::Over
        } else if utilization > 80.0 {
            UtilizationLevel::High
        } else {
            UtilizationLevel::Normal
        }
    }

    pub fn fill_color(self) -> &'static str {
        match self {
            UtilizationLevel::Over => "rgba(211, 47, 47, 0.8)",
            UtilizationLevel::High => "rgba(255, 193, 7, 0.8)",
            UtilizationLevel::Normal => "rgba(40, 167, 69, 0.8)",
        }
    }

    pub fn border_color(self) -> &'static str {
        match self {
            UtilizationLevel::Over => "#D32F2F",
            UtilizationLevel::High => "#ffc107",
            UtilizationLevel::Normal => "#28a745",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WorkloadEntry {
    pub name: String,
    pub available_hours: f64,
    pub assigned_hours: f64,
    /// Percent of available hours, not clamped
    pub utilization: f64,
    /// Assignment list could not be loaded; assigned hours read as zero
    pub failed: bool,
}

impl WorkloadEntry {
    pub fn level(&self) -> UtilizationLevel {
        UtilizationLevel::classify(self.utilization)
    }
}

/// Zero or missing capacity falls back to the default week
pub fn available_hours(person: &ManPower) -> f64 {
    person
        .total_hours
        .filter(|h| h.is_finite() && *h > 0.0)
        .unwrap_or(DEFAULT_WEEKLY_HOURS)
}

pub fn assigned_hours(assignments: &[Assignment]) -> f64 {
    assignments.iter().map(|a| a.hours_per_week.unwrap_or(0.0)).sum()
}

pub fn utilization(assigned: f64, available: f64) -> f64 {
    if available > 0.0 {
        assigned / available * 100.0
    } else {
        0.0
    }
}

fn entry(person: &ManPower, assignments: Result<Vec<Assignment>, ApiError>) -> WorkloadEntry {
    let name = person
        .name
        .clone()
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| "Unknown".to_string());
    let available = available_hours(person);
    match assignments {
        Ok(list) => {
            let assigned = assigned_hours(&list);
            WorkloadEntry {
                name,
                available_hours: available,
                assigned_hours: assigned,
                utilization: utilization(assigned, available),
                failed: false,
            }
        }
        Err(e) => {
            log::error!("[workload] assignments for manpower {} failed: {}", person.id, e);
            WorkloadEntry {
                name,
                available_hours: available,
                assigned_hours: 0.0,
                utilization: 0.0,
                failed: true,
            }
        }
    }
}

/// One entry per person in input order, at most `limit` fetches in flight
pub async fn aggregate_workload<F, Fut>(people: &[ManPower], limit: usize, fetch: F) -> Vec<WorkloadEntry>
where
    F: Fn(u32) -> Fut,
    Fut: Future<Output = Result<Vec<Assignment>, ApiError>>,
{
    let fetch = &fetch;
    stream::iter(people)
        .map(|person| async move { entry(person, fetch(person.id).await) })
        .buffered(limit.max(1))
        .collect()
        .await
}

pub fn failed_count(entries: &[WorkloadEntry]) -> usize {
    entries.iter().filter(|e| e.failed).count()
}

/// Numbers workload fan-outs; a run that finishes after a newer one started
/// is superseded and must not draw
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorkloadRuns {
    latest: u64,
}

impl WorkloadRuns {
    pub fn start(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_current(&self, run: u64) -> bool {
        run == self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::pin::Pin;
    use std::rc::Rc;
    use std::task::{Context, Poll};

    use futures::executor::block_on;

    /// Pending once, then ready
    struct YieldOnce(bool);

    impl Future for YieldOnce {
        type Output = ();

        fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
            if self.0 {
                Poll::Ready(())
            } else {
                self.0 = true;
                cx.waker().wake_by_ref();
                Poll::Pending
            }
        }
    }

    fn make_person(id: u32, name: &str, total_hours: Option<f64>) -> ManPower {
        ManPower {
            id,
            name: Some(name.to_string()),
            total_hours,
            ..Default::default()
        }
    }

    fn hours(list: &[f64]) -> Vec<Assignment> {
        list.iter()
            .map(|h| Assignment {
                hours_per_week: Some(*h),
                ..Default::default()
            })
            .collect()
    }

    #[test]
    fn test_classify_thresholds() {
        assert_eq!(UtilizationLevel::classify(120.0), UtilizationLevel::Over);
        assert_eq!(UtilizationLevel::classify(100.5), UtilizationLevel::Over);
        assert_eq!(UtilizationLevel::classify(100.0), UtilizationLevel::High);
        assert_eq!(UtilizationLevel::classify(80.1), UtilizationLevel::High);
        assert_eq!(UtilizationLevel::classify(80.0), UtilizationLevel::Normal);
        assert_eq!(UtilizationLevel::classify(0.0), UtilizationLevel::Normal);
        assert_eq!(UtilizationLevel::Over.border_color(), "#D32F2F");
    }

    #[test]
    fn test_available_hours_default() {
        assert_eq!(available_hours(&make_person(1, "A", None)), 40.0);
        assert_eq!(available_hours(&make_person(1, "A", Some(0.0))), 40.0);
        assert_eq!(available_hours(&make_person(1, "A", Some(30.0))), 30.0);
    }

    #[test]
    fn test_aggregate_preserves_order_and_flags_failures() {
        let people = vec![
            make_person(1, "Andi", Some(40.0)),
            make_person(2, "Budi", None),
            make_person(3, "Citra", Some(20.0)),
        ];

        let entries = block_on(aggregate_workload(&people, 2, |id| async move {
            match id {
                1 => Ok(hours(&[20.0, 16.0])),
                2 => Err(ApiError::Network("timeout".into())),
                _ => Ok(hours(&[30.0])),
            }
        }));

        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Andi", "Budi", "Citra"]);

        assert_eq!(entries[0].assigned_hours, 36.0);
        assert_eq!(entries[0].utilization, 90.0);
        assert_eq!(entries[0].level(), UtilizationLevel::High);

        assert!(entries[1].failed);
        assert_eq!(entries[1].assigned_hours, 0.0);
        assert_eq!(entries[1].available_hours, 40.0);

        assert_eq!(entries[2].utilization, 150.0);
        assert_eq!(entries[2].level(), UtilizationLevel::Over);

        assert_eq!(failed_count(&entries), 1);
    }

    #[test]
    fn test_aggregate_respects_concurrency_limit() {
        let people: Vec<ManPower> = (1..=10).map(|id| make_person(id, "P", None)).collect();
        let in_flight = Rc::new(Cell::new(0usize));
        let peak = Rc::new(Cell::new(0usize));

        let entries = block_on(aggregate_workload(&people, 4, |_| {
            let in_flight = in_flight.clone();
            let peak = peak.clone();
            async move {
                in_flight.set(in_flight.get() + 1);
                peak.set(peak.get().max(in_flight.get()));
                YieldOnce(false).await;
                in_flight.set(in_flight.get() - 1);
                Ok(Vec::new())
            }
        }));

        assert_eq!(entries.len(), 10);
        assert!(peak.get() <= 4);
        assert!(peak.get() > 1);
    }

    #[test]
    fn test_older_run_finishing_last_is_superseded() {
        let mut runs = WorkloadRuns::default();
        let first = runs.start();
        let second = runs.start();

        // second run finishes first and may draw
        assert!(runs.is_current(second));
        // first run finishes afterwards and is discarded
        assert!(!runs.is_current(first));

        let third = runs.start();
        assert!(!runs.is_current(second));
        assert!(runs.is_current(third));
    }

    #[test]
    fn test_aggregate_empty() {
        let entries = block_on(aggregate_workload(&[], 4, |_| async { Ok(Vec::new()) }));
        assert!(entries.is_empty());
    }
}
