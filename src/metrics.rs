//! Simulation statistics.

use {
    crate::Step,
    serde::{Deserialize, Serialize},
    std::fmt,
};

/// Aggregate totals of a simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Number of page references processed.
    pub requests: u64,

    /// Number of references that had to load the page.
    pub faults: u64,

    /// Number of references served by a resident page.
    pub hits: u64,

    /// Number of faults that evicted another page.
    pub evictions: u64,

    /// Faults as a percentage of requests, 0 when there were no requests.
    pub fault_rate_percent: f64,
}

impl Summary {
    /// Computes totals over a simulation trace.
    pub fn from_steps(steps: &[Step]) -> Self {
        let requests = steps.len() as u64;
        let faults = steps.iter().filter(|s| s.outcome.is_fault()).count() as u64;
        let evictions = steps
            .iter()
            .filter(|s| s.outcome.evicted().is_some())
            .count() as u64;

        Self {
            requests,
            faults,
            hits: requests - faults,
            evictions,
            fault_rate_percent: percent(faults, requests),
        }
    }

    /// Hits as a percentage of requests, 0 when there were no requests.
    pub fn hit_rate_percent(&self) -> f64 {
        percent(self.hits, self.requests)
    }
}

fn percent(part: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        100.0 * part as f64 / total as f64
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ requests: {}, faults: {}, hits: {}, evictions: {}, fault_rate: {:.2}% }}",
            self.requests, self.faults, self.hits, self.evictions, self.fault_rate_percent
        )
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::{FrameId, Outcome, PageId},
    };

    fn step(page: u64, outcome: Outcome) -> Step {
        Step {
            page: PageId(page),
            frame: FrameId(0),
            outcome,
            frames: vec![Some(PageId(page))],
        }
    }

    #[test]
    fn empty_trace() {
        let summary = Summary::from_steps(&[]);
        assert_eq!(summary.requests, 0);
        assert_eq!(summary.faults, 0);
        assert_eq!(summary.hits, 0);
        assert_eq!(summary.fault_rate_percent, 0.0);
        assert_eq!(summary.hit_rate_percent(), 0.0);
    }

    #[test]
    fn counts_and_rates() {
        let steps = vec![
            step(1, Outcome::Fault { evicted: None }),
            step(1, Outcome::Hit),
            step(2, Outcome::Fault {
                evicted: Some(PageId(1)),
            }),
            step(2, Outcome::Hit),
        ];
        let summary = Summary::from_steps(&steps);
        assert_eq!(summary.requests, 4);
        assert_eq!(summary.faults, 2);
        assert_eq!(summary.hits, 2);
        assert_eq!(summary.evictions, 1);
        assert_eq!(summary.fault_rate_percent, 50.0);
        assert_eq!(summary.hit_rate_percent(), 50.0);
    }

    #[test]
    fn display() {
        let steps = vec![
            step(1, Outcome::Fault { evicted: None }),
            step(2, Outcome::Fault { evicted: None }),
            step(1, Outcome::Hit),
        ];
        let display = Summary::from_steps(&steps).to_string();
        assert!(display.contains("faults: 2"));
        assert!(display.contains("hits: 1"));
        assert!(display.contains("66.67%"));
    }
}
