//! Simulation driver.
//!
//! Feeds a reference stream through a replacer and records what happened at
//! every step. Each run builds its own [`Replacer`], nothing is shared
//! between runs.

use {
    crate::{
        EvictError,
        EvictResult,
        FrameId,
        Outcome,
        PageId,
        PolicyKind,
        Replacer,
        Summary,
    },
    log::info,
    serde::{Deserialize, Serialize},
};

/// Configuration of a simulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of physical frames.
    pub frame_count: usize,

    /// Policies exercised by [`Simulation::compare`].
    pub policies: Vec<PolicyKind>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            frame_count: 3,
            policies: PolicyKind::ALL.to_vec(),
        }
    }
}

/// A single processed page reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// Referenced page.
    pub page: PageId,

    /// Frame holding the page after the reference.
    pub frame: FrameId,

    /// Hit or fault, with the evicted page if any.
    #[serde(flatten)]
    pub outcome: Outcome,

    /// Frame contents after the reference.
    pub frames: Vec<Option<PageId>>,
}

/// Trace and totals of one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Policy the run used.
    pub policy: PolicyKind,

    /// Number of frames.
    pub frame_count: usize,

    /// Per-reference trace, in reference order.
    pub steps: Vec<Step>,

    /// Aggregate totals.
    pub summary: Summary,
}

/// Page replacement simulation.
#[derive(Debug, Clone)]
pub struct Simulation {
    config: SimulationConfig,
}

impl Simulation {
    /// Creates a simulation over `frame_count` frames, comparing all policies.
    pub fn new(frame_count: usize) -> EvictResult<Self> {
        Self::with_config(SimulationConfig {
            frame_count,
            ..SimulationConfig::default()
        })
    }

    /// Creates a simulation with the given configuration.
    pub fn with_config(config: SimulationConfig) -> EvictResult<Self> {
        if config.frame_count == 0 {
            return Err(EvictError::InvalidConfiguration(0));
        }
        Ok(Self { config })
    }

    /// Runs a single policy over the reference stream.
    pub fn run(&self, kind: PolicyKind, references: &[PageId]) -> EvictResult<SimulationResult> {
        let mut replacer = Replacer::new(kind, self.config.frame_count)?;
        let mut steps = Vec::with_capacity(references.len());

        for &page in references {
            let access = replacer.access(page)?;
            steps.push(Step {
                page,
                frame: access.frame,
                outcome: access.outcome,
                frames: replacer.frames().snapshot(),
            });
        }

        let summary = Summary::from_steps(&steps);
        info!(
            "{kind} over {} frames: {} requests, {} faults, {:.2}% fault rate",
            self.config.frame_count, summary.requests, summary.faults, summary.fault_rate_percent
        );

        Ok(SimulationResult {
            policy: kind,
            frame_count: self.config.frame_count,
            steps,
            summary,
        })
    }

    /// Runs every configured policy over the same reference stream.
    ///
    /// Runs are independent: a failing run is reported in its slot and does
    /// not prevent the remaining policies from running.
    pub fn compare(&self, references: &[PageId]) -> Vec<EvictResult<SimulationResult>> {
        self.config
            .policies
            .iter()
            .map(|&kind| self.run(kind, references))
            .collect()
    }
}

/// Runs a single policy over `frame_count` frames.
pub fn run(
    kind: PolicyKind,
    frame_count: usize,
    references: &[PageId],
) -> EvictResult<SimulationResult> {
    Simulation::new(frame_count)?.run(kind, references)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages(ids: &[u64]) -> Vec<PageId> {
        ids.iter().copied().map(PageId).collect()
    }

    #[test]
    fn default_config() {
        let config = SimulationConfig::default();
        assert_eq!(config.frame_count, 3);
        assert_eq!(config.policies, PolicyKind::ALL.to_vec());
    }

    #[test]
    fn zero_frames_rejected() {
        assert_eq!(
            Simulation::new(0).unwrap_err(),
            EvictError::InvalidConfiguration(0)
        );
        assert_eq!(
            run(PolicyKind::Fifo, 0, &pages(&[1])).unwrap_err(),
            EvictError::InvalidConfiguration(0)
        );
    }

    #[test]
    fn trace_records_snapshots() {
        let result = run(PolicyKind::Fifo, 2, &pages(&[1, 2, 3])).unwrap();
        assert_eq!(result.policy, PolicyKind::Fifo);
        assert_eq!(result.frame_count, 2);
        assert_eq!(result.steps.len(), 3);

        let last = &result.steps[2];
        assert_eq!(last.page, PageId(3));
        assert_eq!(last.frame, FrameId(0));
        assert_eq!(last.outcome, Outcome::Fault {
            evicted: Some(PageId(1))
        });
        assert_eq!(last.frames, vec![Some(PageId(3)), Some(PageId(2))]);
    }

    #[test]
    fn compare_uses_configured_policies() {
        let sim = Simulation::with_config(SimulationConfig {
            frame_count: 2,
            policies: vec![PolicyKind::Lru, PolicyKind::Clock],
        })
        .unwrap();

        let results = sim.compare(&pages(&[1, 2, 1, 3]));
        let kinds: Vec<_> = results
            .iter()
            .map(|r| r.as_ref().unwrap().policy)
            .collect();
        assert_eq!(kinds, vec![PolicyKind::Lru, PolicyKind::Clock]);
    }

    #[test]
    fn result_serializes() {
        let result = run(PolicyKind::Lru, 1, &pages(&[5, 5])).unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["policy"], "lru");
        assert_eq!(json["steps"][0]["result"], "fault");
        assert_eq!(json["steps"][1]["result"], "hit");
        assert_eq!(json["steps"][0]["frames"][0], 5);
        assert_eq!(json["summary"]["hits"], 1);
    }
}
