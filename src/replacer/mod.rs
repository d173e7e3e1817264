mod clock;
mod fifo;
mod lfu;
mod lru;
mod mfu;

use {
    crate::{EvictError, EvictResult, EvictionPolicy, FrameId, FrameTable, PageId},
    log::{debug, trace},
    serde::{Deserialize, Serialize},
    std::{fmt, str::FromStr},
};

pub use {
    clock::ClockReplacer,
    fifo::FifoReplacer,
    lfu::LfuReplacer,
    lru::LruReplacer,
    mfu::MfuReplacer,
};

/// Page replacement policy selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyKind {
    /// First-In-First-Out.
    Fifo,
    /// Least Recently Used.
    Lru,
    /// Least Frequently Used.
    Lfu,
    /// Most Frequently Used.
    Mfu,
    /// Clock (Second-Chance).
    Clock,
}

impl PolicyKind {
    /// Every supported policy, in presentation order.
    pub const ALL: [PolicyKind; 5] = [
        PolicyKind::Fifo,
        PolicyKind::Lru,
        PolicyKind::Lfu,
        PolicyKind::Mfu,
        PolicyKind::Clock,
    ];

    /// Human readable policy name.
    pub fn name(&self) -> &'static str {
        match self {
            PolicyKind::Fifo => "FIFO",
            PolicyKind::Lru => "LRU",
            PolicyKind::Lfu => "LFU",
            PolicyKind::Mfu => "MFU",
            PolicyKind::Clock => "Clock",
        }
    }

    /// Creates an empty replacer of this kind for `capacity` frames.
    pub fn replacer(&self, capacity: usize) -> Box<dyn EvictionPolicy> {
        match self {
            PolicyKind::Fifo => Box::new(FifoReplacer::new(capacity)),
            PolicyKind::Lru => Box::new(LruReplacer::new(capacity)),
            PolicyKind::Lfu => Box::new(LfuReplacer::new(capacity)),
            PolicyKind::Mfu => Box::new(MfuReplacer::new(capacity)),
            PolicyKind::Clock => Box::new(ClockReplacer::new(capacity)),
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PolicyKind {
    type Err = EvictError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fifo" => Ok(PolicyKind::Fifo),
            "lru" => Ok(PolicyKind::Lru),
            "lfu" => Ok(PolicyKind::Lfu),
            "mfu" => Ok(PolicyKind::Mfu),
            "clock" | "second-chance" | "secondchance" => Ok(PolicyKind::Clock),
            _ => Err(EvictError::UnknownPolicy(s.to_string())),
        }
    }
}

/// Result of a single page reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "lowercase")]
pub enum Outcome {
    /// The page was already resident.
    Hit,
    /// The page had to be loaded, possibly evicting another one.
    Fault {
        /// Page that was evicted to make room, `None` if an empty frame was
        /// used.
        evicted: Option<PageId>,
    },
}

impl Outcome {
    /// Returns `true` for a hit.
    pub fn is_hit(&self) -> bool {
        matches!(self, Outcome::Hit)
    }

    /// Returns `true` for a page fault.
    pub fn is_fault(&self) -> bool {
        !self.is_hit()
    }

    /// Page evicted by this reference, if any.
    pub fn evicted(&self) -> Option<PageId> {
        match self {
            Outcome::Hit => None,
            Outcome::Fault { evicted } => *evicted,
        }
    }
}

/// Outcome of a page reference, together with the frame holding the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Access {
    /// Frame the referenced page resides in after the access.
    pub frame: FrameId,

    /// Hit or fault.
    pub outcome: Outcome,
}

/// Page replacement engine.
///
/// Couples a [`FrameTable`] with an [`EvictionPolicy`] and implements the
/// reference handling shared by all policies: a resident page is a hit, a
/// missing page is loaded into the first empty frame or, with a full table,
/// into the frame of the victim picked by the policy.
pub struct Replacer {
    frames: FrameTable,
    policy: Box<dyn EvictionPolicy>,
}

impl Replacer {
    /// Creates a replacer of the given kind with `capacity` empty frames.
    pub fn new(kind: PolicyKind, capacity: usize) -> EvictResult<Self> {
        let frames = FrameTable::new(capacity)?;
        Ok(Self {
            policy: kind.replacer(capacity),
            frames,
        })
    }

    /// Replacement policy in use.
    pub fn kind(&self) -> PolicyKind {
        self.policy.kind()
    }

    /// Current frame table.
    pub fn frames(&self) -> &FrameTable {
        &self.frames
    }

    /// References a page.
    pub fn access(&mut self, page: PageId) -> EvictResult<Access> {
        if let Some(frame) = self.frames.find(page) {
            self.policy.touch(page, frame)?;
            trace!("{}: page {page} hit in frame {frame}", self.kind());
            return Ok(Access {
                frame,
                outcome: Outcome::Hit,
            });
        }

        // Frames fill up before any policy logic gets to pick a victim.
        let frame = match self.frames.find_empty() {
            Some(frame) => frame,
            None => self.policy.evict(&self.frames)?,
        };

        // The policy has already forgotten the victim, so a failed admission
        // leaves the frame empty rather than holding an untracked page.
        if let Err(err) = self.policy.admit(page, frame) {
            self.frames.vacate(frame);
            return Err(err);
        }
        let evicted = self.frames.place(frame, page);

        match evicted {
            Some(victim) => debug!(
                "{}: page {page} faulted, evicted page {victim} from frame {frame}",
                self.kind()
            ),
            None => trace!("{}: page {page} faulted into empty frame {frame}", self.kind()),
        }
        debug_assert_eq!(self.policy.size(), self.frames.len());

        Ok(Access {
            frame,
            outcome: Outcome::Fault { evicted },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_policy_names() {
        assert_eq!("fifo".parse::<PolicyKind>().unwrap(), PolicyKind::Fifo);
        assert_eq!("LRU".parse::<PolicyKind>().unwrap(), PolicyKind::Lru);
        assert_eq!(" Lfu ".parse::<PolicyKind>().unwrap(), PolicyKind::Lfu);
        assert_eq!("mfu".parse::<PolicyKind>().unwrap(), PolicyKind::Mfu);
        assert_eq!(
            "second-chance".parse::<PolicyKind>().unwrap(),
            PolicyKind::Clock
        );
        assert_eq!(
            "optimal".parse::<PolicyKind>(),
            Err(EvictError::UnknownPolicy("optimal".to_string()))
        );
    }

    #[test]
    fn names_round_trip() {
        for kind in PolicyKind::ALL {
            assert_eq!(kind.to_string().parse::<PolicyKind>().unwrap(), kind);
            assert_eq!(kind.replacer(3).kind(), kind);
        }
    }

    #[test]
    fn zero_frames_rejected() {
        for kind in PolicyKind::ALL {
            assert!(matches!(
                Replacer::new(kind, 0),
                Err(EvictError::InvalidConfiguration(0))
            ));
        }
    }

    /// FIFO bookkeeping that refuses to admit one particular page.
    struct RejectingReplacer {
        inner: FifoReplacer,
        rejected: PageId,
    }

    impl EvictionPolicy for RejectingReplacer {
        fn kind(&self) -> PolicyKind {
            PolicyKind::Fifo
        }

        fn touch(&mut self, page: PageId, frame: FrameId) -> EvictResult<()> {
            self.inner.touch(page, frame)
        }

        fn admit(&mut self, page: PageId, frame: FrameId) -> EvictResult<()> {
            if page == self.rejected {
                return Err(EvictError::SequenceExhausted);
            }
            self.inner.admit(page, frame)
        }

        fn evict(&mut self, frames: &FrameTable) -> EvictResult<FrameId> {
            self.inner.evict(frames)
        }

        fn size(&self) -> usize {
            self.inner.size()
        }
    }

    fn rejecting(capacity: usize, rejected: u64) -> Replacer {
        Replacer {
            frames: FrameTable::new(capacity).unwrap(),
            policy: Box::new(RejectingReplacer {
                inner: FifoReplacer::new(capacity),
                rejected: PageId(rejected),
            }),
        }
    }

    #[test]
    fn failed_admission_into_empty_frame() {
        let mut replacer = rejecting(3, 2);
        replacer.access(PageId(1)).unwrap();

        assert_eq!(
            replacer.access(PageId(2)),
            Err(EvictError::SequenceExhausted)
        );
        assert_eq!(replacer.frames().snapshot(), vec![Some(PageId(1)), None, None]);
        assert!(!replacer.frames().contains(PageId(2)));
        assert_eq!(replacer.policy.size(), replacer.frames().len());

        // The run carries on with frame table and policy in step.
        let access = replacer.access(PageId(3)).unwrap();
        assert_eq!(access.frame, FrameId(1));
        assert_eq!(access.outcome, Outcome::Fault { evicted: None });
        assert!(replacer.access(PageId(1)).unwrap().outcome.is_hit());
    }

    #[test]
    fn failed_admission_after_eviction() {
        let mut replacer = rejecting(1, 2);
        replacer.access(PageId(1)).unwrap();

        // Page 1 was already evicted from the policy, the frame is emptied.
        assert_eq!(
            replacer.access(PageId(2)),
            Err(EvictError::SequenceExhausted)
        );
        assert!(replacer.frames().is_empty());
        assert_eq!(replacer.policy.size(), 0);

        let access = replacer.access(PageId(3)).unwrap();
        assert_eq!(access.frame, FrameId(0));
        assert_eq!(access.outcome, Outcome::Fault { evicted: None });
    }

    #[test]
    fn outcome_helpers() {
        assert!(Outcome::Hit.is_hit());
        assert_eq!(Outcome::Hit.evicted(), None);

        let fault = Outcome::Fault {
            evicted: Some(PageId(4)),
        };
        assert!(fault.is_fault());
        assert_eq!(fault.evicted(), Some(PageId(4)));
    }
}
