#![doc = include_str!("../README.md")]
#![deny(missing_docs)]
#![deny(elided_lifetimes_in_paths)]

mod error;
mod frame_table;
mod metrics;
mod reference;
mod replacer;
mod simulation;
mod util;

use {
    serde::{Deserialize, Serialize},
    std::fmt,
};

pub use {
    error::{EvictError, EvictResult},
    frame_table::FrameTable,
    metrics::Summary,
    reference::{frame_count, parse_references},
    replacer::{
        Access,
        ClockReplacer,
        FifoReplacer,
        LfuReplacer,
        LruReplacer,
        MfuReplacer,
        Outcome,
        PolicyKind,
        Replacer,
    },
    simulation::{Simulation, SimulationConfig, SimulationResult, Step, run},
};

/// Page identifier.
///
/// Pages are addressed by non-negative integers. Negative references are
/// rejected while parsing input, so a `PageId` is always valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageId(pub u64);

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Frame identifier.
///
/// Physical memory is modelled as a fixed-size array of frames, each able to
/// hold a single page. The frame identifier is an index into this array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrameId(pub usize);

impl fmt::Display for FrameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Page eviction policy.
///
/// A policy only keeps the bookkeeping it needs to pick a victim (arrival
/// order, timestamps, counters, reference bits). Slot contents and the page
/// table live in the [`FrameTable`], and the common hit/fault decision is
/// made by [`Replacer`], which drives the policy through this interface.
pub trait EvictionPolicy: Send {
    /// Replacement policy implemented by this type.
    fn kind(&self) -> PolicyKind;

    /// Notifies the policy that a resident page has been referenced again.
    ///
    /// Hits never change the resident set, only policy metadata.
    fn touch(&mut self, page: PageId, frame: FrameId) -> EvictResult<()>;

    /// Notifies the policy that a page has been loaded into a frame.
    fn admit(&mut self, page: PageId, frame: FrameId) -> EvictResult<()>;

    /// Selects the frame to be freed on a fault with a full frame table.
    ///
    /// The victim's bookkeeping is dropped before returning, the caller is
    /// expected to overwrite the returned frame right away.
    fn evict(&mut self, frames: &FrameTable) -> EvictResult<FrameId>;

    /// The number of pages tracked by the policy.
    fn size(&self) -> usize;
}
