//! Clock (Second-Chance) page replacement algorithm.
//!
//! Frames are arranged in a circle with a hand pointing at the next frame to
//! examine. Every frame carries a reference bit, set whenever its page is
//! loaded or referenced. On eviction the hand sweeps forward: a set bit buys
//! the page a second chance (the bit is cleared and the hand moves on), a
//! clear bit marks the victim.
//!
//! A sweep clears at most one bit per frame before it comes back to a frame
//! with a cleared bit, so a victim is always found within `2 * capacity`
//! inspections.

use crate::{EvictError, EvictResult, EvictionPolicy, FrameId, FrameTable, PageId, PolicyKind};

/// Clock (Second-Chance) page replacer.
#[derive(Debug, Clone)]
pub struct ClockReplacer {
    /// Reference bit of every frame.
    bits: Vec<bool>,

    /// Next frame to examine.
    hand: usize,

    /// Number of occupied frames.
    size: usize,

    /// Number of inspections performed by the most recent eviction sweep.
    last_sweep: usize,
}

impl ClockReplacer {
    /// Creates a new Clock replacer for `capacity` frames.
    pub fn new(capacity: usize) -> Self {
        Self {
            bits: vec![false; capacity],
            hand: 0,
            size: 0,
            last_sweep: 0,
        }
    }

    /// Current position of the clock hand.
    pub fn hand(&self) -> FrameId {
        FrameId(self.hand)
    }

    /// Reference bit of the frame.
    pub fn reference_bit(&self, frame: FrameId) -> Option<bool> {
        self.bits.get(frame.0).copied()
    }

    /// Number of frames inspected by the most recent eviction.
    pub fn last_sweep(&self) -> usize {
        self.last_sweep
    }

    fn advance(&mut self) {
        self.hand = (self.hand + 1) % self.bits.len();
    }
}

impl EvictionPolicy for ClockReplacer {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Clock
    }

    fn touch(&mut self, _page: PageId, frame: FrameId) -> EvictResult<()> {
        // The hand does not move on a hit.
        let bit = self
            .bits
            .get_mut(frame.0)
            .ok_or(EvictError::InvalidFrameId(frame))?;
        *bit = true;
        Ok(())
    }

    fn admit(&mut self, _page: PageId, frame: FrameId) -> EvictResult<()> {
        let bit = self
            .bits
            .get_mut(frame.0)
            .ok_or(EvictError::InvalidFrameId(frame))?;
        *bit = true;
        self.size += 1;

        // Park the hand right after the freshly loaded frame.
        self.hand = frame.0;
        self.advance();
        Ok(())
    }

    fn evict(&mut self, frames: &FrameTable) -> EvictResult<FrameId> {
        if self.size == 0 {
            return Err(EvictError::NoFramesAvailable);
        }

        for inspections in 1..=2 * self.bits.len() {
            let frame = FrameId(self.hand);
            if self.bits[self.hand] {
                // Second chance.
                self.bits[self.hand] = false;
                self.advance();
                continue;
            }

            let page = frames
                .occupant(frame)
                .ok_or(EvictError::NoFramesAvailable)?;
            log::trace!(
                "clock sweep picked frame {frame} (page {page}) after {inspections} inspections"
            );

            self.last_sweep = inspections;
            self.size -= 1;
            return Ok(frame);
        }

        Err(EvictError::NoFramesAvailable)
    }

    fn size(&self) -> usize {
        self.size
    }
}
