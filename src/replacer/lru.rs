use {
    crate::{
        EvictError,
        EvictResult,
        EvictionPolicy,
        FrameId,
        FrameTable,
        PageId,
        PolicyKind,
        util::LogicalClock,
    },
    priority_queue::PriorityQueue,
    std::cmp::Reverse,
};

/// Least Recently Used (LRU) page replacer.
///
/// This implementation uses a priority queue to manage the pages.
/// The priority queue is ordered by the logical time of the last reference.
/// The most recently referenced page is pushed to the back of the queue,
/// while the least recently referenced one is the first to be evicted.
///
/// The clock advances once per reference, so timestamps are unique and the
/// frame index in the priority only matters as a documented tie-break
/// (lowest frame wins).
pub struct LruReplacer {
    /// Resident pages, ordered by last reference time.
    pages: PriorityQueue<PageId, Reverse<(u64, FrameId)>>,

    /// Monotonically increasing logical time.
    clock: LogicalClock,
}

impl LruReplacer {
    /// Creates a new LRU replacer.
    pub fn new(capacity: usize) -> Self {
        Self {
            pages: PriorityQueue::with_capacity(capacity),
            clock: LogicalClock::new(),
        }
    }

    /// Peek into the next page to be evicted.
    pub fn peek(&self) -> Option<PageId> {
        self.pages.peek().map(|(page, _)| *page)
    }

    /// Logical time of the last reference to the page, if resident.
    pub fn last_used(&self, page: PageId) -> Option<u64> {
        self.pages
            .get_priority(&page)
            .map(|Reverse((timestamp, _))| *timestamp)
    }

    fn stamp(&mut self, page: PageId, frame: FrameId) -> EvictResult<()> {
        // If the page is already within the queue, update its priority.
        // Otherwise, insert it. Both cases are handled by the `push` method.
        let timestamp = self.clock.tick().ok_or(EvictError::SequenceExhausted)?;
        self.pages.push(page, Reverse((timestamp, frame)));
        Ok(())
    }
}

impl EvictionPolicy for LruReplacer {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Lru
    }

    fn touch(&mut self, page: PageId, frame: FrameId) -> EvictResult<()> {
        if self.pages.get(&page).is_none() {
            return Err(EvictError::PageNotResident(page));
        }
        self.stamp(page, frame)
    }

    fn admit(&mut self, page: PageId, frame: FrameId) -> EvictResult<()> {
        self.stamp(page, frame)
    }

    fn evict(&mut self, frames: &FrameTable) -> EvictResult<FrameId> {
        let (page, _) = self.pages.pop().ok_or(EvictError::NoFramesAvailable)?;
        frames.find(page).ok_or(EvictError::PageNotResident(page))
    }

    fn size(&self) -> usize {
        self.pages.len()
    }
}
