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

/// Most Frequently Used (MFU) page replacer.
///
/// The mirror image of LFU: the page with the *largest* access count is
/// evicted, on the assumption that a heavily used page has already done its
/// work. Ties go to the oldest arrival, so equally frequent pages leave in
/// FIFO order.
pub struct MfuReplacer {
    /// Resident pages, keyed by `(access count, arrival time)`.
    pages: PriorityQueue<PageId, (u64, Reverse<u64>)>,

    /// Arrival order of resident pages.
    arrivals: LogicalClock,
}

impl MfuReplacer {
    /// Creates a new MFU replacer.
    pub fn new(capacity: usize) -> Self {
        Self {
            pages: PriorityQueue::with_capacity(capacity),
            arrivals: LogicalClock::new(),
        }
    }

    /// Peek into the next page to be evicted.
    pub fn peek(&self) -> Option<PageId> {
        self.pages.peek().map(|(page, _)| *page)
    }

    /// Access count of the page, if resident.
    pub fn frequency(&self, page: PageId) -> Option<u64> {
        self.pages.get_priority(&page).map(|(count, _)| *count)
    }

    /// Arrival time of the page, if resident.
    pub fn arrival(&self, page: PageId) -> Option<u64> {
        self.pages
            .get_priority(&page)
            .map(|(_, Reverse(arrival))| *arrival)
    }
}

impl EvictionPolicy for MfuReplacer {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Mfu
    }

    fn touch(&mut self, page: PageId, _frame: FrameId) -> EvictResult<()> {
        let (count, arrival) = *self
            .pages
            .get_priority(&page)
            .ok_or(EvictError::PageNotResident(page))?;
        self.pages.push(page, (count + 1, arrival));
        Ok(())
    }

    fn admit(&mut self, page: PageId, _frame: FrameId) -> EvictResult<()> {
        let arrival = self.arrivals.tick().ok_or(EvictError::SequenceExhausted)?;
        self.pages.push(page, (1, Reverse(arrival)));
        Ok(())
    }

    fn evict(&mut self, frames: &FrameTable) -> EvictResult<FrameId> {
        let (page, _) = self.pages.pop().ok_or(EvictError::NoFramesAvailable)?;
        frames.find(page).ok_or(EvictError::PageNotResident(page))
    }

    fn size(&self) -> usize {
        self.pages.len()
    }
}
