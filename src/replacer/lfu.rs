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

/// Least Frequently Used (LFU) page replacer.
///
/// Each resident page carries an access counter, set to 1 on admission and
/// incremented on every hit. The page with the smallest counter is evicted.
/// Among equally frequent pages the one admitted earliest (of the current
/// residents) goes first. Counters are forgotten on eviction, so a page that
/// comes back starts over at 1.
pub struct LfuReplacer {
    /// Resident pages, keyed by `(access count, admission sequence)`.
    pages: PriorityQueue<PageId, Reverse<(u64, u64)>>,

    /// Admission order of resident pages.
    admissions: LogicalClock,
}

impl LfuReplacer {
    /// Creates a new LFU replacer.
    pub fn new(capacity: usize) -> Self {
        Self {
            pages: PriorityQueue::with_capacity(capacity),
            admissions: LogicalClock::new(),
        }
    }

    /// Peek into the next page to be evicted.
    pub fn peek(&self) -> Option<PageId> {
        self.pages.peek().map(|(page, _)| *page)
    }

    /// Access count of the page, if resident.
    pub fn frequency(&self, page: PageId) -> Option<u64> {
        self.pages
            .get_priority(&page)
            .map(|Reverse((count, _))| *count)
    }
}

impl EvictionPolicy for LfuReplacer {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Lfu
    }

    fn touch(&mut self, page: PageId, _frame: FrameId) -> EvictResult<()> {
        let Reverse((count, seq)) = *self
            .pages
            .get_priority(&page)
            .ok_or(EvictError::PageNotResident(page))?;
        self.pages.push(page, Reverse((count + 1, seq)));
        Ok(())
    }

    fn admit(&mut self, page: PageId, _frame: FrameId) -> EvictResult<()> {
        let seq = self.admissions.tick().ok_or(EvictError::SequenceExhausted)?;
        self.pages.push(page, Reverse((1, seq)));
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
