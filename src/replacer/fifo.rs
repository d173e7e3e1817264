use {
    crate::{EvictError, EvictResult, EvictionPolicy, FrameId, FrameTable, PageId, PolicyKind},
    std::collections::VecDeque,
};

/// First-In-First-Out (FIFO) page replacer.
///
/// Pages are evicted in the order they entered memory. Hits do not reorder
/// the queue, so a heavily used page is evicted as soon as it becomes the
/// oldest resident one.
#[derive(Debug, Default)]
pub struct FifoReplacer {
    /// Resident pages in arrival order (front = oldest).
    queue: VecDeque<PageId>,
}

impl FifoReplacer {
    /// Creates a new FIFO replacer.
    pub fn new(capacity: usize) -> Self {
        Self {
            queue: VecDeque::with_capacity(capacity),
        }
    }

    /// Peek into the next page to be evicted.
    pub fn peek(&self) -> Option<PageId> {
        self.queue.front().copied()
    }

    /// Resident pages in arrival order.
    pub fn arrival_order(&self) -> impl Iterator<Item = PageId> + '_ {
        self.queue.iter().copied()
    }
}

impl EvictionPolicy for FifoReplacer {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Fifo
    }

    fn touch(&mut self, _page: PageId, _frame: FrameId) -> EvictResult<()> {
        // Arrival order is not affected by hits.
        Ok(())
    }

    fn admit(&mut self, page: PageId, _frame: FrameId) -> EvictResult<()> {
        self.queue.push_back(page);
        Ok(())
    }

    fn evict(&mut self, frames: &FrameTable) -> EvictResult<FrameId> {
        let page = self.queue.pop_front().ok_or(EvictError::NoFramesAvailable)?;
        frames.find(page).ok_or(EvictError::PageNotResident(page))
    }

    fn size(&self) -> usize {
        self.queue.len()
    }
}
