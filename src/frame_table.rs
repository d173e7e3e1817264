use {
    crate::{EvictError, EvictResult, FrameId, PageId},
    std::collections::HashMap,
};

/// Fixed-capacity table of physical frames.
///
/// Besides slot contents, the table keeps the page table: a mapping from a
/// resident page to the frame holding it. An entry exists exactly while its
/// page is resident.
#[derive(Debug, Clone)]
pub struct FrameTable {
    /// Slot contents, `None` marks an empty frame.
    slots: Vec<Option<PageId>>,

    /// Resident page to frame mapping.
    page_table: HashMap<PageId, FrameId>,
}

impl FrameTable {
    /// Creates a table of `capacity` empty frames.
    pub fn new(capacity: usize) -> EvictResult<Self> {
        if capacity == 0 {
            return Err(EvictError::InvalidConfiguration(0));
        }
        Ok(Self {
            slots: vec![None; capacity],
            page_table: HashMap::with_capacity(capacity),
        })
    }

    /// Returns the number of frames.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the number of resident pages.
    pub fn len(&self) -> usize {
        self.page_table.len()
    }

    /// Returns `true` if no page is resident.
    pub fn is_empty(&self) -> bool {
        self.page_table.is_empty()
    }

    /// Returns `true` if every frame holds a page.
    pub fn is_full(&self) -> bool {
        self.len() == self.capacity()
    }

    /// Finds the first empty frame, by index.
    pub fn find_empty(&self) -> Option<FrameId> {
        self.slots.iter().position(Option::is_none).map(FrameId)
    }

    /// Finds the frame holding the given page.
    pub fn find(&self, page: PageId) -> Option<FrameId> {
        self.page_table.get(&page).copied()
    }

    /// Returns `true` if the page is resident.
    pub fn contains(&self, page: PageId) -> bool {
        self.page_table.contains_key(&page)
    }

    /// Returns the page held by the frame, if any.
    pub fn occupant(&self, frame: FrameId) -> Option<PageId> {
        self.slots.get(frame.0).copied().flatten()
    }

    /// Places a page into the frame, returning the previous occupant.
    ///
    /// The previous occupant loses its page table entry. The caller must
    /// ensure the page is not already resident in another frame.
    ///
    /// # Panics
    ///
    /// Panics if `frame` is out of range.
    pub fn place(&mut self, frame: FrameId, page: PageId) -> Option<PageId> {
        debug_assert!(
            self.find(page).is_none_or(|f| f == frame),
            "page {page} is already resident in another frame"
        );

        let previous = self.slots[frame.0].replace(page);
        if let Some(old) = previous {
            self.page_table.remove(&old);
        }
        self.page_table.insert(page, frame);
        previous
    }

    /// Empties the frame, returning the page it held.
    ///
    /// # Panics
    ///
    /// Panics if `frame` is out of range.
    pub fn vacate(&mut self, frame: FrameId) -> Option<PageId> {
        let previous = self.slots[frame.0].take();
        if let Some(old) = previous {
            self.page_table.remove(&old);
        }
        previous
    }

    /// Copies the current slot contents.
    pub fn snapshot(&self) -> Vec<Option<PageId>> {
        self.slots.clone()
    }

    /// Iterates over resident pages and their frames, in frame order.
    pub fn resident(&self) -> impl Iterator<Item = (FrameId, PageId)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(idx, slot)| slot.map(|page| (FrameId(idx), page)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_capacity_rejected() {
        assert_eq!(
            FrameTable::new(0).unwrap_err(),
            EvictError::InvalidConfiguration(0)
        );
    }

    #[test]
    fn fills_in_index_order() {
        let mut table = FrameTable::new(3).unwrap();
        assert_eq!(table.find_empty(), Some(FrameId(0)));

        table.place(FrameId(0), PageId(7));
        table.place(FrameId(1), PageId(0));
        assert_eq!(table.find_empty(), Some(FrameId(2)));
        assert_eq!(table.len(), 2);
        assert!(!table.is_full());

        table.place(FrameId(2), PageId(1));
        assert_eq!(table.find_empty(), None);
        assert!(table.is_full());
        assert_eq!(
            table.snapshot(),
            vec![Some(PageId(7)), Some(PageId(0)), Some(PageId(1))]
        );
    }

    #[test]
    fn place_overwrites_and_updates_page_table() {
        let mut table = FrameTable::new(2).unwrap();
        table.place(FrameId(0), PageId(1));
        table.place(FrameId(1), PageId(2));

        assert_eq!(table.place(FrameId(0), PageId(3)), Some(PageId(1)));
        assert_eq!(table.find(PageId(1)), None);
        assert_eq!(table.find(PageId(3)), Some(FrameId(0)));
        assert_eq!(table.occupant(FrameId(0)), Some(PageId(3)));
        assert_eq!(table.len(), 2);

        let resident: Vec<_> = table.resident().collect();
        assert_eq!(
            resident,
            vec![(FrameId(0), PageId(3)), (FrameId(1), PageId(2))]
        );
    }

    #[test]
    fn vacate_frees_slot_and_page_table_entry() {
        let mut table = FrameTable::new(2).unwrap();
        table.place(FrameId(0), PageId(1));
        table.place(FrameId(1), PageId(2));

        assert_eq!(table.vacate(FrameId(0)), Some(PageId(1)));
        assert_eq!(table.find(PageId(1)), None);
        assert_eq!(table.find_empty(), Some(FrameId(0)));
        assert_eq!(table.len(), 1);

        assert_eq!(table.vacate(FrameId(0)), None);
        assert_eq!(table.len(), 1);
    }
}
