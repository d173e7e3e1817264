/// Logical clock.
///
/// Replacers that need to order events (last reference, admission) use the
/// values produced here as timestamps. Each run owns its own clock, so the
/// counter is a plain integer.
#[derive(Debug, Default, Clone)]
pub struct LogicalClock {
    val: u64,
}

impl LogicalClock {
    /// Creates a new clock starting at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self { val: 0 }
    }

    /// Returns the current time and advances the clock.
    ///
    /// Whenever maximum value is reached, the function returns `None`.
    pub fn tick(&mut self) -> Option<u64> {
        let val = self.val;
        self.val = val.checked_add(1)?;
        Some(val)
    }
}
