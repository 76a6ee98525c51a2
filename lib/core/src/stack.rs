/// A last-in-first-out stack of modes that can never become empty
///
/// The bottom element is stored apart from the pushed overrides, so there is
/// always a current mode and popping can never remove the default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeStack<T> {
    base: T,
    overrides: Vec<T>,
}

impl<T: Copy> ModeStack<T> {
    /// Create a stack holding only the protected default
    pub fn new(base: T) -> Self {
        Self {
            base,
            overrides: Vec::new(),
        }
    }

    /// Push `mode` as the new current mode
    #[inline]
    pub fn push(&mut self, mode: T) {
        self.overrides.push(mode);
    }

    /// Remove the current mode unless it is the protected default
    ///
    /// Returns the removed mode, or `None` when only the default remains.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.overrides.pop()
    }

    #[inline]
    #[must_use]
    pub fn current(&self) -> T {
        self.overrides.last().copied().unwrap_or(self.base)
    }

    /// The protected bottom element
    #[inline]
    #[must_use]
    pub fn default_mode(&self) -> T {
        self.base
    }

    /// Number of elements, default included (always >= 1)
    #[inline]
    #[must_use]
    pub fn depth(&self) -> usize {
        self.overrides.len() + 1
    }

    /// Pop until at most `depth` elements remain
    ///
    /// The default is kept even when `depth` is zero.
    pub fn truncate(&mut self, depth: usize) {
        self.overrides.truncate(depth.saturating_sub(1));
    }

    /// Drop every override, leaving only the default
    pub fn reset(&mut self) {
        self.overrides.clear();
    }
}

impl<T: Copy + Default> Default for ModeStack<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
