/// Cursor over a carrier's price-sorted service levels.
///
/// Index 0 is the cheapest option. Stepping past either end wraps around.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ServiceNavigator {
    selected: usize,
}

impl ServiceNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selected position, clamped to a list of `len` entries.
    pub fn current(&self, len: usize) -> usize {
        if len == 0 {
            0
        } else {
            self.selected.min(len - 1)
        }
    }

    pub fn previous(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let current = self.current(len);
        self.selected = if current == 0 { len - 1 } else { current - 1 };
    }

    pub fn next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let current = self.current(len);
        self.selected = if current + 1 >= len { 0 } else { current + 1 };
    }

    /// Jumps straight to `index`; out-of-range requests are ignored.
    pub fn select(&mut self, index: usize, len: usize) {
        if index < len {
            self.selected = index;
        }
    }

    pub fn is_best(&self, len: usize) -> bool {
        self.current(len) == 0
    }
}
