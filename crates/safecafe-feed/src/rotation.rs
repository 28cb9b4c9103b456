//! Circular index over the market list.

/// Selects the featured market. Advances by one per rotation tick and wraps.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Rotation {
    len: usize,
    index: usize,
}

impl Rotation {
    pub fn new(len: usize) -> Self {
        Self { len, index: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Featured index, `None` when there is nothing to feature.
    pub fn current(&self) -> Option<usize> {
        (self.len > 0).then_some(self.index)
    }

    /// Move to the next entry and return it.
    pub fn advance(&mut self) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        self.index = (self.index + 1) % self.len;
        Some(self.index)
    }

    /// Adopt a new list length, restarting from 0 if the index fell off the end.
    pub fn resize(&mut self, len: usize) {
        self.len = len;
        if self.index >= len {
            self.index = 0;
        }
    }
}

/// Yields the featured index at each firing, then advances.
impl Iterator for Rotation {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let featured = self.current()?;
        self.advance();
        Some(featured)
    }
}
