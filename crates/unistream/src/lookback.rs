//! Fixed-capacity look-back buffer owned by each transcoder's read side.
//!
//! Decoding one external scalar can yield several user units (a surrogate
//! pair, a multi-byte UTF-8 sequence). They are staged here and served one
//! per read. Units already served stay visible through
//! [`LookBack::history`] and can be pushed back with [`LookBack::unread`].

/// Served units kept at the front when the buffer is compacted.
pub const HISTORY: usize = 16;

/// A bounded array with a read cursor.
///
/// `buf[..pos]` has been served, `buf[pos..end]` is pending.
#[derive(Debug, Clone)]
pub struct LookBack<T, const N: usize = 64> {
    buf: [T; N],
    pos: usize,
    end: usize,
}

impl<T: Copy + Default, const N: usize> Default for LookBack<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy + Default, const N: usize> LookBack<T, N> {
    #[must_use]
    pub fn new() -> Self {
        const { assert!(N >= HISTORY + 4, "look-back buffer too small") };
        Self {
            buf: [T::default(); N],
            pos: 0,
            end: 0,
        }
    }

    /// Appends freshly decoded units behind any still pending.
    ///
    /// When they would not fit, the most recent [`HISTORY`] served units and
    /// the pending ones are moved to the front first.
    ///
    /// # Panics
    ///
    /// If `units` is longer than four, which no scalar encoding produces.
    pub fn fill(&mut self, units: &[T]) {
        assert!(units.len() <= 4);
        if self.end + units.len() > N {
            let keep = self.pos.min(HISTORY);
            let start = self.pos - keep;
            self.buf.copy_within(start..self.end, 0);
            self.pos = keep;
            self.end -= start;
        }
        self.buf[self.end..self.end + units.len()].copy_from_slice(units);
        self.end += units.len();
    }

    /// Serves the next pending unit.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<T> {
        if self.pos == self.end {
            return None;
        }
        let unit = self.buf[self.pos];
        self.pos += 1;
        Some(unit)
    }

    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.pos < self.end
    }

    #[must_use]
    pub fn pending(&self) -> &[T] {
        &self.buf[self.pos..self.end]
    }

    /// The unit served most recently.
    #[must_use]
    pub fn last(&self) -> Option<T> {
        self.pos.checked_sub(1).map(|i| self.buf[i])
    }

    /// Units already served that are still retained, oldest first.
    #[must_use]
    pub fn history(&self) -> &[T] {
        &self.buf[..self.pos]
    }

    /// Steps the cursor back one unit so the next read serves it again.
    /// Returns false when nothing is retained.
    pub fn unread(&mut self) -> bool {
        if self.pos == 0 {
            return false;
        }
        self.pos -= 1;
        true
    }

    pub fn clear(&mut self) {
        self.pos = 0;
        self.end = 0;
    }
}
