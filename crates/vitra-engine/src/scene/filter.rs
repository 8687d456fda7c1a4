/// Color filter applied to everything drawn while it is on the filter stack.
///
/// `saturate` follows CSS `saturate()`: `1.0` is identity, `0.0` is grayscale,
/// values above `1.0` oversaturate.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Filter {
    pub saturate: f32,
}

impl Filter {
    #[inline]
    pub const fn saturate(amount: f32) -> Self {
        Self { saturate: amount }
    }

    /// Composes a nested filter with its parent.
    #[inline]
    pub fn then(self, inner: Filter) -> Filter {
        Filter { saturate: self.saturate * inner.saturate }
    }
}
