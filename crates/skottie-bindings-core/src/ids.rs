//! Identifiers for constructed handles.

use serde::{Deserialize, Serialize};

/// Opaque id of one constructed animation handle.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct HandleId(pub u32);

/// Monotonic allocator for handle ids.
/// Dense values keep registry maps cheap; ids are opaque externally.
#[derive(Default, Debug)]
pub struct IdAllocator {
    next: u32,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn alloc_handle(&mut self) -> HandleId {
        let id = HandleId(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alloc_monotonic() {
        let mut alloc = IdAllocator::new();
        assert_eq!(alloc.alloc_handle(), HandleId(0));
        assert_eq!(alloc.alloc_handle(), HandleId(1));
        assert_eq!(alloc.alloc_handle(), HandleId(2));
    }
}
