//! Single-slot memo keyed on a dependency tuple
//!
//! Holds the last computed value together with the dependencies it was
//! computed from. A read with different dependencies recomputes.

use std::cell::RefCell;

/// Single-slot memo cell
#[derive(Debug)]
pub struct Memo<D, V> {
    slot: RefCell<Option<(D, V)>>,
}

impl<D: PartialEq + Clone, V: Clone> Memo<D, V> {
    pub fn new() -> Self {
        Self {
            slot: RefCell::new(None),
        }
    }

    /// Return the cached value for `deps`, computing it on a miss
    pub fn get_or_compute(&self, deps: &D, compute: impl FnOnce() -> V) -> V {
        if let Some((cached_deps, value)) = self.slot.borrow().as_ref() {
            if cached_deps == deps {
                return value.clone();
            }
        }

        let value = compute();
        *self.slot.borrow_mut() = Some((deps.clone(), value.clone()));
        value
    }
}

impl<D: PartialEq + Clone, V: Clone> Default for Memo<D, V> {
    fn default() -> Self {
        Self::new()
    }
}
