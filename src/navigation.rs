//! Stale response suppression
//!
//! A fetch started for one page can resolve after the user has already moved
//! to another. [`Navigation`] hands out a [`NavigationTicket`] per page visit;
//! once a newer visit begins, older tickets stop accepting results.
//!
//! # Example
//!
//! ```
//! use folio_rs::Navigation;
//!
//! let nav = Navigation::new();
//! let first = nav.begin();
//! let second = nav.begin();
//!
//! assert_eq!(first.accept("old page"), None);
//! assert_eq!(second.accept("new page"), Some("new page"));
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

/// Generation counter shared by all tickets of one view
#[derive(Debug, Clone, Default)]
pub struct Navigation {
    generation: Arc<AtomicU64>,
}

impl Navigation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new page visit, invalidating every earlier ticket
    pub fn begin(&self) -> NavigationTicket {
        let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
        NavigationTicket {
            generation,
            current: Arc::clone(&self.generation),
        }
    }

    /// Generation of the most recent visit (0 before the first)
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }
}

/// Proof of a page visit; see [`Navigation::begin`]
#[derive(Debug, Clone)]
pub struct NavigationTicket {
    generation: u64,
    current: Arc<AtomicU64>,
}

impl NavigationTicket {
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// True while no newer visit has begun
    #[must_use]
    pub fn is_current(&self) -> bool {
        self.current.load(Ordering::Acquire) == self.generation
    }

    /// Pass `value` through if this visit is still current, drop it otherwise
    pub fn accept<T>(&self, value: T) -> Option<T> {
        if self.is_current() {
            Some(value)
        } else {
            debug!(
                "Dropping stale result for navigation {} (current {})",
                self.generation,
                self.current.load(Ordering::Acquire)
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generations_increase() {
        let nav = Navigation::new();
        assert_eq!(nav.generation(), 0);
        let a = nav.begin();
        let b = nav.begin();
        assert_eq!(a.generation(), 1);
        assert_eq!(b.generation(), 2);
        assert_eq!(nav.generation(), 2);
    }

    #[test]
    fn test_newer_visit_invalidates_older() {
        let nav = Navigation::new();
        let a = nav.begin();
        assert!(a.is_current());
        let _b = nav.begin();
        assert!(!a.is_current());
    }

    #[test]
    fn test_clones_share_counter() {
        let nav = Navigation::new();
        let ticket = nav.begin();
        nav.clone().begin();
        assert!(!ticket.is_current());
    }
}
