//! Page identifier type.

use std::fmt;

/// Identifies a page in the simulated address space.
///
/// Engines are generic over any page type (see [`crate::engine::Page`]); this
/// newtype is the concrete page used by the CLI, the reference trace, and the
/// test suite. `u32` matches the page-number width of the classic textbook
/// examples this simulator reproduces.
///
/// # Example
/// ```
/// use evictsim::PageId;
///
/// let page = PageId::new(42);
/// assert_eq!(page.0, 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageId(pub u32);

impl PageId {
    /// Create a new PageId.
    #[inline]
    pub fn new(id: u32) -> Self {
        PageId(id)
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for PageId {
    fn from(id: u32) -> Self {
        PageId(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_new() {
        let pid = PageId::new(42);
        assert_eq!(pid.0, 42);
    }

    #[test]
    fn test_page_id_equality() {
        assert_eq!(PageId::new(5), PageId::new(5));
        assert_ne!(PageId::new(5), PageId::new(6));
    }

    #[test]
    fn test_page_id_display() {
        assert_eq!(format!("{}", PageId::new(8)), "8");
    }

    #[test]
    fn test_page_id_from_u32() {
        let pid: PageId = 7u32.into();
        assert_eq!(pid, PageId::new(7));
    }
}
