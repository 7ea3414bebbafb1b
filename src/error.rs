use std::fmt;


/// Returned when looking up a key that isn't in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ElementNotFound;

impl fmt::Display for ElementNotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("element not found")
    }
}

impl std::error::Error for ElementNotFound {}
