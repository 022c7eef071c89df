//! Collection wrapper types for displaying groups of domain objects.

use std::{fmt, ops::Index};

use crate::models::ClosureDate;

/// Newtype wrapper for displaying a list of closure dates.
///
/// Handles empty collections gracefully.
///
/// # Examples
///
/// ```rust
/// use jiff::civil::date;
/// use lessonloop_core::{display::Closures, models::ClosureDate};
///
/// let closures = Closures(vec![
///     ClosureDate::all_locations(date(2025, 12, 25), "Christmas Day").with_id(1),
/// ]);
/// assert!(closures.to_string().contains("25/12/2025: Christmas Day"));
/// assert_eq!(Closures(vec![]).to_string(), "No closure dates found.\n");
/// ```
pub struct Closures(pub Vec<ClosureDate>);

impl Closures {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of closures in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the closures.
    pub fn iter(&self) -> std::slice::Iter<'_, ClosureDate> {
        self.0.iter()
    }
}

impl Index<usize> for Closures {
    type Output = ClosureDate;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for Closures {
    type Item = ClosureDate;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Closures {
    type Item = &'a ClosureDate;
    type IntoIter = std::slice::Iter<'a, ClosureDate>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Closures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No closure dates found.")
        } else {
            for closure in &self.0 {
                write!(f, "{closure}")?;
            }
            Ok(())
        }
    }
}
