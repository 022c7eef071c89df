//! Closure scoping rules.

use jiff::civil::Date;

use crate::models::ClosureDate;

/// Whether a closure's scope covers a lesson at `location_id`.
///
/// All-location closures always apply. A location-specific closure only
/// applies to the same location, and a closure without a location only
/// applies to a query without one.
pub fn applies_to(closure: &ClosureDate, location_id: Option<&str>) -> bool {
    closure.applies_to_all_locations || closure.location_id.as_deref() == location_id
}

/// Returns the first closure on `date` whose scope covers `location_id`.
pub fn is_closure_date<'a>(
    closures: &'a [ClosureDate],
    date: Date,
    location_id: Option<&str>,
) -> Option<&'a ClosureDate> {
    closures
        .iter()
        .find(|closure| closure.date == date && applies_to(closure, location_id))
}

/// Returns every closure on `date`, whatever its scope.
pub fn closures_for_date(closures: &[ClosureDate], date: Date) -> Vec<&ClosureDate> {
    closures.iter().filter(|closure| closure.date == date).collect()
}
