use serde::{Deserialize, Serialize};

/// Booking history for one employee from the `employees` collection,
/// keyed by their w3 id.
///
/// `seats_booked` carries set semantics and only ever grows; releasing a
/// seat does not remove it from the history.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Employee {
    pub w3_id: String,
    pub name: String,
    #[serde(default)]
    pub seats_booked: Vec<i32>,
}
