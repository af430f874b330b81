//! Weekday enumeration with a derived weekend predicate

use std::fmt;

use serde::{Deserialize, Serialize};

/// Day of the week, Monday first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weekday {
    /// First weekday
    Monday,
    /// Second weekday
    Tuesday,
    /// Third weekday
    Wednesday,
    /// Fourth weekday
    Thursday,
    /// Fifth weekday
    Friday,
    /// First weekend day
    Saturday,
    /// Second weekend day
    Sunday,
}

impl Weekday {
    /// All seven variants in declaration order
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// True only for Saturday and Sunday
    pub fn is_weekend(self) -> bool {
        matches!(self, Weekday::Saturday | Weekday::Sunday)
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        };
        f.write_str(name)
    }
}
