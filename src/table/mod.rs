//! Table number validation.
//!
//! The diner types a table number into a free-text field; [`parse_table_number`]
//! is the only way to obtain a [`TableNumber`], so any value of that type is
//! known to lie in [`TableNumber::MIN`]..=[`TableNumber::MAX`].

pub mod error;

pub use error::*;

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A table number confirmed to be within the restaurant's range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct TableNumber(u8);

impl TableNumber {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 50;

    pub fn get(self) -> u8 {
        self.0
    }
}

/// Validates raw form input as a table number.
///
/// Surrounding whitespace is ignored; the rest must parse entirely as an
/// integer in `1..=50`. Anything else yields [`TableError::InvalidTableNumber`].
pub fn parse_table_number(raw: &str) -> Result<TableNumber, TableError> {
    let invalid = || TableError::InvalidTableNumber {
        input: raw.to_string(),
    };

    let value: i64 = raw.trim().parse().map_err(|_| invalid())?;
    u32::try_from(value)
        .ok()
        .and_then(|value| TableNumber::try_from(value).ok())
        .ok_or_else(invalid)
}

impl TryFrom<u32> for TableNumber {
    type Error = TableError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match u8::try_from(value) {
            Ok(n) if (Self::MIN..=Self::MAX).contains(&n) => Ok(Self(n)),
            _ => Err(TableError::InvalidTableNumber {
                input: value.to_string(),
            }),
        }
    }
}

impl FromStr for TableNumber {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_table_number(s)
    }
}

impl fmt::Display for TableNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<TableNumber> for u8 {
    fn from(table: TableNumber) -> Self {
        table.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_accepts_every_table_in_range() {
        for n in 1..=50u8 {
            assert_eq!(parse_table_number(&n.to_string()).unwrap().get(), n);
        }
    }

    #[test]
    fn test_rejects_out_of_range_and_garbage() {
        for raw in ["", "   ", "0", "51", "-3", "abc", "5abc", "2.5", "1e1", "99999999999999999999"] {
            assert_eq!(
                parse_table_number(raw),
                Err(TableError::InvalidTableNumber {
                    input: raw.to_string()
                }),
                "input {raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_examples_from_the_form() {
        assert!(parse_table_number("51").is_err());
        assert!(parse_table_number("0").is_err());
        assert!(parse_table_number("abc").is_err());
        assert_eq!(parse_table_number("25").unwrap().get(), 25);
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        assert_eq!(parse_table_number(" 7\n").unwrap().get(), 7);
    }

    #[test]
    fn test_error_message_is_user_facing() {
        let err = parse_table_number("abc").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Veuillez entrer un numéro de table valide (1-50)"
        );
    }

    #[test]
    fn test_try_from_and_from_str_agree() {
        assert_eq!(TableNumber::try_from(12u32).unwrap(), "12".parse::<TableNumber>().unwrap());
        assert!(TableNumber::try_from(300u32).is_err());
        assert_eq!(TableNumber::try_from(50u32).unwrap().to_string(), "50");
    }

    proptest! {
        #[test]
        fn prop_in_range_integers_validate(n in 1u8..=50) {
            prop_assert_eq!(parse_table_number(&n.to_string()).map(TableNumber::get), Ok(n));
        }

        #[test]
        fn prop_out_of_range_integers_fail(n in any::<i64>().prop_filter("outside 1..=50", |n| !(1..=50).contains(n))) {
            prop_assert!(parse_table_number(&n.to_string()).is_err());
        }

        #[test]
        fn prop_non_numeric_input_fails(raw in "[a-zA-Z ]*") {
            prop_assert!(parse_table_number(&raw).is_err());
        }
    }
}
