//! 1-5 star ratings used by applications, interviews and feedback.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A rating on the 1-5 scale.
///
/// Columns are `SMALLINT` with a matching `CHECK`; this type rejects
/// out-of-range values before they reach the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i16", into = "i16")]
pub struct Rating(i16);

impl Rating {
    pub const MIN: i16 = 1;
    pub const MAX: i16 = 5;

    pub fn new(value: i16) -> Result<Self, CoreError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(CoreError::Validation(format!(
                "Rating must be between {} and {}, got {value}",
                Self::MIN,
                Self::MAX
            )))
        }
    }

    pub fn get(self) -> i16 {
        self.0
    }
}

impl TryFrom<i16> for Rating {
    type Error = CoreError;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for i16 {
    fn from(value: Rating) -> Self {
        value.0
    }
}
