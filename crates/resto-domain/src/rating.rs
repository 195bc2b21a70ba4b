//! Review star ratings.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of stars attached to a review, always within `0..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct StarRating(u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("star rating must be between 0 and 5, got {0}")]
pub struct StarRatingOutOfRange(pub i64);

impl StarRating {
    pub const MIN: u8 = 0;
    pub const MAX: u8 = 5;

    pub fn new(stars: i64) -> Result<Self, StarRatingOutOfRange> {
        if (Self::MIN as i64..=Self::MAX as i64).contains(&stars) {
            Ok(Self(stars as u8))
        } else {
            Err(StarRatingOutOfRange(stars))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for StarRating {
    type Error = StarRatingOutOfRange;

    fn try_from(stars: i64) -> Result<Self, Self::Error> {
        Self::new(stars)
    }
}

impl From<StarRating> for u8 {
    fn from(rating: StarRating) -> Self {
        rating.0
    }
}

impl fmt::Display for StarRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
