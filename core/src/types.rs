//! Domain DTOs for the bored API.
//!
//! # Design
//! The service answers every request with one of two JSON shapes: an idea or
//! an `{"error": ...}` object. `ActivityResponse` makes that explicit and adds
//! a third case for bodies that carry neither, so callers must decide what an
//! empty answer means instead of dereferencing something that is not there.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

/// One activity suggestion returned by the API.
///
/// Missing or `null` fields decode to their zero value; only a field of the
/// wrong type is an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Idea {
    #[serde(deserialize_with = "null_as_default")]
    pub activity: String,
    /// 0.0 is the most accessible.
    #[serde(deserialize_with = "null_as_default")]
    pub accessibility: f64,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(deserialize_with = "null_as_default")]
    pub participants: u32,
    /// 0.0 is free.
    #[serde(deserialize_with = "null_as_default")]
    pub price: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub link: String,
    #[serde(deserialize_with = "null_as_default")]
    pub key: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Error payload the service sends instead of an idea.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResult {
    pub error: String,
}

/// Decoded body of an activity request.
#[derive(Debug, Clone, PartialEq)]
pub enum ActivityResponse {
    Idea(Idea),
    Rejected(ErrorResult),
    /// The body was a JSON object with neither `activity` nor `error`.
    Empty,
}

/// Activity categories the service understands.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Education,
    Recreational,
    Social,
    Diy,
    Charity,
    Cooking,
    Relaxation,
    Music,
    Busywork,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::Education,
        Category::Recreational,
        Category::Social,
        Category::Diy,
        Category::Charity,
        Category::Cooking,
        Category::Relaxation,
        Category::Music,
        Category::Busywork,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Education => "education",
            Category::Recreational => "recreational",
            Category::Social => "social",
            Category::Diy => "diy",
            Category::Charity => "charity",
            Category::Cooking => "cooking",
            Category::Relaxation => "relaxation",
            Category::Music => "music",
            Category::Busywork => "busywork",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Matching is exact: the service does not accept `Music` or ` music`.
impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| s.to_string())
    }
}
