//! Upstream payload records
//!
//! One record per upstream service. Absent and `null` fields decode to
//! their zero value so that only the service's status indicator decides
//! success.

use serde::{Deserialize, Deserializer, Serialize};

/// Treat an explicit `null` like an absent field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Bad joke service payload: `{id, joke, status}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BadJoke {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub joke: String,
    #[serde(deserialize_with = "null_as_default")]
    pub status: i64,
}

impl BadJoke {
    pub const SUCCESS_STATUS: i64 = 200;

    pub fn is_success(&self) -> bool {
        self.status == Self::SUCCESS_STATUS
    }
}

/// Chuck Norris service payload: `{type, value: {id, joke}}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChuckNorrisJoke {
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(deserialize_with = "null_as_default")]
    pub value: ChuckNorrisValue,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChuckNorrisValue {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub joke: String,
}

impl ChuckNorrisJoke {
    pub const SUCCESS_TYPE: &'static str = "success";

    pub fn is_success(&self) -> bool {
        self.kind == Self::SUCCESS_TYPE
    }
}

/// Evil insult service payload
///
/// The service reports failure with an empty insult, which is passed through as is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvilInsult {
    #[serde(deserialize_with = "null_as_default")]
    pub number: String,
    #[serde(deserialize_with = "null_as_default")]
    pub language: String,
    #[serde(deserialize_with = "null_as_default")]
    pub insult: String,
    #[serde(deserialize_with = "null_as_default")]
    pub created: String,
    #[serde(deserialize_with = "null_as_default")]
    pub shown: String,
    #[serde(deserialize_with = "null_as_default")]
    pub createby: String,
    #[serde(deserialize_with = "null_as_default")]
    pub active: String,
    #[serde(deserialize_with = "null_as_default")]
    pub comment: String,
}
