//! User records as delivered by the leaderboard server.
//!
//! The server payload is loosely typed: numbers arrive as text or as JSON
//! numbers, the display name lives under `fullName` or `name`, and the id key
//! varies between backends. [`RawUserRecord`] accepts all of those shapes and
//! [`UserRecord::try_from`] validates it into the typed record the ranking
//! engine consumes.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::DecodeError;

/// A JSON scalar that may be sent either as a string or as a number.
///
/// Anything else (booleans, arrays, objects) lands in `Other` and reads as
/// empty text, so a mistyped field degrades its own record only.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TextOrNumber {
    Text(String),
    Number(serde_json::Number),
    Other(serde_json::Value),
}

impl TextOrNumber {
    /// The value as text, numbers keeping their JSON spelling.
    pub fn into_text(self) -> String {
        match self {
            TextOrNumber::Text(text) => text,
            TextOrNumber::Number(number) => number.to_string(),
            TextOrNumber::Other(_) => String::new(),
        }
    }

    /// The value only if the server sent a string.
    pub fn into_string(self) -> Option<String> {
        match self {
            TextOrNumber::Text(text) => Some(text),
            _ => None,
        }
    }
}

/// A user record exactly as the server sends it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawUserRecord {
    #[serde(default, alias = "_id", alias = "userID", alias = "userId")]
    pub id: Option<TextOrNumber>,
    #[serde(default)]
    pub full_name: Option<TextOrNumber>,
    #[serde(default)]
    pub name: Option<TextOrNumber>,
    #[serde(default, rename = "imageURL", alias = "imageUrl")]
    pub image_url: Option<TextOrNumber>,
    #[serde(default)]
    pub carbon_emission: Option<TextOrNumber>,
    #[serde(default, deserialize_with = "truthy")]
    pub is_friend: bool,
}

/// Read any JSON value as a flag: `null`, `false`, `0` and `""` are false.
fn truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    use serde_json::Value;

    Ok(match Value::deserialize(deserializer)? {
        Value::Null => false,
        Value::Bool(flag) => flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    })
}

/// Body of `GET /user/leaderboard`.
///
/// Users stay untyped here so each one is validated on its own.
#[derive(Debug, Clone, Deserialize)]
pub struct LeaderboardPayload {
    pub users: Vec<serde_json::Value>,
}

/// A validated user record.
///
/// `carbon_emission` stays text: parsing it is the ranking engine's job so
/// that a bad value only demotes its own record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserRecord {
    pub id: String,
    pub display_name: String,
    pub avatar_ref: Option<String>,
    pub carbon_emission: String,
    pub is_friend: bool,
}

impl UserRecord {
    /// Create a record with no avatar.
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        carbon_emission: impl Into<String>,
        is_friend: bool,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            avatar_ref: None,
            carbon_emission: carbon_emission.into(),
            is_friend,
        }
    }

    /// Builder-style setter for the avatar reference.
    pub fn with_avatar(mut self, avatar_ref: impl Into<String>) -> Self {
        self.avatar_ref = Some(avatar_ref.into());
        self
    }
}

impl TryFrom<RawUserRecord> for UserRecord {
    type Error = DecodeError;

    /// Validate a raw record. Only a missing id is fatal for the record;
    /// the index in the error is filled in by [`decode_records`].
    /// A record with no usable name is shown under its id.
    fn try_from(raw: RawUserRecord) -> Result<Self, Self::Error> {
        let id = raw
            .id
            .map(TextOrNumber::into_text)
            .filter(|id| !id.trim().is_empty())
            .ok_or(DecodeError::MissingId { index: 0 })?;

        let display_name = [raw.full_name, raw.name]
            .into_iter()
            .flatten()
            .map(TextOrNumber::into_text)
            .find(|name| !name.trim().is_empty())
            .unwrap_or_else(|| id.clone());

        Ok(Self {
            id,
            display_name,
            avatar_ref: raw
                .image_url
                .and_then(TextOrNumber::into_string)
                .filter(|url| !url.is_empty()),
            carbon_emission: raw
                .carbon_emission
                .map(TextOrNumber::into_text)
                .unwrap_or_default(),
            is_friend: raw.is_friend,
        })
    }
}

/// Outcome of validating a payload: accepted records in server order plus
/// the per-record rejections.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DecodedRecords {
    pub records: Vec<UserRecord>,
    pub rejected: Vec<DecodeError>,
}

/// Decode and validate a leaderboard body.
///
/// A body that is not a leaderboard payload fails as a whole. Individual
/// records that are not objects or carry no id are dropped and reported in
/// `rejected`; mistyped fields inside a record only degrade that record.
pub fn decode_records(body: &[u8]) -> Result<DecodedRecords, DecodeError> {
    let payload: LeaderboardPayload = serde_json::from_slice(body)?;
    let mut decoded = DecodedRecords::default();

    for (index, value) in payload.users.into_iter().enumerate() {
        let raw = match serde_json::from_value::<RawUserRecord>(value) {
            Ok(raw) => raw,
            Err(err) => {
                tracing::warn!("Dropping leaderboard record #{}: {}", index, err);
                decoded.rejected.push(DecodeError::InvalidRecord {
                    index,
                    message: err.to_string(),
                });
                continue;
            }
        };

        match UserRecord::try_from(raw) {
            Ok(record) => decoded.records.push(record),
            Err(DecodeError::MissingId { .. }) => {
                tracing::warn!("Dropping leaderboard record #{}: no id", index);
                decoded.rejected.push(DecodeError::MissingId { index });
            }
            Err(err) => decoded.rejected.push(err),
        }
    }

    Ok(decoded)
}
