//! The user looking at the leaderboard.

use crate::domain::Emission;
use crate::models::UserRecord;

/// Identity and own score of the viewing user.
///
/// Passed into the view layer explicitly; nothing reads it from ambient
/// storage.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewer {
    pub id: String,
    pub display_name: String,
    pub avatar_ref: Option<String>,
    pub carbon_emission: Emission,
}

impl Viewer {
    /// A viewer known only by id, before records have been fetched.
    pub fn from_id(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            display_name: id.clone(),
            id,
            avatar_ref: None,
            carbon_emission: Emission::UNRANKABLE,
        }
    }

    /// Build the viewer profile from the viewer's own record.
    pub fn from_record(record: &UserRecord) -> Self {
        Self {
            id: record.id.clone(),
            display_name: record.display_name.clone(),
            avatar_ref: record.avatar_ref.clone(),
            carbon_emission: Emission::parse(&record.carbon_emission),
        }
    }

    /// Resolve a viewer id against a fetched record batch.
    ///
    /// Falls back to an id-only profile when the viewer is not in the batch.
    pub fn resolve(id: &str, records: &[UserRecord]) -> Self {
        records
            .iter()
            .find(|record| record.id == id)
            .map(Self::from_record)
            .unwrap_or_else(|| Self::from_id(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_found() {
        let records = vec![
            UserRecord::new("u1", "Ada", "3.5", false).with_avatar("ada.png"),
            UserRecord::new("u2", "Bo", "1", true),
        ];

        let viewer = Viewer::resolve("u1", &records);
        assert_eq!(viewer.display_name, "Ada");
        assert_eq!(viewer.avatar_ref.as_deref(), Some("ada.png"));
        assert_eq!(viewer.carbon_emission.value(), 3.5);
    }

    #[test]
    fn test_resolve_missing_falls_back_to_id() {
        let viewer = Viewer::resolve("ghost", &[]);
        assert_eq!(viewer, Viewer::from_id("ghost"));
        assert!(!viewer.carbon_emission.is_valid());
    }
}
