//! # Viewers
//!
//! Who is looking at an event page. Only the owning organizer and platform
//! administrators are authorized to see full data regardless of the public
//! toggles; everyone else goes through the visibility rules.

use serde::{Deserialize, Serialize};

use evt_core::OrganizerId;

/// The viewer of an event page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Viewer {
    /// Not signed in.
    Anonymous,
    /// Signed-in voter or ticket buyer.
    Member {
        /// Account identifier.
        id: String,
    },
    /// Signed-in organizer account.
    Organizer {
        /// Organizer identifier.
        id: OrganizerId,
    },
    /// Platform administrator.
    Admin,
    /// Platform super-administrator.
    SuperAdmin,
}

impl Viewer {
    /// Whether this viewer sees full data for an event owned by `owner`.
    ///
    /// An organizer is authorized only for their own events.
    pub fn is_authorized_for(&self, owner: Option<&OrganizerId>) -> bool {
        match self {
            Self::Admin | Self::SuperAdmin => true,
            Self::Organizer { id } => owner == Some(id),
            Self::Anonymous | Self::Member { .. } => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn org(id: &str) -> OrganizerId {
        OrganizerId::new(id).unwrap()
    }

    #[test]
    fn test_admins_always_authorized() {
        assert!(Viewer::Admin.is_authorized_for(None));
        assert!(Viewer::SuperAdmin.is_authorized_for(Some(&org("org_1"))));
    }

    #[test]
    fn test_organizer_only_for_own_event() {
        let viewer = Viewer::Organizer { id: org("org_1") };
        assert!(viewer.is_authorized_for(Some(&org("org_1"))));
        assert!(!viewer.is_authorized_for(Some(&org("org_2"))));
        assert!(!viewer.is_authorized_for(None));
    }

    #[test]
    fn test_public_viewers_not_authorized() {
        let owner = org("org_1");
        assert!(!Viewer::Anonymous.is_authorized_for(Some(&owner)));
        let member = Viewer::Member {
            id: "org_1".to_string(),
        };
        assert!(!member.is_authorized_for(Some(&owner)));
    }

    #[test]
    fn test_tagged_json() {
        let v: Viewer = serde_json::from_str(r#"{"role":"ORGANIZER","id":"org_7"}"#).unwrap();
        assert_eq!(v, Viewer::Organizer { id: org("org_7") });
        let v: Viewer = serde_json::from_str(r#"{"role":"SUPER_ADMIN"}"#).unwrap();
        assert_eq!(v, Viewer::SuperAdmin);
    }
}
