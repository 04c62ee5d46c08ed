//! # Phase Banner
//!
//! Picks the call-to-action shown at the top of a public event page.
//! Reads only the resolved phase and open flags.

use serde::{Deserialize, Serialize};

use evt_core::Timestamp;

use crate::resolver::{Phase, PhaseResult};

/// Banner variant for an event page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Banner {
    /// "Voting is live".
    VotingLive,
    /// "Nominations are open".
    NominationsOpen,
    /// "Coming soon", with the opening instant when known.
    ComingSoon {
        /// When the next window opens.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        opens_at: Option<Timestamp>,
    },
    /// "This event has ended".
    Closed,
    /// No banner.
    Hidden,
}

impl Banner {
    /// Banner for a resolved phase. Voting wins over nominations.
    pub fn for_phase(result: &PhaseResult) -> Self {
        if result.is_voting_open {
            return Self::VotingLive;
        }
        if result.is_nomination_open {
            return Self::NominationsOpen;
        }
        match result.phase {
            Phase::Upcoming => Self::ComingSoon {
                opens_at: result.opens_at,
            },
            Phase::Ended => Self::Closed,
            Phase::Nomination | Phase::Voting | Phase::Inactive => Self::Hidden,
        }
    }
}

impl From<&PhaseResult> for Banner {
    fn from(result: &PhaseResult) -> Self {
        Self::for_phase(result)
    }
}
