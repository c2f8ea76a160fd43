//! Resource types and their static table configuration.

use serde::{Deserialize, Serialize};

pub mod registry;
pub mod rows;
pub mod state;

/// The ten manageable resource types of the platform.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    /// Recorded or scheduled events.
    Events,
    /// Series grouping related events.
    Series,
    /// Capture agents and their recording state.
    Recordings,
    /// Processing jobs.
    Jobs,
    /// Worker servers.
    Servers,
    /// Services running on the servers.
    Services,
    /// User accounts.
    Users,
    /// User groups.
    Groups,
    /// Access-control lists.
    Acls,
    /// Branding themes.
    Themes,
}

impl ResourceKind {
    /// All resource kinds in navigation order.
    pub const ALL: [Self; 10] = [
        Self::Events,
        Self::Series,
        Self::Recordings,
        Self::Jobs,
        Self::Servers,
        Self::Services,
        Self::Users,
        Self::Groups,
        Self::Acls,
        Self::Themes,
    ];

    /// API path segment and storage key for this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Events => "events",
            Self::Series => "series",
            Self::Recordings => "recordings",
            Self::Jobs => "jobs",
            Self::Servers => "servers",
            Self::Services => "services",
            Self::Users => "users",
            Self::Groups => "groups",
            Self::Acls => "acls",
            Self::Themes => "themes",
        }
    }

    /// Position of this kind inside [`Self::ALL`], used for slice storage.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Whether rows of this kind participate in bulk actions.
    #[must_use]
    pub const fn supports_bulk_actions(self) -> bool {
        matches!(self, Self::Events | Self::Series)
    }

    /// Background refresh cadence while a view of this kind is active.
    #[must_use]
    pub const fn refresh_interval_ms(self) -> u32 {
        match self {
            Self::Events | Self::Jobs => 5_000,
            Self::Recordings | Self::Servers | Self::Services => 10_000,
            Self::Series => 30_000,
            Self::Users | Self::Groups => 60_000,
            Self::Acls | Self::Themes => 100_000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_kinds_have_distinct_path_segments() {
        for (left, kind) in ResourceKind::ALL.iter().enumerate() {
            for other in &ResourceKind::ALL[left + 1..] {
                assert_ne!(kind.as_str(), other.as_str());
            }
        }
    }

    #[test]
    fn index_matches_position_in_all() {
        for (position, kind) in ResourceKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), position);
        }
    }

    #[test]
    fn bulk_actions_are_limited_to_events_and_series() {
        assert!(ResourceKind::Events.supports_bulk_actions());
        assert!(ResourceKind::Series.supports_bulk_actions());
        assert!(!ResourceKind::Jobs.supports_bulk_actions());
        assert!(!ResourceKind::Users.supports_bulk_actions());
    }

    #[test]
    fn refresh_cadence_stays_within_expected_band() {
        for kind in ResourceKind::ALL {
            let interval = kind.refresh_interval_ms();
            assert!((5_000..=100_000).contains(&interval));
        }
    }
}
