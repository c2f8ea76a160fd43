//! Routing definitions for the Castellan UI.

use crate::features::resources::ResourceKind;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub(crate) enum Route {
    #[at("/")]
    Home,
    #[at("/events")]
    Events,
    #[at("/series")]
    Series,
    #[at("/recordings")]
    Recordings,
    #[at("/jobs")]
    Jobs,
    #[at("/servers")]
    Servers,
    #[at("/services")]
    Services,
    #[at("/users")]
    Users,
    #[at("/groups")]
    Groups,
    #[at("/acls")]
    Acls,
    #[at("/themes")]
    Themes,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Resource kind a route displays; the landing page shows events.
    pub(crate) const fn kind(&self) -> Option<ResourceKind> {
        match self {
            Self::Home | Self::Events => Some(ResourceKind::Events),
            Self::Series => Some(ResourceKind::Series),
            Self::Recordings => Some(ResourceKind::Recordings),
            Self::Jobs => Some(ResourceKind::Jobs),
            Self::Servers => Some(ResourceKind::Servers),
            Self::Services => Some(ResourceKind::Services),
            Self::Users => Some(ResourceKind::Users),
            Self::Groups => Some(ResourceKind::Groups),
            Self::Acls => Some(ResourceKind::Acls),
            Self::Themes => Some(ResourceKind::Themes),
            Self::NotFound => None,
        }
    }

    /// Route rendering the view for a resource kind.
    pub(crate) const fn for_kind(kind: ResourceKind) -> Self {
        match kind {
            ResourceKind::Events => Self::Events,
            ResourceKind::Series => Self::Series,
            ResourceKind::Recordings => Self::Recordings,
            ResourceKind::Jobs => Self::Jobs,
            ResourceKind::Servers => Self::Servers,
            ResourceKind::Services => Self::Services,
            ResourceKind::Users => Self::Users,
            ResourceKind::Groups => Self::Groups,
            ResourceKind::Acls => Self::Acls,
            ResourceKind::Themes => Self::Themes,
        }
    }
}
