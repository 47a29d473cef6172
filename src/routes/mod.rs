//! Role-gated pages and navigation. A pure function of the current session:
//! no network calls, no state.

pub mod guard;
pub mod nav;

pub use guard::{authorize, authorize_path, find_route, home_path, Access, Audience, Route, ROUTES};
pub use nav::{has_permission, visible_items, NavItem, Permission, NAV_ITEMS};
