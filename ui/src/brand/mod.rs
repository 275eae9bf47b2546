//! Identity pieces shared by every page: logo, footer, theme and the
//! outbound link set.

pub mod footer;
pub mod links;
pub mod logo;
pub mod theme;
