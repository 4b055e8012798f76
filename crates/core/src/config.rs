//! Session configuration.
//!
//! The dashboard personalises itself from three session values: the user's
//! role, display name, and avatar. These should be resolved once at process
//! startup and then passed into services - never read from process-wide
//! environment variables during request handling, which behaves
//! inconsistently in multi-threaded runtimes and test harnesses.
//!
//! None of the values are validated or authenticated; they are presentation
//! inputs taken on trust, and an absent or unrecognised value simply degrades
//! the dashboard (no greeting, empty menu).

use crate::navigation::{menu_for, MenuItem};
use hygia_types::Role;

/// Session identity resolved at startup.
#[derive(Clone, Debug, Default)]
pub struct SessionConfig {
    role: Option<Role>,
    user_name: Option<String>,
    avatar: Option<String>,
}

impl SessionConfig {
    /// Builds a `SessionConfig` from raw environment values.
    ///
    /// Blank values are treated as absent. A role string that does not name a
    /// known role is kept as "no role" rather than rejected.
    pub fn from_env_values(
        role: Option<String>,
        user_name: Option<String>,
        avatar: Option<String>,
    ) -> Self {
        let role = role.as_deref().map(str::trim).and_then(|r| r.parse().ok());
        let user_name = user_name.filter(|n| !n.trim().is_empty());
        let avatar = avatar.filter(|a| !a.trim().is_empty());
        Self {
            role,
            user_name,
            avatar,
        }
    }

    /// A session with no identity at all.
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn role(&self) -> Option<Role> {
        self.role
    }

    pub fn user_name(&self) -> Option<&str> {
        self.user_name.as_deref()
    }

    pub fn avatar(&self) -> Option<&str> {
        self.avatar.as_deref()
    }

    /// True when both a role and a user name are present. The dashboard only
    /// personalises itself for signed-in sessions.
    pub fn signed_in(&self) -> bool {
        self.role.is_some() && self.user_name.is_some()
    }

    /// Header greeting for a signed-in session, built from the first given
    /// name only.
    pub fn greeting(&self) -> Option<String> {
        if !self.signed_in() {
            return None;
        }
        let first = self.user_name.as_deref()?.split_whitespace().next()?;
        Some(format!("Welcome, {first}"))
    }

    /// Sidebar menu for the session's role; empty without one.
    pub fn menu(&self) -> &'static [MenuItem] {
        self.role.map(menu_for).unwrap_or(&[])
    }
}
