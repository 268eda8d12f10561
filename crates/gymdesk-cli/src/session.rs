//! Console session state machine.
//!
//! The console is a small state machine over four menu states: the
//! authentication menu plus one menu per role. Logging in moves from
//! [`MenuState::Auth`] to the menu matching the authenticated user's role;
//! logging out always returns to `Auth`. Exit is handled by the main loop,
//! not a state.

use gymdesk_storage::models::{Role, User};

/// Menu the console is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    /// Login / register / exit
    Auth,
    /// Full management menus
    Admin,
    /// Class management, purchases, reports
    Trainer,
    /// Browsing, purchases, reports
    Member,
}

impl MenuState {
    /// Menu shown to an authenticated user of the given role.
    pub fn for_role(role: Role) -> Self {
        match role {
            Role::Admin => Self::Admin,
            Role::Trainer => Self::Trainer,
            Role::Member => Self::Member,
        }
    }
}

/// Login session: the current menu state and the authenticated user, if any.
pub struct Session {
    state: MenuState,
    user: Option<User>,
}

impl Session {
    /// Start a fresh logged-out session at the auth menu.
    pub fn new() -> Self {
        Self {
            state: MenuState::Auth,
            user: None,
        }
    }

    /// Current menu state.
    pub fn state(&self) -> MenuState {
        self.state
    }

    /// The authenticated user, if logged in.
    pub fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Record a successful login and move to the role's menu.
    pub fn login(&mut self, user: User) {
        self.state = MenuState::for_role(user.role);
        self.user = Some(user);
    }

    /// Clear the session and return to the auth menu.
    pub fn logout(&mut self) {
        self.user = None;
        self.state = MenuState::Auth;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_with_role(role: Role) -> User {
        User::new(
            "test",
            "test@test.com",
            "5550100",
            "1 Gym Way",
            role,
            "$2b$04$testhashtesthashtesthash",
        )
    }

    #[test]
    fn test_new_session_starts_at_auth() {
        let session = Session::new();
        assert_eq!(session.state(), MenuState::Auth);
        assert!(session.current_user().is_none());
    }

    #[test]
    fn test_login_routes_by_role() {
        for (role, expected) in [
            (Role::Admin, MenuState::Admin),
            (Role::Trainer, MenuState::Trainer),
            (Role::Member, MenuState::Member),
        ] {
            let mut session = Session::new();
            session.login(user_with_role(role));
            assert_eq!(session.state(), expected);
            assert!(session.current_user().is_some());
        }
    }

    #[test]
    fn test_logout_returns_to_auth() {
        let mut session = Session::new();
        session.login(user_with_role(Role::Member));
        session.logout();

        assert_eq!(session.state(), MenuState::Auth);
        assert!(session.current_user().is_none());
    }
}
