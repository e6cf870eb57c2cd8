//! Simulated sign-in.
//!
//! Any credentials are accepted. Submitting the form starts a fixed delay,
//! after which the session is signed in. There is no failure path.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    LoggedOut,
    Authenticating { since: Instant },
    LoggedIn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Username,
    Password,
}

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub focus: LoginField,
    pub reveal_password: bool,
}

impl LoginForm {
    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            LoginField::Username => LoginField::Password,
            LoginField::Password => LoginField::Username,
        };
    }

    pub fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            LoginField::Username => &mut self.username,
            LoginField::Password => &mut self.password,
        }
    }

    /// Password as drawn on screen.
    pub fn password_display(&self) -> String {
        if self.reveal_password {
            self.password.clone()
        } else {
            "•".repeat(self.password.chars().count())
        }
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    state: SessionState,
    delay: Duration,
    pub form: LoginForm,
    user: Option<String>,
}

impl Session {
    pub fn new(delay: Duration) -> Self {
        Self {
            state: SessionState::LoggedOut,
            delay,
            form: LoginForm::default(),
            user: None,
        }
    }

    /// Start already signed in.
    pub fn signed_in(delay: Duration, user: &str) -> Self {
        Self {
            state: SessionState::LoggedIn,
            delay,
            form: LoginForm::default(),
            user: Some(user.to_string()),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_logged_in(&self) -> bool {
        self.state == SessionState::LoggedIn
    }

    pub fn is_authenticating(&self) -> bool {
        matches!(self.state, SessionState::Authenticating { .. })
    }

    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    /// Submit the form. Ignored unless signed out.
    pub fn submit(&mut self, now: Instant) -> bool {
        if self.state != SessionState::LoggedOut {
            return false;
        }
        self.state = SessionState::Authenticating { since: now };
        tracing::info!(user = %self.form.username, "sign-in submitted");
        true
    }

    /// Advance the delay. Returns true on the transition to signed in.
    pub fn tick(&mut self, now: Instant) -> bool {
        let SessionState::Authenticating { since } = self.state else {
            return false;
        };
        if now.saturating_duration_since(since) < self.delay {
            return false;
        }
        let name = self.form.username.trim();
        self.user = Some(if name.is_empty() {
            "Admin".to_string()
        } else {
            name.to_string()
        });
        self.state = SessionState::LoggedIn;
        self.form = LoginForm::default();
        tracing::info!(user = self.user.as_deref().unwrap_or_default(), "signed in");
        true
    }

    /// Fraction of the delay elapsed, for the spinner.
    pub fn progress(&self, now: Instant) -> f64 {
        match self.state {
            SessionState::LoggedOut => 0.0,
            SessionState::LoggedIn => 1.0,
            SessionState::Authenticating { since } => {
                if self.delay.is_zero() {
                    return 1.0;
                }
                let elapsed = now.saturating_duration_since(since).as_secs_f64();
                (elapsed / self.delay.as_secs_f64()).min(1.0)
            }
        }
    }

    pub fn logout(&mut self) {
        if self.state == SessionState::LoggedOut {
            return;
        }
        tracing::info!(user = self.user.as_deref().unwrap_or_default(), "signed out");
        self.state = SessionState::LoggedOut;
        self.user = None;
        self.form = LoginForm::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(1500);

    #[test]
    fn test_any_credentials_sign_in_after_delay() {
        let start = Instant::now();
        let mut session = Session::new(DELAY);
        assert!(session.submit(start));
        assert!(session.is_authenticating());

        assert!(!session.tick(start + Duration::from_millis(1499)));
        assert!(session.is_authenticating());

        assert!(session.tick(start + DELAY));
        assert!(session.is_logged_in());
        assert_eq!(session.user(), Some("Admin"));
    }

    #[test]
    fn test_submit_only_from_logged_out() {
        let start = Instant::now();
        let mut session = Session::new(DELAY);
        session.submit(start);
        assert!(!session.submit(start + Duration::from_millis(100)));
        assert_eq!(session.state(), SessionState::Authenticating { since: start });
    }

    #[test]
    fn test_logout_clears_user_and_form() {
        let mut session = Session::signed_in(DELAY, "maria");
        session.form.username.push_str("leftover");
        session.logout();
        assert_eq!(session.state(), SessionState::LoggedOut);
        assert_eq!(session.user(), None);
        assert!(session.form.username.is_empty());
    }

    #[test]
    fn test_password_is_masked_until_revealed() {
        let mut form = LoginForm::default();
        form.toggle_focus();
        form.focused_mut().push_str("hunter2");
        assert_eq!(form.password_display(), "•••••••");
        form.reveal_password = true;
        assert_eq!(form.password_display(), "hunter2");
    }

    #[test]
    fn test_tick_is_a_noop_when_not_authenticating() {
        let mut session = Session::new(DELAY);
        assert!(!session.tick(Instant::now()));
        assert_eq!(session.progress(Instant::now()), 0.0);
    }
}
