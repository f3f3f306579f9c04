use peta_boundary::Session;

/// Auth notification pushed by the auth service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthEvent {
    SignedIn,
    SignedOut,
    TokenRefreshed,
    UserUpdated,
    /// The user followed a password-recovery link; the application must
    /// render only the password-reset screen until recovery completes.
    PasswordRecovery,
}

/// Routing-relevant authentication state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    /// The one-time startup session check has not resolved yet.
    Loading,
    Anonymous,
    Authenticated,
    Recovery,
}

/// Tracks the current session reference and the sticky recovery flag.
///
/// The session itself is owned by the external auth service; the gate only
/// holds a transient reference that every auth notification replaces.
#[derive(Debug, Default)]
pub struct SessionGate {
    session: Option<Session>,
    recovery: bool,
    resolved: bool,
}

impl SessionGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Outcome of the one-time startup session check.
    ///
    /// Auth-service failures are indistinguishable from "no session": both
    /// resolve to the anonymous state.
    pub fn resolve_initial(&mut self, session: Option<Session>) {
        self.session = session;
        self.resolved = true;
    }

    /// Applies a pushed auth notification. The supplied session always
    /// replaces the stored reference; a recovery notification additionally
    /// forces the gate into recovery mode until [`Self::complete_recovery`].
    pub fn handle_event(&mut self, event: AuthEvent, session: Option<Session>) {
        if event == AuthEvent::PasswordRecovery {
            self.recovery = true;
        }
        self.session = session;
        self.resolved = true;
    }

    /// Returns to normal routing after a successful password update.
    pub fn complete_recovery(&mut self) {
        self.recovery = false;
    }

    /// Clears all local state after signing out.
    pub fn sign_out(&mut self) {
        self.session = None;
        self.recovery = false;
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn state(&self) -> GateState {
        if self.recovery {
            GateState::Recovery
        } else if !self.resolved {
            GateState::Loading
        } else if self.session.is_some() {
            GateState::Authenticated
        } else {
            GateState::Anonymous
        }
    }
}

/// Access token carried by the recovery redirect of the auth service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecoveryToken {
    pub access_token: String,
}

/// Extracts the recovery token from a URL hash fragment, if the fragment
/// announces an in-progress password recovery.
pub fn recovery_from_fragment(fragment: &str) -> Option<RecoveryToken> {
    let fragment = fragment.trim_start_matches('#');
    let mut access_token = None;
    let mut is_recovery = false;
    for pair in fragment.split('&') {
        match pair.split_once('=') {
            Some(("access_token", value)) => access_token = Some(value.to_owned()),
            Some(("type", "recovery")) => is_recovery = true,
            _ => {}
        }
    }
    if !is_recovery {
        return None;
    }
    access_token.map(|access_token| RecoveryToken { access_token })
}

#[cfg(test)]
mod tests {
    use peta_boundary::AuthUser;

    use super::*;

    fn session() -> Session {
        Session {
            access_token: "token".into(),
            token_type: "bearer".into(),
            expires_in: 3600,
            refresh_token: "refresh".into(),
            user: AuthUser {
                id: "u1".into(),
                email: "admin@example.com".into(),
            },
        }
    }

    #[test]
    fn startup_check_resolves_loading() {
        let mut gate = SessionGate::new();
        assert_eq!(GateState::Loading, gate.state());
        gate.resolve_initial(None);
        assert_eq!(GateState::Anonymous, gate.state());

        let mut gate = SessionGate::new();
        gate.resolve_initial(Some(session()));
        assert_eq!(GateState::Authenticated, gate.state());
    }

    #[test]
    fn recovery_event_overrides_any_state() {
        let mut gate = SessionGate::new();
        gate.handle_event(AuthEvent::PasswordRecovery, None);
        assert_eq!(GateState::Recovery, gate.state());

        let mut gate = SessionGate::new();
        gate.resolve_initial(Some(session()));
        gate.handle_event(AuthEvent::PasswordRecovery, Some(session()));
        assert_eq!(GateState::Recovery, gate.state());
    }

    #[test]
    fn complete_recovery_restores_the_session_implied_state() {
        let mut gate = SessionGate::new();
        gate.resolve_initial(None);
        gate.handle_event(AuthEvent::PasswordRecovery, Some(session()));
        gate.complete_recovery();
        assert_eq!(GateState::Authenticated, gate.state());

        let mut gate = SessionGate::new();
        gate.resolve_initial(None);
        gate.handle_event(AuthEvent::PasswordRecovery, None);
        gate.complete_recovery();
        assert_eq!(GateState::Anonymous, gate.state());
    }

    #[test]
    fn sign_out_clears_session_and_recovery_flag() {
        let mut gate = SessionGate::new();
        gate.resolve_initial(Some(session()));
        gate.handle_event(AuthEvent::PasswordRecovery, Some(session()));
        gate.sign_out();
        assert_eq!(GateState::Anonymous, gate.state());
        assert!(gate.session().is_none());
    }

    #[test]
    fn every_event_replaces_the_session_reference() {
        let mut gate = SessionGate::new();
        gate.resolve_initial(Some(session()));
        gate.handle_event(AuthEvent::SignedOut, None);
        assert_eq!(GateState::Anonymous, gate.state());

        gate.handle_event(AuthEvent::SignedIn, Some(session()));
        assert_eq!(GateState::Authenticated, gate.state());

        gate.handle_event(AuthEvent::TokenRefreshed, Some(session()));
        assert_eq!(GateState::Authenticated, gate.state());
    }

    #[test]
    fn recovery_fragment_is_detected() {
        let token = recovery_from_fragment("#access_token=abc&expires_in=3600&type=recovery");
        assert_eq!(
            Some(RecoveryToken {
                access_token: "abc".into()
            }),
            token
        );
    }

    #[test]
    fn other_fragments_are_ignored() {
        assert_eq!(None, recovery_from_fragment(""));
        assert_eq!(None, recovery_from_fragment("#access_token=abc&type=signup"));
        assert_eq!(None, recovery_from_fragment("#type=recovery"));
        assert_eq!(None, recovery_from_fragment("#/admin"));
    }
}
