use contracts::system::session::SessionInfo;
use leptos::prelude::*;

use super::storage;

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub session: Option<SessionInfo>,
}

impl AuthState {
    pub fn is_agency(&self) -> bool {
        self.session.as_ref().map(|s| s.is_agency()).unwrap_or(false)
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    // Сессия восстанавливается из localStorage без обращения к серверу
    let (auth_state, set_auth_state) = signal(AuthState {
        session: storage::load_session(),
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Store the session and switch the UI to the logged-in state
pub fn set_session(set_auth_state: WriteSignal<AuthState>, session: SessionInfo) {
    storage::save_session(&session);
    set_auth_state.set(AuthState {
        session: Some(session),
    });
}

pub fn logout(set_auth_state: WriteSignal<AuthState>) {
    storage::clear_session();
    set_auth_state.set(AuthState::default());
}
