use contracts::system::auth::Session;
use leptos::prelude::*;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub session: Option<Session>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }
}

/// Auth context provider component
///
/// The session lives in memory only; a page reload returns to the login gate.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState::default());

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

pub fn do_login(set_auth_state: WriteSignal<AuthState>, session: Session) {
    log::info!("Logged in as {}", session.display_phone());
    set_auth_state.set(AuthState {
        session: Some(session),
    });
}

pub fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    log::info!("Logged out");
    set_auth_state.set(AuthState::default());
}
