use leptos::prelude::*;
use leptos_router::components::Redirect;

use super::context::use_auth;

/// Renders `children` for a logged-in user, otherwise redirects to the login page
#[component]
pub fn RequireAuth(
    #[prop(optional, into)] redirect_to: Option<String>,
    children: ChildrenFn,
) -> impl IntoView {
    let (auth_state, _) = use_auth();
    let redirect_to = redirect_to.unwrap_or_else(|| "/login".to_string());

    view! {
        <Show
            when=move || auth_state.with(|s| s.is_authenticated())
            fallback=move || view! { <Redirect path=redirect_to.clone() /> }
        >
            {children()}
        </Show>
    }
}
