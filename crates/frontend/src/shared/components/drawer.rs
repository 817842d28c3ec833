use crate::shared::icons::icon;
use contracts::shared::config::AppConfig;
use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Side panel for add/edit forms.
///
/// Mount it only while open. Close requests (x button, overlay click, Escape)
/// play the slide-out first and call `on_close` after `drawer.close_delay_ms`.
#[component]
pub fn Drawer(
    #[prop(into)] title: Signal<String>,
    on_close: Callback<()>,
    /// Buttons rendered in the header next to the close button
    #[prop(optional)]
    actions: Option<ChildrenFn>,
    children: Children,
) -> impl IntoView {
    let config = use_context::<AppConfig>().expect("AppConfig not found in context");
    let delay = config.drawer.close_delay_ms;
    let closing = RwSignal::new(false);

    let request_close = move || {
        if closing.get_untracked() {
            return;
        }
        closing.set(true);
        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            on_close.run(());
        });
    };

    let escape = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" {
            request_close();
        }
    });
    on_cleanup(move || escape.remove());

    view! {
        <div class="drawer-overlay" class:drawer-overlay--closing=move || closing.get() on:click=move |_| request_close()>
            <aside
                class="drawer"
                class:drawer--closing=move || closing.get()
                on:click=|ev: ev::MouseEvent| ev.stop_propagation()
            >
                <div class="drawer__header">
                    <h2 class="drawer__title">{move || title.get()}</h2>
                    <div class="drawer__actions">
                        {actions.map(|actions| actions())}
                        <button class="button button--icon" title="Close" on:click=move |_| request_close()>
                            {icon("x")}
                        </button>
                    </div>
                </div>
                <div class="drawer__body">{children()}</div>
            </aside>
        </div>
    }
}
