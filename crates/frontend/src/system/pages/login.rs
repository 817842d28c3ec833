use contracts::shared::config::AppConfig;
use contracts::system::auth::{
    login, mask_otp_input, mask_phone_input, validate_phone, LoginStep,
};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use thaw::*;

use crate::system::auth::context::{do_login, use_auth};

/// Ticks `countdown` down to zero once per second.
///
/// A newer run bumps `generation`, which stops older loops; a disposed signal
/// (page left) stops it too.
fn start_countdown(countdown: RwSignal<u32>, generation: RwSignal<u32>, seconds: u32) {
    let Some(run) = generation.try_update(|g| {
        *g += 1;
        *g
    }) else {
        return;
    };
    countdown.set(seconds);

    spawn_local(async move {
        loop {
            TimeoutFuture::new(1_000).await;
            if generation.try_get_untracked() != Some(run) {
                break;
            }
            let remaining = countdown.try_update(|c| {
                *c = c.saturating_sub(1);
                *c
            });
            if remaining.unwrap_or(0) == 0 {
                break;
            }
        }
    });
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let config = use_context::<AppConfig>().expect("AppConfig not found in context");
    let login_config = StoredValue::new(config.login.clone());
    let home_route = config.app.home_route.clone();

    let (_, set_auth_state) = use_auth();
    let navigate = use_navigate();

    let step = RwSignal::new(LoginStep::Phone);
    let country_code = RwSignal::new(
        config
            .login
            .country_codes
            .first()
            .map(|c| c.code.clone())
            .unwrap_or_default(),
    );
    let phone = RwSignal::new(String::new());
    let otp = RwSignal::new(String::new());
    let error_message = RwSignal::new(None::<String>);
    let countdown = RwSignal::new(0u32);
    let countdown_generation = RwSignal::new(0u32);

    let resend_seconds = config.login.resend_seconds;

    let submit_phone = move || match validate_phone(&phone.get_untracked()) {
        Ok(_) => {
            error_message.set(None);
            step.set(LoginStep::Otp);
            log::info!("OTP requested for {}", phone.get_untracked());
            start_countdown(countdown, countdown_generation, resend_seconds);
        }
        Err(e) => error_message.set(Some(e.to_string())),
    };

    let submit_otp = move || {
        let expected = login_config.with_value(|c| c.demo_otp.clone());
        match login(
            &country_code.get_untracked(),
            &phone.get_untracked(),
            &otp.get_untracked(),
            &expected,
        ) {
            Ok(session) => {
                error_message.set(None);
                do_login(set_auth_state, session);
                navigate(&home_route, Default::default());
            }
            Err(e) => {
                log::warn!("Login rejected: {}", e);
                error_message.set(Some(e.to_string()));
            }
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match step.get_untracked() {
            LoginStep::Phone => submit_phone(),
            LoginStep::Otp => submit_otp(),
        }
    };

    let resend = move |_| {
        otp.set(String::new());
        error_message.set(None);
        log::info!("OTP resent");
        start_countdown(countdown, countdown_generation, resend_seconds);
    };

    let back = move |_| {
        otp.set(String::new());
        error_message.set(None);
        countdown_generation.update(|g| *g += 1);
        countdown.set(0);
        step.set(LoginStep::Phone);
    };

    let country_options = move || {
        login_config.with_value(|c| {
            c.country_codes
                .iter()
                .map(|c| {
                    let code = c.code.clone();
                    view! { <option value=code>{c.label.clone()}</option> }
                })
                .collect_view()
        })
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>{config.app.title.clone()}</h1>
                <h2>
                    {move || match step.get() {
                        LoginStep::Phone => "Sign in with your phone",
                        LoginStep::Otp => "Enter the verification code",
                    }}
                </h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <Show
                        when=move || step.get() == LoginStep::Phone
                        fallback=move || view! {
                            <div class="form-group">
                                <label for="otp">
                                    {move || format!("OTP sent to {} {}", country_code.get(), mask_phone_input(&phone.get()))}
                                </label>
                                <input
                                    type="text"
                                    id="otp"
                                    inputmode="numeric"
                                    placeholder="XXX-XXX"
                                    prop:value=move || otp.get()
                                    on:input=move |ev| otp.set(mask_otp_input(&event_target_value(&ev)))
                                />
                            </div>
                            <div class="login-resend">
                                <Show
                                    when=move || countdown.get() == 0
                                    fallback=move || view! {
                                        <span>{move || format!("Resend OTP in {}s", countdown.get())}</span>
                                    }
                                >
                                    <Button appearance=ButtonAppearance::Transparent on_click=resend>
                                        "Resend OTP"
                                    </Button>
                                </Show>
                            </div>
                        }
                    >
                        <div class="form-group">
                            <label for="phone">"Phone number"</label>
                            <div class="login-phone">
                                <Select value=country_code>
                                    {country_options()}
                                </Select>
                                <input
                                    type="tel"
                                    id="phone"
                                    placeholder="XXX-XXX-XXXX"
                                    prop:value=move || phone.get()
                                    on:input=move |ev| phone.set(mask_phone_input(&event_target_value(&ev)))
                                />
                            </div>
                        </div>
                    </Show>

                    <div class="login-actions">
                        <button type="submit" class="button button--primary">
                            {move || match step.get() {
                                LoginStep::Phone => "Send OTP",
                                LoginStep::Otp => "Verify",
                            }}
                        </button>
                        <Show when=move || step.get() == LoginStep::Otp>
                            <button type="button" class="button button--secondary" on:click=back>
                                "Change number"
                            </button>
                        </Show>
                    </div>
                </form>
            </div>
        </div>
    }
}
