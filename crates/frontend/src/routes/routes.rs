use crate::domain::a001_layout::ui::details::LayoutDetails;
use crate::domain::a001_layout::ui::list::LayoutList;
use crate::domain::a002_plot::ui::details::PlotDetails;
use crate::domain::a003_customer::ui::list::CustomerList;
use crate::domain::a004_price::ui::list::PricingPage;
use crate::domain::a005_coupon::ui::list::CouponList;
use crate::layout::Shell;
use crate::system::auth::guard::RequireAuth;
use crate::system::pages::login::LoginPage;
use contracts::shared::config::AppConfig;
use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Redirect, Route, Router, Routes};
use leptos_router::path;

/// Every page except login sits behind the session gate
#[component]
fn ProtectedShell() -> impl IntoView {
    view! {
        <RequireAuth>
            <Shell />
        </RequireAuth>
    }
}

#[component]
fn HomeRedirect() -> impl IntoView {
    let config = use_context::<AppConfig>().expect("AppConfig not found in context");
    view! { <Redirect path=config.app.home_route.clone() /> }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <HomeRedirect /> }>
                <Route path=path!("/login") view=LoginPage />
                <ParentRoute path=path!("") view=ProtectedShell>
                    <Route path=path!("") view=HomeRedirect />
                    <Route path=path!("layouts") view=LayoutList />
                    <Route path=path!("layouts/:layoutId") view=LayoutDetails />
                    <Route path=path!("layouts/:layoutId/plots/new") view=PlotDetails />
                    <Route path=path!("layouts/:layoutId/plots/:plotId") view=PlotDetails />
                    <Route path=path!("pricing") view=PricingPage />
                    <Route path=path!("coupons") view=CouponList />
                    <Route path=path!("customers") view=CustomerList />
                </ParentRoute>
            </Routes>
        </Router>
    }
}
