//! Sidebar navigation between the top-level pages

use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

struct MenuItem {
    path: &'static str,
    label: &'static str,
    icon: &'static str,
}

const MENU_ITEMS: &[MenuItem] = &[
    MenuItem {
        path: "/layouts",
        label: "Layouts",
        icon: "layers",
    },
    MenuItem {
        path: "/pricing",
        label: "Pricing",
        icon: "tag",
    },
    MenuItem {
        path: "/coupons",
        label: "Coupons",
        icon: "ticket",
    },
    MenuItem {
        path: "/customers",
        label: "Customers",
        icon: "users",
    },
];

/// True when `pathname` is `path` or one of its sub-pages
fn is_active(pathname: &str, path: &str) -> bool {
    pathname == path
        || pathname
            .strip_prefix(path)
            .is_some_and(|rest| rest.starts_with('/'))
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let location = use_location();

    view! {
        <nav class="app-sidebar__content">
            {MENU_ITEMS
                .iter()
                .map(|item| {
                    let path = item.path;
                    view! {
                        <A href=path attr:class="app-sidebar__link">
                            <div
                                class="app-sidebar__item"
                                class:app-sidebar__item--active=move || location.pathname.with(|p| is_active(p, path))
                            >
                                <div class="app-sidebar__item-content">
                                    {icon(item.icon)}
                                    <span>{item.label}</span>
                                </div>
                            </div>
                        </A>
                    }
                })
                .collect_view()}
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_matches_sub_pages_only() {
        assert!(is_active("/layouts", "/layouts"));
        assert!(is_active("/layouts/abc/plots/new", "/layouts"));
        assert!(!is_active("/layoutsx", "/layouts"));
        assert!(!is_active("/pricing", "/layouts"));
    }
}
