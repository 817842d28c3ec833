use contracts::domain::common::ValidityStatus;
use contracts::enums::PlotStatus;
use leptos::prelude::*;
use thaw::*;

/// Pill for a plot's sales status
pub fn plot_status_badge(status: PlotStatus) -> AnyView {
    let color = match status {
        PlotStatus::Available => BadgeColor::Success,
        PlotStatus::Sold => BadgeColor::Danger,
        PlotStatus::Registered => BadgeColor::Informative,
    };
    view! {
        <span class=status.css_class()>
            <Badge appearance=BadgeAppearance::Tint color=color>
                {status.code()}
            </Badge>
        </span>
    }
    .into_any()
}

/// Pill for a price or coupon validity window
pub fn validity_badge(status: ValidityStatus) -> AnyView {
    let color = match status {
        ValidityStatus::Unexpired => BadgeColor::Success,
        ValidityStatus::Expired => BadgeColor::Warning,
    };
    view! {
        <Badge appearance=BadgeAppearance::Tint color=color>
            {status.as_str()}
        </Badge>
    }
    .into_any()
}
