//! TopHeader component - application top bar.
//!
//! Contains:
//! - Brand pill and application title
//! - Connectivity indicator
//! - Month switcher
//! - Input / Dashboard view tabs

use crate::layout::global_context::{use_app_context, ActiveView};
use crate::shared::components::connectivity_badge::ConnectivityBadge;
use crate::shared::components::month_switcher::MonthSwitcher;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_app_context();

    let tabs = ActiveView::all()
        .into_iter()
        .map(|view_kind| {
            let tab_class = move || {
                if ctx.active_view.get() == view_kind {
                    "top-header__tab top-header__tab--active"
                } else {
                    "top-header__tab"
                }
            };
            view! {
                <button
                    class=tab_class
                    on:click=move |_| ctx.set_active_view(view_kind)
                    title=view_kind.title()
                >
                    {icon(view_kind.icon_name())}
                    <span class="top-header__tab-label">{view_kind.title()}</span>
                </button>
            }
        })
        .collect_view();

    view! {
        <header class="top-header">
            <div class="top-header__brand">
                <div class="top-header__logo">{move || ctx.brand.get()}</div>
                <h1 class="top-header__title">"Controle de Produção"</h1>
                <ConnectivityBadge status=ctx.connectivity />
            </div>

            <MonthSwitcher />

            <div class="top-header__tabs">
                {tabs}
            </div>
        </header>
    }
}
