pub mod global_context;
pub mod top_header;

use crate::dashboards::PerformanceDashboard;
use crate::domain::a001_production_month::ui::InputView;
use global_context::{use_app_context, ActiveView};
use leptos::prelude::*;
use top_header::TopHeader;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |  brand | status | month switcher | tabs  |
/// +------------------------------------------+
/// |        InputView / PerformanceDashboard  |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="app-layout">
            <TopHeader />

            <main class="app-main">
                {move || match ctx.active_view.get() {
                    ActiveView::Input => view! { <InputView /> }.into_any(),
                    ActiveView::Dashboard => view! { <PerformanceDashboard /> }.into_any(),
                }}
            </main>
        </div>
    }
}
