use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use crate::shared::api::settings::fetch_settings;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    let ctx = AppGlobalContext::new();
    provide_context(ctx);

    ctx.init_connectivity_listeners();

    // Server defaults are optional: the form works with built-in values offline
    spawn_local(async move {
        match fetch_settings().await {
            Ok(settings) => ctx.apply_settings(settings),
            Err(e) => log::warn!("Tracker settings unavailable, using defaults: {}", e),
        }
    });

    view! {
        <Shell />
    }
}
