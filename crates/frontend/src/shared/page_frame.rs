//! PageFrame: standard root wrapper for every page of the main area.
//!
//! Guarantees two metadata attributes on the root DOM element:
//!   - `id`                  : `"{entity}--{category}"`, e.g. `"a001_production_month--input"`
//!   - `data-page-category`  : one of the PAGE_CAT_* constants

use leptos::prelude::*;

pub const PAGE_CAT_INPUT: &str = "input";
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Root wrapper that sets standard metadata on every page.
#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants
    category: &'static str,
    children: Children,
) -> impl IntoView {
    let class = match category {
        PAGE_CAT_DASHBOARD => "page page--dashboard",
        _ => "page",
    };

    view! {
        <div id=page_id data-page-category=category class=class>
            {children()}
        </div>
    }
}
