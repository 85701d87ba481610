//! CardAnimated: Thaw Card with an appear animation and an optional header.
//!
//! The animation is defined in `styles/app.css` (`@keyframes card-appear`).
//!
//! # Example
//! ```text
//! <CardAnimated title="Resumo Semanal" subtitle="Progresso acumulado por semana" delay_ms=80>
//!     <table>...</table>
//! </CardAnimated>
//! ```

use leptos::prelude::*;
use thaw::Card;

/// Thaw [`Card`] with the `card-appear` animation.
///
/// Use increasing `delay_ms` on sibling cards for a stagger effect.
#[component]
pub fn CardAnimated(
    /// Animation delay in milliseconds
    #[prop(optional)]
    delay_ms: u32,
    /// Header title; no header is rendered when empty
    #[prop(optional)]
    title: &'static str,
    /// Muted line under the title
    #[prop(optional)]
    subtitle: &'static str,
    /// Additional CSS classes for the body
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let style = format!("animation: card-appear 0.28s ease-out {}ms both;", delay_ms);
    let body_class = if class.is_empty() {
        "card__body".to_string()
    } else {
        format!("card__body {}", class)
    };

    let header = (!title.is_empty()).then(|| {
        view! {
            <div class="card__header">
                <h3 class="card__title">{title}</h3>
                {(!subtitle.is_empty()).then(|| view! { <p class="card__subtitle">{subtitle}</p> })}
            </div>
        }
    });

    view! {
        <Card attr:style=style>
            {header}
            <div class=body_class>
                {children()}
            </div>
        </Card>
    }
}
