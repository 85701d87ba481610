use crate::layout::global_context::use_app_context;
use crate::shared::icons::icon;
use contracts::domain::a001_production_month::MonthShift;
use leptos::prelude::*;

/// Previous / next month buttons around "{Mês} {ano}"
#[component]
pub fn MonthSwitcher() -> impl IntoView {
    let ctx = use_app_context();

    let month_name = move || ctx.tracker.with(|s| s.period.month_name());
    let year = move || ctx.tracker.with(|s| s.period.year());

    view! {
        <div class="month-switcher">
            <button
                class="month-switcher__btn"
                title="Mês anterior"
                on:click=move |_| ctx.shift_month(MonthShift::Previous)
            >
                {icon("chevron-left")}
            </button>
            <div class="month-switcher__label">
                {month_name}
                " "
                <span class="month-switcher__year">{year}</span>
            </div>
            <button
                class="month-switcher__btn"
                title="Próximo mês"
                on:click=move |_| ctx.shift_month(MonthShift::Next)
            >
                {icon("chevron-right")}
            </button>
        </div>
    }
}
