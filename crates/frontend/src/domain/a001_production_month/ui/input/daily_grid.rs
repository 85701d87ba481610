use crate::layout::global_context::use_app_context;
use crate::shared::icons::icon;
use crate::shared::input_utils::{display_amount, parse_amount};
use chrono::{Datelike, NaiveDate};
use contracts::domain::a001_production_month::EntryField;
use leptos::prelude::*;

/// Static part of a week card; recreated when the month changes
#[derive(Debug, Clone, PartialEq)]
struct WeekCardData {
    period_key: String,
    id: u32,
    label: String,
    days: Vec<NaiveDate>,
}

/// "Entrada Diária": one card per week, one row per working day
#[component]
pub fn DailyGrid() -> impl IntoView {
    let ctx = use_app_context();

    let weeks = move || {
        ctx.tracker.with(|s| {
            let period_key = s.period.key();
            s.weeks
                .iter()
                .map(|w| WeekCardData {
                    period_key: period_key.clone(),
                    id: w.id,
                    label: w.label.clone(),
                    days: w.days.clone(),
                })
                .collect::<Vec<_>>()
        })
    };
    let no_weeks = move || ctx.tracker.with(|s| s.weeks.is_empty());

    view! {
        <div class="daily-grid">
            <div class="daily-grid__header">
                <h3 class="daily-grid__title">"Entrada Diária"</h3>
                <p class="daily-grid__subtitle">"Preencha a produção ou marque folgas."</p>
            </div>

            <Show when=no_weeks>
                <div class="daily-grid__empty">"Nenhum dia útil encontrado neste mês."</div>
            </Show>

            <div class="daily-grid__weeks">
                <For
                    each=weeks
                    key=|week| (week.period_key.clone(), week.id)
                    children=move |week| {
                        view! { <WeekCard label=week.label days=week.days /> }
                    }
                />
            </div>
        </div>
    }
}

#[component]
fn WeekCard(label: String, days: Vec<NaiveDate>) -> impl IntoView {
    let ctx = use_app_context();

    let counted_days = days.clone();
    let effective_days = move || {
        ctx.tracker
            .with(|s| counted_days.iter().filter(|d| !s.is_excluded(**d)).count())
    };

    let rows = days
        .into_iter()
        .map(|date| view! { <DayRow date=date /> })
        .collect_view();

    view! {
        <div class="week-card">
            <div class="week-card__header">
                <span class="week-card__label">{label}</span>
                <span class="week-card__days">
                    {move || format!("{} Dias Úteis", effective_days())}
                </span>
            </div>
            <table class="week-card__table">
                <tbody>{rows}</tbody>
            </table>
        </div>
    }
}

#[component]
fn DayRow(date: NaiveDate) -> impl IntoView {
    let ctx = use_app_context();

    let excluded = Memo::new(move |_| ctx.tracker.with(|s| s.is_excluded(date)));
    let quantity = move || ctx.tracker.with(|s| display_amount(s.entry(date).map(|e| e.quantity)));
    let oes = move || ctx.tracker.with(|s| display_amount(s.entry(date).map(|e| e.oes)));

    view! {
        <tr class=move || if excluded.get() { "day-row day-row--excluded" } else { "day-row" }>
            <td class="day-row__toggle">
                <button
                    class=move || if excluded.get() { "day-toggle day-toggle--off" } else { "day-toggle" }
                    title=move || if excluded.get() { "Ativar dia" } else { "Marcar como folga" }
                    on:click=move |_| ctx.toggle_exclusion(date)
                >
                    {move || if excluded.get() { icon("calendar-off") } else { icon("check-circle") }}
                </button>
            </td>
            <td class="day-row__day">{date.day()}</td>
            <td class="day-row__quantity">
                <input
                    type="number"
                    min="0"
                    class="day-row__input"
                    placeholder=move || if excluded.get() { "Folga" } else { "0" }
                    prop:value=quantity
                    prop:disabled=move || excluded.get()
                    on:input=move |ev| {
                        ctx.update_entry(date, EntryField::Quantity, parse_amount(&event_target_value(&ev)))
                    }
                />
            </td>
            <td class="day-row__oes">
                <input
                    type="number"
                    min="0"
                    class="day-row__input day-row__input--small"
                    placeholder="OE"
                    prop:value=oes
                    prop:disabled=move || excluded.get()
                    on:input=move |ev| {
                        ctx.update_entry(date, EntryField::Oes, parse_amount(&event_target_value(&ev)))
                    }
                />
            </td>
        </tr>
    }
}
