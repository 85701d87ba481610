use crate::layout::global_context::use_app_context;
use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::percent_badge::PercentBadge;
use crate::shared::input_utils::parse_amount;
use contracts::dashboards::d001_monthly_performance::{PerformanceSummary, WeekStat};
use contracts::shared::number_format::{format_count, format_percent};
use leptos::prelude::*;

fn week_stat(kpis: Memo<PerformanceSummary>, week_id: u32) -> Option<WeekStat> {
    kpis.with(|k| k.weekly_stats.iter().find(|w| w.id == week_id).cloned())
}

/// "Resumo Semanal": produced, editable goal, % and OEs per week plus totals
#[component]
pub fn WeeklySummary(kpis: Memo<PerformanceSummary>) -> impl IntoView {
    let ctx = use_app_context();

    // Rows are keyed by week id so the goal input keeps focus while typing
    let week_ids = move || {
        kpis.with(|k| k.weekly_stats.iter().map(|w| w.id).collect::<Vec<_>>())
    };

    view! {
        <CardAnimated
            title="Resumo Semanal"
            subtitle="Progresso acumulado por semana"
            delay_ms=80
        >
            <div class="table-wrapper">
                <table class="summary-table">
                    <thead>
                        <tr class="summary-table__head">
                            <th>"Semana"</th>
                            <th class="table__cell--right">"Qtd."</th>
                            <th class="table__cell--right">"Meta"</th>
                            <th class="table__cell--center">"%"</th>
                            <th class="table__cell--right">"OE's"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=week_ids
                            key=|id| *id
                            children=move |week_id| {
                                let stat = move || week_stat(kpis, week_id);
                                view! {
                                    <tr class="summary-table__row">
                                        <td class="summary-table__week">
                                            {move || stat().map(|w| w.label).unwrap_or_default()}
                                        </td>
                                        <td class="table__cell--right table__cell--mono">
                                            {move || stat().map(|w| format_count(w.produced)).unwrap_or_default()}
                                        </td>
                                        <td class="table__cell--right">
                                            <input
                                                type="number"
                                                min="0"
                                                class="summary-table__goal-input"
                                                prop:value=move || stat().map(|w| w.goal.to_string()).unwrap_or_default()
                                                on:input=move |ev| {
                                                    ctx.update_week_goal(week_id, parse_amount(&event_target_value(&ev)))
                                                }
                                            />
                                        </td>
                                        <td class="table__cell--center">
                                            {move || stat().map(|w| view! { <PercentBadge percent=w.percent /> })}
                                        </td>
                                        <td class="table__cell--right table__cell--muted">
                                            {move || stat().map(|w| w.oes.to_string()).unwrap_or_default()}
                                        </td>
                                    </tr>
                                }
                            }
                        />

                        <tr class="table__totals-row">
                            <td>"TOTAL"</td>
                            <td class="table__cell--right">
                                {move || kpis.with(|k| format_count(k.monthly_total))}
                            </td>
                            <td class="table__cell--right table__cell--muted">
                                {move || kpis.with(|k| format_count(k.monthly_goal))}
                            </td>
                            <td class="table__cell--center table__cell--accent">
                                {move || kpis.with(|k| format_percent(k.monthly_percent))}
                            </td>
                            <td class="table__cell--right table__cell--muted">
                                {move || kpis.with(|k| k.total_oes.to_string())}
                            </td>
                        </tr>
                    </tbody>
                </table>
            </div>
        </CardAnimated>
    }
}
