use crate::layout::global_context::use_app_context;
use crate::shared::components::stat_card::StatCard;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DASHBOARD};
use contracts::dashboards::d001_monthly_performance::calculate_kpis;
use contracts::shared::number_format::{format_count, format_percent, format_rounded};
use leptos::prelude::*;

/// Monthly performance dashboard
#[component]
pub fn PerformanceDashboard() -> impl IntoView {
    let ctx = use_app_context();

    let kpis = Memo::new(move |_| ctx.tracker.with(calculate_kpis));
    let daily_goal = Memo::new(move |_| ctx.tracker.with(|s| s.daily_goal));
    let period_label = move || ctx.tracker.with(|s| s.period.to_string());

    view! {
        <PageFrame page_id="d001_monthly_performance--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="dashboard__hero">
                <span class="dashboard__tag">"Relatório Mensal"</span>
                <h1 class="dashboard__title">"Performance"</h1>
                <p class="dashboard__period">{period_label}</p>
            </div>

            // Key indicators
            <div class="dashboard__grid dashboard__grid--cols-4">
                <StatCard
                    title="Meta do Mês"
                    value=Signal::derive(move || kpis.with(|k| format_count(k.monthly_goal)))
                />
                <StatCard
                    title="Total Produzido"
                    value=Signal::derive(move || kpis.with(|k| format_count(k.monthly_total)))
                    highlight=true
                />
                <StatCard
                    title="Diferença Meta"
                    value=Signal::derive(move || kpis.with(|k| format_count(k.missing_goal)))
                />
                <StatCard
                    title="Meta Diária Config"
                    value=Signal::derive(move || format_count(daily_goal.get()))
                />
            </div>

            // Focus metrics
            <div class="dashboard__grid dashboard__grid--cols-2">
                <StatCard
                    title="Média da Semana"
                    value=Signal::derive(move || kpis.with(|k| format_rounded(k.current_week_average)))
                    main=true
                    highlight=true
                    success=Signal::derive(move || kpis.with(|k| k.week_average_beats(daily_goal.get())))
                />
                <StatCard
                    title="Previsão Fechamento"
                    value=Signal::derive(move || kpis.with(|k| format_count(k.forecast)))
                    main=true
                    success=Signal::derive(move || kpis.with(|k| k.forecast_beats_goal()))
                />
            </div>

            <div class="dashboard__grid dashboard__grid--cols-3">
                <StatCard
                    title="Embalagem Semana Atual"
                    value=Signal::derive(move || kpis.with(|k| format_count(k.current_week_total)))
                />
                <StatCard
                    title="Total OE's"
                    value=Signal::derive(move || kpis.with(|k| k.total_oes.to_string()))
                />
                <StatCard
                    title="Realização"
                    value=Signal::derive(move || kpis.with(|k| format_percent(k.monthly_percent)))
                    highlight=true
                    success=Signal::derive(move || kpis.with(|k| k.goal_exceeded()))
                />
            </div>

            <div class="dashboard__footer">
                <div class="dashboard__footer-dot"></div>
                <span class="dashboard__footer-brand">{move || ctx.brand.get()}</span>
            </div>
        </PageFrame>
    }
}
