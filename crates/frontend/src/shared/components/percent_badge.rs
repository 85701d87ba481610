use contracts::dashboards::d001_monthly_performance::Attainment;
use contracts::shared::number_format::format_percent;
use leptos::prelude::*;

pub fn attainment_class(attainment: Attainment) -> &'static str {
    match attainment {
        Attainment::Met => "badge badge--success",
        Attainment::Near => "badge badge--primary",
        Attainment::Behind => "badge badge--error",
    }
}

/// Weekly % badge: green from 100%, blue from 80%, red below
#[component]
pub fn PercentBadge(percent: f64) -> impl IntoView {
    let class = attainment_class(Attainment::from_percent(percent));

    view! {
        <span class=class>{format_percent(percent)}</span>
    }
}
