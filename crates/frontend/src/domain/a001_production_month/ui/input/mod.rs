mod daily_goal_card;
mod daily_grid;
mod weekly_summary;

use crate::layout::global_context::use_app_context;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_INPUT};
use contracts::dashboards::d001_monthly_performance::calculate_kpis;
use daily_goal_card::DailyGoalCard;
use daily_grid::DailyGrid;
use leptos::prelude::*;
use weekly_summary::WeeklySummary;

/// Production form: goal settings and weekly summary on the left,
/// daily entry grid on the right
#[component]
pub fn InputView() -> impl IntoView {
    let ctx = use_app_context();
    let kpis = Memo::new(move |_| ctx.tracker.with(calculate_kpis));

    view! {
        <PageFrame page_id="a001_production_month--input" category=PAGE_CAT_INPUT>
            <div class="input-layout">
                <aside class="input-layout__side">
                    <DailyGoalCard />
                    <WeeklySummary kpis=kpis />
                </aside>

                <section class="input-layout__main">
                    <DailyGrid />
                </section>
            </div>
        </PageFrame>
    }
}
