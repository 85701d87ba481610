use crate::layout::global_context::use_app_context;
use crate::shared::components::card_animated::CardAnimated;
use crate::shared::input_utils::parse_amount;
use leptos::prelude::*;

#[component]
pub fn DailyGoalCard() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <CardAnimated class="daily-goal">
            <label class="form__label" for="daily-goal-input">"Meta Diária Padrão"</label>
            <div class="daily-goal__row">
                <input
                    id="daily-goal-input"
                    type="number"
                    min="0"
                    class="form__input form__input--large"
                    prop:value=move || ctx.tracker.with(|s| s.daily_goal.to_string())
                    on:input=move |ev| ctx.update_daily_goal(parse_amount(&event_target_value(&ev)))
                />
                <span class="daily-goal__hint">"Aplica-se a todos os dias úteis ativos."</span>
            </div>
        </CardAnimated>
    }
}
