use leptos::prelude::*;

fn card_class(main: bool) -> &'static str {
    if main {
        "stat-card stat-card--main"
    } else {
        "stat-card"
    }
}

/// Success wins over highlight, highlight over the neutral colour
fn value_class(main: bool, highlight: bool, success: bool) -> String {
    let size = if main {
        "stat-card__value stat-card__value--main"
    } else {
        "stat-card__value"
    };
    let tone = if success {
        "stat-card__value--success"
    } else if highlight {
        "stat-card__value--highlight"
    } else {
        "stat-card__value--neutral"
    };
    format!("{} {}", size, tone)
}

/// Dashboard KPI card: title on top, big formatted value below
#[component]
pub fn StatCard(
    /// Label displayed above the value
    title: &'static str,
    /// Already formatted value
    #[prop(into)]
    value: Signal<String>,
    /// Brand colour for the value
    #[prop(optional)]
    highlight: bool,
    /// Green value when the KPI beats its target
    #[prop(into, default = Signal::stored(false))]
    success: Signal<bool>,
    /// Larger card used for the focus metrics
    #[prop(optional)]
    main: bool,
) -> impl IntoView {
    view! {
        <div class=card_class(main)>
            <h3 class="stat-card__title">{title}</h3>
            <p class=move || value_class(main, highlight, success.get())>
                {move || value.get()}
            </p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_class_priority() {
        assert_eq!(
            value_class(false, false, false),
            "stat-card__value stat-card__value--neutral"
        );
        assert_eq!(
            value_class(false, true, false),
            "stat-card__value stat-card__value--highlight"
        );
        assert_eq!(
            value_class(true, true, true),
            "stat-card__value stat-card__value--main stat-card__value--success"
        );
        assert_eq!(card_class(true), "stat-card stat-card--main");
    }
}
