use crate::shared::icons::icon;
use contracts::shared::connectivity::ConnectivityStatus;
use leptos::prelude::*;

fn badge_class(status: ConnectivityStatus) -> &'static str {
    match status {
        ConnectivityStatus::Connected => "status-pill status-pill--online",
        ConnectivityStatus::Saving => "status-pill status-pill--saving",
        ConnectivityStatus::Disconnected => "status-pill status-pill--offline",
    }
}

fn icon_name(status: ConnectivityStatus) -> &'static str {
    match status {
        ConnectivityStatus::Connected => "wifi",
        ConnectivityStatus::Saving => "refresh",
        ConnectivityStatus::Disconnected => "wifi-off",
    }
}

fn badge_title(status: ConnectivityStatus) -> &'static str {
    if status.is_online() {
        "Conectado"
    } else {
        "Sem conexão"
    }
}

/// Online / Salvando... / Offline pill shown in the header
#[component]
pub fn ConnectivityBadge(#[prop(into)] status: Signal<ConnectivityStatus>) -> impl IntoView {
    view! {
        <div class=move || badge_class(status.get()) title=move || badge_title(status.get())>
            {move || icon(icon_name(status.get()))}
            <span class="status-pill__label">{move || status.get().label()}</span>
            <Show when=move || status.get() == ConnectivityStatus::Connected>
                <span class="status-pill__pulse"></span>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_class_per_status() {
        assert_eq!(
            badge_class(ConnectivityStatus::Saving),
            "status-pill status-pill--saving"
        );
        assert_eq!(icon_name(ConnectivityStatus::Disconnected), "wifi-off");
        assert_eq!(icon_name(ConnectivityStatus::Connected), "wifi");
    }

    #[test]
    fn test_saving_still_counts_as_connected() {
        assert_eq!(badge_title(ConnectivityStatus::Saving), "Conectado");
        assert_eq!(badge_title(ConnectivityStatus::Connected), "Conectado");
        assert_eq!(badge_title(ConnectivityStatus::Disconnected), "Sem conexão");
    }
}
