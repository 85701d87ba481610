use chrono::{Local, NaiveDate};
use contracts::domain::a001_production_month::{EntryField, MonthShift, ProductionMonth};
use contracts::shared::connectivity::{ConnectivityStatus, SAVE_INDICATOR_MS};
use contracts::shared::error::TrackerError;
use contracts::shared::settings::{TrackerSettings, DEFAULT_BRAND, DEFAULT_DAILY_GOAL};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Page shown in the main area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Input,
    Dashboard,
}

impl ActiveView {
    pub fn title(&self) -> &'static str {
        match self {
            ActiveView::Input => "Tabela",
            ActiveView::Dashboard => "Dashboard",
        }
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            ActiveView::Input => "table",
            ActiveView::Dashboard => "dashboard",
        }
    }

    pub fn all() -> [ActiveView; 2] {
        [ActiveView::Input, ActiveView::Dashboard]
    }
}

/// Application-wide store: form state, current page and connectivity pill.
///
/// All form mutations go through the methods below so the "saving"
/// indicator is triggered consistently.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub tracker: RwSignal<ProductionMonth>,
    pub active_view: RwSignal<ActiveView>,
    pub connectivity: RwSignal<ConnectivityStatus>,
    pub brand: RwSignal<String>,
    /// Set after the first user edit; server defaults no longer apply
    pub touched: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self::starting_on(Local::now().date_naive())
    }

    pub fn starting_on(today: NaiveDate) -> Self {
        Self {
            tracker: RwSignal::new(ProductionMonth::for_date(today, DEFAULT_DAILY_GOAL)),
            active_view: RwSignal::new(ActiveView::default()),
            connectivity: RwSignal::new(ConnectivityStatus::default()),
            brand: RwSignal::new(DEFAULT_BRAND.to_string()),
            touched: RwSignal::new(false),
        }
    }

    /// Applies backend defaults unless the user already started typing
    pub fn apply_settings(&self, settings: TrackerSettings) {
        self.brand.set(settings.brand);
        if self.touched.get_untracked() {
            log::info!("Settings received after first edit, keeping current goals");
            return;
        }
        self.tracker
            .update(|s| s.update_daily_goal(settings.default_daily_goal));
    }

    /// Seeds the pill from `navigator.onLine` and follows `online`/`offline` events
    pub fn init_connectivity_listeners(&self) {
        let Some(window) = web_sys::window() else {
            return;
        };

        let online = window.navigator().on_line();
        self.connectivity.set(ConnectivityStatus::from_online(online));

        for (event_name, is_online) in [("online", true), ("offline", false)] {
            let connectivity = self.connectivity;
            let handler = Closure::wrap(Box::new(move |_event: web_sys::Event| {
                log::info!("Browser reported {}", event_name);
                connectivity.set(ConnectivityStatus::from_online(is_online));
            }) as Box<dyn FnMut(_)>);

            if let Err(err) = window
                .add_event_listener_with_callback(event_name, handler.as_ref().unchecked_ref())
            {
                log::error!("Failed to subscribe to '{}': {:?}", event_name, err);
            }
            handler.forget();
        }
    }

    /// Shows "saving" for a moment. Nothing is sent anywhere.
    fn trigger_save(&self) {
        self.touched.set(true);

        let connectivity = self.connectivity;
        let next = connectivity.get_untracked().begin_save();
        connectivity.set(next);

        if next == ConnectivityStatus::Saving {
            Timeout::new(SAVE_INDICATOR_MS, move || {
                connectivity.update(|s| *s = s.finish_save());
            })
            .forget();
        }
    }

    pub fn set_active_view(&self, view: ActiveView) {
        self.active_view.set(view);
    }

    pub fn shift_month(&self, shift: MonthShift) {
        if let Some(Err(e)) = self.tracker.try_update(|s| s.shift_month(shift)) {
            log::error!("Cannot change month: {}", e);
        }
    }

    pub fn update_entry(&self, date: NaiveDate, field: EntryField, value: u64) {
        match self.write_entry(date, field, value) {
            Ok(()) => self.trigger_save(),
            Err(e) => log::warn!("Entry ignored: {}", e),
        }
    }

    /// Stores the value when the date belongs to the selected month
    fn write_entry(
        &self,
        date: NaiveDate,
        field: EntryField,
        value: u64,
    ) -> Result<(), TrackerError> {
        self.tracker
            .try_update(|s| {
                s.ensure_in_month(date)?;
                s.update_entry(date, field, value);
                Ok::<(), TrackerError>(())
            })
            .unwrap_or(Ok(()))
    }

    pub fn update_week_goal(&self, week_id: u32, value: u64) {
        self.trigger_save();
        if let Some(Err(e)) = self.tracker.try_update(|s| s.update_week_goal(week_id, value)) {
            log::warn!("Week goal ignored: {}", e);
        }
    }

    pub fn update_daily_goal(&self, value: u64) {
        self.trigger_save();
        self.tracker.update(|s| s.update_daily_goal(value));
    }

    pub fn toggle_exclusion(&self, date: NaiveDate) {
        self.trigger_save();
        if let Some(excluded) = self.tracker.try_update(|s| s.toggle_exclusion(date)) {
            log::debug!("{} excluded from goal: {}", date, excluded);
        }
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Shortcut for components: the context is provided by `App`
pub fn use_app_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not provided")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_view_titles() {
        assert_eq!(ActiveView::default(), ActiveView::Input);
        let titles: Vec<_> = ActiveView::all().iter().map(|v| v.title()).collect();
        assert_eq!(titles, vec!["Tabela", "Dashboard"]);
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn acme() -> TrackerSettings {
        TrackerSettings {
            default_daily_goal: 7000,
            brand: "ACME".to_string(),
        }
    }

    #[test]
    fn test_settings_apply_before_first_edit() {
        // April 2024: first week is Mon 1 - Fri 5
        let ctx = AppGlobalContext::starting_on(date(2024, 4, 10));
        ctx.apply_settings(acme());

        let (daily_goal, first_week_goal) = ctx
            .tracker
            .with_untracked(|s| (s.daily_goal, s.weeks[0].goal));
        assert_eq!(daily_goal, 7000);
        assert_eq!(first_week_goal, 5 * 7000);
        assert_eq!(ctx.brand.get_untracked(), "ACME");
    }

    #[test]
    fn test_settings_after_edit_keep_goals_but_change_brand() {
        let ctx = AppGlobalContext::starting_on(date(2024, 4, 10));
        ctx.tracker.update(|s| s.update_week_goal(1, 1234).unwrap());
        ctx.touched.set(true);

        ctx.apply_settings(acme());

        let (daily_goal, first_week_goal) = ctx
            .tracker
            .with_untracked(|s| (s.daily_goal, s.weeks[0].goal));
        assert_eq!(daily_goal, DEFAULT_DAILY_GOAL);
        assert_eq!(first_week_goal, 1234);
        assert_eq!(ctx.brand.get_untracked(), "ACME");
    }

    #[test]
    fn test_entry_outside_month_is_rejected() {
        let ctx = AppGlobalContext::starting_on(date(2024, 4, 10));

        let result = ctx.write_entry(date(2024, 5, 2), EntryField::Quantity, 500);

        assert!(matches!(result, Err(TrackerError::DateOutsideMonth { .. })));
        assert!(ctx.tracker.with_untracked(|s| s.daily_entries.is_empty()));
        assert!(!ctx.touched.get_untracked());
        assert_eq!(ctx.connectivity.get_untracked(), ConnectivityStatus::Connected);
    }

    #[test]
    fn test_entry_inside_month_is_stored() {
        let ctx = AppGlobalContext::starting_on(date(2024, 4, 10));

        ctx.write_entry(date(2024, 4, 2), EntryField::Oes, 3).unwrap();

        let oes = ctx
            .tracker
            .with_untracked(|s| s.entry(date(2024, 4, 2)).map(|e| e.oes));
        assert_eq!(oes, Some(3));
    }
}
