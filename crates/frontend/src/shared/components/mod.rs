pub mod card_animated;
pub mod connectivity_badge;
pub mod month_switcher;
pub mod percent_badge;
pub mod stat_card;
