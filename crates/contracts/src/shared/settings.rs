use serde::{Deserialize, Serialize};

/// Daily goal applied to every working day when no override is configured
pub const DEFAULT_DAILY_GOAL: u64 = 6000;

/// Brand shown in the header pill
pub const DEFAULT_BRAND: &str = "FOXMIX";

/// Tracker defaults served by `GET /api/settings`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerSettings {
    pub default_daily_goal: u64,
    pub brand: String,
}

impl Default for TrackerSettings {
    fn default() -> Self {
        Self {
            default_daily_goal: DEFAULT_DAILY_GOAL,
            brand: DEFAULT_BRAND.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_json_shape() {
        let json = serde_json::to_value(TrackerSettings::default()).unwrap();
        assert_eq!(json["default_daily_goal"], 6000);
        assert_eq!(json["brand"], "FOXMIX");
    }
}
