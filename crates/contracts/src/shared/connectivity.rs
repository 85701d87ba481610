use serde::{Deserialize, Serialize};

/// How long the "saving" state is shown after an edit, in milliseconds
pub const SAVE_INDICATOR_MS: u32 = 800;

/// State of the connectivity pill in the top header.
///
/// `Saving` is purely visual: edits live in memory and nothing is sent
/// over the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ConnectivityStatus {
    #[default]
    Connected,
    Disconnected,
    Saving,
}

impl ConnectivityStatus {
    /// Maps the browser `navigator.onLine` flag
    pub fn from_online(online: bool) -> Self {
        if online {
            Self::Connected
        } else {
            Self::Disconnected
        }
    }

    /// State after an edit. Offline stays offline.
    pub fn begin_save(self) -> Self {
        match self {
            Self::Disconnected => Self::Disconnected,
            Self::Connected | Self::Saving => Self::Saving,
        }
    }

    /// State once the save indicator timer fires.
    ///
    /// Only `Saving` goes back to `Connected`; an `offline` event received
    /// in the meantime wins.
    pub fn finish_save(self) -> Self {
        match self {
            Self::Saving => Self::Connected,
            other => other,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Connected => "Online",
            Self::Saving => "Salvando...",
            Self::Disconnected => "Offline",
        }
    }

    pub fn is_online(self) -> bool {
        !matches!(self, Self::Disconnected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_cycle_when_online() {
        let status = ConnectivityStatus::Connected.begin_save();
        assert_eq!(status, ConnectivityStatus::Saving);
        assert_eq!(status.finish_save(), ConnectivityStatus::Connected);
    }

    #[test]
    fn test_save_ignored_when_offline() {
        let status = ConnectivityStatus::Disconnected.begin_save();
        assert_eq!(status, ConnectivityStatus::Disconnected);
        assert_eq!(status.finish_save(), ConnectivityStatus::Disconnected);
    }

    #[test]
    fn test_offline_during_save_is_kept() {
        // Timer fires after the browser reported offline
        let saving = ConnectivityStatus::Connected.begin_save();
        assert!(saving.is_online());
        let status = ConnectivityStatus::from_online(false);
        assert_eq!(status.finish_save(), ConnectivityStatus::Disconnected);
    }

    #[test]
    fn test_labels() {
        assert_eq!(ConnectivityStatus::Connected.label(), "Online");
        assert_eq!(ConnectivityStatus::Saving.label(), "Salvando...");
        assert_eq!(ConnectivityStatus::Disconnected.label(), "Offline");
    }
}
