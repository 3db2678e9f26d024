use serde::{Deserialize, Serialize};

/// Body of a single pillar or principle toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingToggle {
    pub enabled: bool,
}
