use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf, sync::RwLock};

use crate::assistant::{BridgeConfig, DEFAULT_MOOD};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssistantSettings {
    /// Mood hint forwarded to the suggestion bridge with every prompt.
    pub mood: String,
    pub bridge_url: String,
}

impl Default for AssistantSettings {
    fn default() -> Self {
        Self {
            mood: DEFAULT_MOOD.into(),
            bridge_url: BridgeConfig::default().base_url,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct UserSettings {
    assistant: AssistantSettings,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            assistant: AssistantSettings::default(),
        }
    }
}

pub struct SettingsStore {
    path: PathBuf,
    data: RwLock<UserSettings>,
}

impl SettingsStore {
    pub fn new(path: PathBuf) -> Result<Self> {
        let data = if path.exists() {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read settings from {}", path.display()))?;
            serde_json::from_str(&contents).unwrap_or_default()
        } else {
            UserSettings::default()
        };

        Ok(Self {
            path,
            data: RwLock::new(data),
        })
    }

    pub fn assistant(&self) -> AssistantSettings {
        self.data.read().unwrap().assistant.clone()
    }

    pub fn update_assistant(&self, settings: AssistantSettings) -> Result<()> {
        let mut guard = self.data.write().unwrap();
        guard.assistant = settings;
        self.persist(&guard)
    }

    fn persist(&self, data: &UserSettings) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create settings directory {}", parent.display())
            })?;
        }
        let serialized = serde_json::to_string_pretty(data)?;
        fs::write(&self.path, serialized)
            .with_context(|| format!("Failed to write settings to {}", self.path.display()))
    }
}
