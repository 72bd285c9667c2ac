//! Panel lifecycle manager
//!
//! Panels are keyed by a normalized identity string (trimmed, lowercased)
//! so "AddObject" and "addobject " address the same panel. Opening an
//! identity that is already live reveals the existing panel instead of
//! creating a second one.

use crate::error::{HostError, HostResult};
use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// One live or disposed panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelHandle {
    /// Normalized identity key
    pub key: String,

    pub title: String,

    pub opened_at: DateTime<Utc>,

    pub disposed: bool,
}

/// What `open` did with the requested identity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenOutcome {
    /// A new panel was created
    Opened,

    /// A live panel with the same identity already existed and was revealed
    Revealed,
}

fn normalize_key(raw: &str) -> String {
    raw.trim().to_ascii_lowercase()
}

/// Owns every panel handle, keyed by normalized identity
#[derive(Debug, Default)]
pub struct PanelManager {
    panels: HashMap<String, PanelHandle>,
}

impl PanelManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a panel, or reveal the live one already holding this identity
    pub fn open(&mut self, raw_key: &str, title: &str) -> OpenOutcome {
        let key = normalize_key(raw_key);

        match self.panels.get(&key) {
            Some(handle) if !handle.disposed => OpenOutcome::Revealed,
            _ => {
                // A disposed handle under the same key is replaced
                self.panels.insert(
                    key.clone(),
                    PanelHandle {
                        key,
                        title: title.to_string(),
                        opened_at: Utc::now(),
                        disposed: false,
                    },
                );
                OpenOutcome::Opened
            }
        }
    }

    /// Bring an existing live panel to the foreground
    pub fn reveal(&self, raw_key: &str) -> HostResult<&PanelHandle> {
        let key = normalize_key(raw_key);
        match self.panels.get(&key) {
            Some(handle) if !handle.disposed => Ok(handle),
            Some(_) => Err(HostError::panel_disposed(&key)),
            None => Err(HostError::panel_not_found(&key)),
        }
    }

    /// Dispose a live panel; its identity becomes reusable
    pub fn dispose(&mut self, raw_key: &str) -> HostResult<()> {
        let key = normalize_key(raw_key);
        match self.panels.get_mut(&key) {
            Some(handle) if !handle.disposed => {
                handle.disposed = true;
                Ok(())
            }
            Some(_) => Err(HostError::panel_disposed(&key)),
            None => Err(HostError::panel_not_found(&key)),
        }
    }

    pub fn is_open(&self, raw_key: &str) -> bool {
        self.panels
            .get(&normalize_key(raw_key))
            .map(|h| !h.disposed)
            .unwrap_or(false)
    }

    pub fn open_panel_count(&self) -> usize {
        self.panels.values().filter(|h| !h.disposed).count()
    }
}
