use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::FlycamError;
use crate::input::KeyAction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Configurable keyboard bindings mapping actions to key codes.
pub struct KeybindingOptions {
    /// Maps action → key string (e.g. `MoveForward` → `"KeyW"`).
    pub bindings: HashMap<KeyAction, String>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let bindings = HashMap::from([
            (KeyAction::MoveForward, "KeyW".into()),
            (KeyAction::MoveBackward, "KeyS".into()),
            (KeyAction::StrafeLeft, "KeyA".into()),
            (KeyAction::StrafeRight, "KeyD".into()),
            (KeyAction::PitchUp, "ArrowUp".into()),
            (KeyAction::PitchDown, "ArrowDown".into()),
            (KeyAction::YawLeft, "ArrowLeft".into()),
            (KeyAction::YawRight, "ArrowRight".into()),
            (KeyAction::Exit, "Escape".into()),
        ]);
        Self { bindings }
    }
}

impl KeybindingOptions {
    /// Look up the action for a key string.
    ///
    /// If several actions share `key` (only possible by editing
    /// `bindings` directly), the first in declaration order wins.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<KeyAction> {
        self.bindings
            .iter()
            .filter(|(_, bound)| bound.as_str() == key)
            .map(|(action, _)| *action)
            .min()
    }

    /// Reject bindings that map one key to several actions.
    ///
    /// # Errors
    ///
    /// [`FlycamError::OptionsParse`] naming the first shared key.
    pub fn validate(&self) -> Result<(), FlycamError> {
        let mut seen: HashMap<&str, KeyAction> = HashMap::new();
        let mut entries: Vec<_> = self.bindings.iter().collect();
        entries.sort_by_key(|(action, _)| **action);
        for (action, key) in entries {
            if let Some(previous) = seen.insert(key.as_str(), *action) {
                return Err(FlycamError::OptionsParse(format!(
                    "key {key} is bound to both {previous:?} and {action:?}"
                )));
            }
        }
        Ok(())
    }

    /// Bind `action` to `key`, unbinding whatever action held `key` before.
    pub fn bind(&mut self, action: KeyAction, key: impl Into<String>) {
        let key = key.into();
        self.bindings.retain(|other, bound| *other == action || *bound != key);
        let _ = self.bindings.insert(action, key);
    }

    /// Key string bound to `action`, if any.
    #[must_use]
    pub fn key_for(&self, action: KeyAction) -> Option<&str> {
        self.bindings.get(&action).map(String::as_str)
    }
}
