//! Centralized camera/viewer options with TOML preset support.
//!
//! All tweakable settings (initial camera pose, control sensitivities,
//! keybindings, window settings) are consolidated here. Options serialize
//! to/from TOML for presets stored in `assets/presets/`.

mod camera;
mod controls;
mod keybindings;
mod window;

use std::path::Path;

pub use camera::CameraOptions;
pub use controls::ControlOptions;
pub use keybindings::KeybindingOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use window::WindowOptions;

use crate::error::FlycamError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[camera]`) work correctly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema)]
#[serde(default)]
pub struct Options {
    /// Initial camera pose and projection parameters.
    pub camera: CameraOptions,
    /// Input sensitivities and camera bounds.
    pub controls: ControlOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
    /// Viewer window settings.
    pub window: WindowOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from a TOML string. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// [`FlycamError::OptionsParse`] if the TOML is malformed, a field
    /// has the wrong type, or one key is bound to several actions.
    pub fn from_toml(content: &str) -> Result<Self, FlycamError> {
        let options: Self = toml::from_str(content)
            .map_err(|e| FlycamError::OptionsParse(e.to_string()))?;
        options.keybindings.validate()?;
        Ok(options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// [`FlycamError::Io`] if the file cannot be read,
    /// [`FlycamError::OptionsParse`] if it is not valid options TOML.
    pub fn load(path: &Path) -> Result<Self, FlycamError> {
        let content = std::fs::read_to_string(path).map_err(FlycamError::Io)?;
        let options = Self::from_toml(&content)?;
        log::info!("loaded options from {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// [`FlycamError::OptionsParse`] if serialization fails,
    /// [`FlycamError::Io`] if the file or its parent directory cannot be
    /// written.
    pub fn save(&self, path: &Path) -> Result<(), FlycamError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| FlycamError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(FlycamError::Io)?;
        }
        std::fs::write(path, content).map_err(FlycamError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::input::KeyAction;

    fn presets_dir() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/presets")
    }

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[camera]
speed = 25.0
";
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.camera.speed, 25.0);
        // Everything else should be default
        assert_eq!(opts.camera.fov, 45.0);
        assert_eq!(opts.controls.mouse_sensitivity, 0.05);
        assert_eq!(opts.window.clear_color, [0.2, 0.3, 0.3, 1.0]);
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = Options::from_toml("[camera]\nfov = \"wide\"").unwrap_err();
        assert!(matches!(err, FlycamError::OptionsParse(_)));
    }

    #[test]
    fn keybinding_lookup() {
        let opts = Options::default();
        assert_eq!(
            opts.keybindings.lookup("KeyW"),
            Some(KeyAction::MoveForward)
        );
        assert_eq!(opts.keybindings.lookup("Escape"), Some(KeyAction::Exit));
        assert_eq!(opts.keybindings.lookup("KeyZ"), None);
    }

    #[test]
    fn rebinding_steals_the_key() {
        let mut bindings = KeybindingOptions::default();
        bindings.bind(KeyAction::YawLeft, "KeyQ");
        bindings.bind(KeyAction::YawRight, "KeyQ");
        assert_eq!(bindings.lookup("KeyQ"), Some(KeyAction::YawRight));
        assert_eq!(bindings.key_for(KeyAction::YawLeft), None);
    }

    #[test]
    fn shared_key_is_rejected() {
        let toml_str = r#"
[keybindings.bindings]
move_forward = "KeyW"
exit = "KeyW"
yaw_left = "KeyW"
"#;
        let err = Options::from_toml(toml_str).unwrap_err();
        assert!(matches!(err, FlycamError::OptionsParse(_)));
        let message = err.to_string();
        assert!(message.contains("KeyW"));
        assert!(message.contains("MoveForward"));
    }

    #[test]
    fn shared_key_lookup_is_stable() {
        let mut bindings = KeybindingOptions::default();
        let _ = bindings.bindings.insert(KeyAction::Exit, "KeyW".into());
        let _ = bindings.bindings.insert(KeyAction::YawLeft, "KeyW".into());
        for _ in 0..50 {
            let copy = bindings.clone();
            assert_eq!(copy.lookup("KeyW"), Some(KeyAction::MoveForward));
        }
        assert!(bindings.validate().is_err());
        assert!(KeybindingOptions::default().validate().is_ok());
    }

    #[test]
    fn keybindings_parse_from_snake_case() {
        let toml_str = r#"
[keybindings.bindings]
move_forward = "ArrowUp"
exit = "KeyQ"
"#;
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(
            opts.keybindings.lookup("ArrowUp"),
            Some(KeyAction::MoveForward)
        );
        assert_eq!(opts.keybindings.lookup("KeyQ"), Some(KeyAction::Exit));
        // A bindings table replaces the defaults wholesale.
        assert_eq!(opts.keybindings.lookup("KeyW"), None);
    }

    #[test]
    fn shipped_presets_load() {
        let names = Options::list_presets(&presets_dir());
        assert_eq!(names, vec!["camera", "light_casters"]);

        let camera = Options::load(&presets_dir().join("camera.toml")).unwrap();
        assert_eq!(camera.camera.speed, 25.0);
        let lights =
            Options::load(&presets_dir().join("light_casters.toml")).unwrap();
        assert_eq!(lights.camera.speed, 5.0);
        assert_eq!(lights.window.width, 1024);
    }

    #[test]
    fn save_then_load() {
        let dir = std::env::temp_dir()
            .join(format!("flycam-options-{}", std::process::id()));
        let path = dir.join("nested/preset.toml");
        let mut opts = Options::default();
        opts.camera.position = [1.0, 2.0, 3.0];
        opts.save(&path).unwrap();
        assert_eq!(Options::load(&path).unwrap(), opts);
        assert_eq!(Options::list_presets(&dir.join("nested")), vec!["preset"]);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Options::load(Path::new("/nonexistent/flycam.toml"))
            .unwrap_err();
        assert!(matches!(err, FlycamError::Io(_)));
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("camera"));
        assert!(props.contains_key("controls"));
        assert!(props.contains_key("window"));
        assert!(!props.contains_key("keybindings"));

        let camera = &props["camera"]["properties"];
        assert!(camera.get("fov").is_some());
        assert!(camera.get("speed").is_some());
        assert!(camera.get("position").is_none());
    }
}
