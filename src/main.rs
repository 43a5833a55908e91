//! `flycam [PRESET | OPTIONS_TOML]`: open the fly-through viewer.

use std::path::{Path, PathBuf};

use flycam::{Options, Viewer};

const PRESETS_DIR: &str = "assets/presets";

/// Accept either a path to a TOML file or the name of a bundled preset.
fn resolve_options_path(input: &str) -> Result<PathBuf, String> {
    let direct = Path::new(input);
    if direct.exists() {
        return Ok(direct.to_path_buf());
    }

    let preset = Path::new(PRESETS_DIR).join(format!("{input}.toml"));
    if preset.exists() {
        return Ok(preset);
    }

    let available = Options::list_presets(Path::new(PRESETS_DIR));
    Err(format!(
        "No options file or preset named {input} (available presets: {})",
        available.join(", ")
    ))
}

fn main() {
    env_logger::init();

    let options = match std::env::args().nth(1) {
        Some(arg) => {
            let loaded = resolve_options_path(&arg)
                .and_then(|path| Options::load(&path).map_err(|e| e.to_string()));
            match loaded {
                Ok(options) => options,
                Err(e) => {
                    log::error!("{e}");
                    std::process::exit(1);
                }
            }
        }
        None => Options::default(),
    };

    if let Err(e) = Viewer::builder().with_options(options).build().run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
