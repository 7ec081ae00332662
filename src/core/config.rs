//! Runtime configuration.
//!
//! - `BattleConfig`: where state and output live, and an optional seed
//! - `ImageConfig`: how the board text is rasterized
//!
//! Both have defaults matching the file names the tools have always used,
//! so a bare invocation in a working directory needs no setup.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default state file name.
pub const DEFAULT_STATE_FILE: &str = "battle_state.txt";

/// Default board text file name.
pub const DEFAULT_MAP_FILE: &str = "battle_map.txt";

/// Default board image file name.
pub const DEFAULT_IMAGE_FILE: &str = "battle_map.png";

/// Environment variable overriding the state file path.
pub const ENV_STATE_FILE: &str = "BATTLE_STATE_FILE";

/// Environment variable overriding the board text file path.
pub const ENV_MAP_FILE: &str = "BATTLE_MAP_FILE";

/// Environment variable overriding the board image file path.
pub const ENV_IMAGE_FILE: &str = "BATTLE_IMAGE_FILE";

/// Environment variable fixing the RNG seed.
pub const ENV_SEED: &str = "BATTLE_SEED";

/// File locations and seeding for one invocation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleConfig {
    /// Persisted counters and grid.
    pub state_path: PathBuf,

    /// Rendered board text, overwritten by every step.
    pub map_path: PathBuf,

    /// PNG written by the image exporter.
    pub image_path: PathBuf,

    /// Fixed RNG seed. `None` seeds from the operating system.
    pub seed: Option<u64>,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            state_path: PathBuf::from(DEFAULT_STATE_FILE),
            map_path: PathBuf::from(DEFAULT_MAP_FILE),
            image_path: PathBuf::from(DEFAULT_IMAGE_FILE),
            seed: None,
        }
    }
}

impl BattleConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overridden by `BATTLE_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(path) = lookup(ENV_STATE_FILE) {
            config.state_path = path.into();
        }
        if let Some(path) = lookup(ENV_MAP_FILE) {
            config.map_path = path.into();
        }
        if let Some(path) = lookup(ENV_IMAGE_FILE) {
            config.image_path = path.into();
        }
        if let Some(raw) = lookup(ENV_SEED) {
            match raw.trim().parse::<u64>() {
                Ok(seed) => config.seed = Some(seed),
                Err(err) => log::warn!("ignoring {ENV_SEED}={raw:?}: {err}"),
            }
        }

        config
    }

    /// Place all three files in `dir`, keeping their default names.
    #[must_use]
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        Self {
            state_path: dir.join(DEFAULT_STATE_FILE),
            map_path: dir.join(DEFAULT_MAP_FILE),
            image_path: dir.join(DEFAULT_IMAGE_FILE),
            seed: None,
        }
    }

    /// Set the state file path.
    #[must_use]
    pub fn with_state_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.state_path = path.into();
        self
    }

    /// Set the board text file path.
    #[must_use]
    pub fn with_map_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.map_path = path.into();
        self
    }

    /// Set the board image file path.
    #[must_use]
    pub fn with_image_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.image_path = path.into();
        self
    }

    /// Fix the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// An RGB color.
pub type Rgb = [u8; 3];

/// Rasterization settings for the board image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageConfig {
    /// Integer scale applied to the 6×9 glyph cell.
    pub scale: u32,

    /// Blank margin around the text, in pixels.
    pub padding: u32,

    pub background: Rgb,

    pub foreground: Rgb,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            scale: 2,
            padding: 10,
            background: [255, 255, 255],
            foreground: [0, 0, 0],
        }
    }
}

impl ImageConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the glyph scale. Values below 1 are raised to 1.
    #[must_use]
    pub fn with_scale(mut self, scale: u32) -> Self {
        self.scale = scale.max(1);
        self
    }

    /// Set the margin in pixels.
    #[must_use]
    pub fn with_padding(mut self, padding: u32) -> Self {
        self.padding = padding;
        self
    }

    /// Set background and foreground colors.
    #[must_use]
    pub fn with_colors(mut self, background: Rgb, foreground: Rgb) -> Self {
        self.background = background;
        self.foreground = foreground;
        self
    }
}
