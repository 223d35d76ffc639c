//! Game configuration
//!
//! Uses RON (Rusty Object Notation) for a human-readable settings file.
//! Every field has a compiled default, so a missing file or a partial file
//! still produces a playable setup. A malformed or out-of-range file is an
//! error and the caller decides whether to fall back.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default location of the settings file, relative to the working directory
pub const CONFIG_PATH: &str = "assets/config.ron";

/// Validation limits to reject nonsense values before they reach the scene
pub mod limits {
    /// Maximum window dimension (width or height)
    pub const MAX_DIMENSION: i32 = 16_384;
    /// Maximum number of enemies spawned at scene setup
    pub const MAX_ENEMIES: usize = 64;
    /// Maximum coordinate/speed magnitude (prevents overflow issues)
    pub const MAX_COORD: f32 = 1_000_000.0;
}

/// Error type for config loading
#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    ParseError(ron::error::SpannedError),
    SerializeError(ron::Error),
    ValidationError(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl From<ron::error::SpannedError> for ConfigError {
    fn from(e: ron::error::SpannedError) -> Self {
        ConfigError::ParseError(e)
    }
}

impl From<ron::Error> for ConfigError {
    fn from(e: ron::Error) -> Self {
        ConfigError::SerializeError(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "Parse error: {}", e),
            ConfigError::SerializeError(e) => write!(f, "Serialize error: {}", e),
            ConfigError::ValidationError(e) => write!(f, "Validation error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Window title and dimensions
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: i32,
    pub height: i32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "STARSPIN".to_string(),
            width: 480,
            height: 640,
        }
    }
}

/// Scrolling starfield settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackgroundConfig {
    /// Image loaded at startup; a procedural starfield is generated if missing
    pub image: String,
    /// Tiling offset decrement per frame, in pixels (not scaled by time)
    pub scroll_step: f32,
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            image: "assets/starfield.png".to_string(),
            scroll_step: 4.0,
        }
    }
}

/// Player marker settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Side length of the square marker
    pub size: f32,
    /// Horizontal spawn position
    pub spawn_x: f32,
    /// Vertical position the dodge hop rises to
    pub dodge_target_y: f32,
    /// Duration of each dodge stage (rise, fall) in milliseconds
    pub dodge_stage_ms: f32,
    /// Marker spin rate in radians per millisecond
    pub spin_speed: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            size: 50.0,
            spawn_x: 100.0,
            dodge_target_y: 100.0,
            dodge_stage_ms: 300.0,
            spin_speed: std::f32::consts::TAU / 1000.0, // one turn per second
        }
    }
}

/// Enemy drone settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyConfig {
    /// How many drones to spawn at scene setup
    pub count: usize,
    /// Horizontal spawn position of the first drone
    pub spawn_x: f32,
    /// Vertical lane the drones travel in
    pub spawn_y: f32,
    /// Horizontal gap between consecutive drones
    pub spacing: f32,
    /// Leftward speed in pixels per second
    pub speed: f32,
    /// Drawn (and wraparound) sprite width
    pub sprite_size: f32,
}

impl Default for EnemyConfig {
    fn default() -> Self {
        Self {
            count: 1,
            spawn_x: 480.0,
            spawn_y: 100.0,
            spacing: 96.0,
            speed: 100.0,
            sprite_size: 48.0,
        }
    }
}

/// Key bindings by name, resolved to key codes at startup
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BindingsConfig {
    pub move_left: String,
    pub move_right: String,
    pub fire: String,
    pub toggle_overlay: String,
}

impl Default for BindingsConfig {
    fn default() -> Self {
        Self {
            move_left: "Left".to_string(),
            move_right: "Right".to_string(),
            fire: "F".to_string(),
            toggle_overlay: "F1".to_string(),
        }
    }
}

/// Top-level settings container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub background: BackgroundConfig,
    pub player: PlayerConfig,
    pub enemy: EnemyConfig,
    pub bindings: BindingsConfig,
}

/// Check if a float is valid (finite and within coordinate limits)
fn is_valid_float(f: f32) -> bool {
    f.is_finite() && f.abs() <= limits::MAX_COORD
}

fn validate(config: &GameConfig) -> Result<(), ConfigError> {
    let err = |msg: String| Err(ConfigError::ValidationError(msg));

    if config.window.width <= 0 || config.window.width > limits::MAX_DIMENSION {
        return err(format!("window width out of range: {}", config.window.width));
    }
    if config.window.height <= 0 || config.window.height > limits::MAX_DIMENSION {
        return err(format!("window height out of range: {}", config.window.height));
    }
    if !is_valid_float(config.background.scroll_step) || config.background.scroll_step <= 0.0 {
        return err(format!("scroll_step must be positive: {}", config.background.scroll_step));
    }
    if !is_valid_float(config.player.size) || config.player.size <= 0.0 {
        return err(format!("player size must be positive: {}", config.player.size));
    }
    if !is_valid_float(config.player.spawn_x) || !is_valid_float(config.player.dodge_target_y) {
        return err("player positions must be finite".to_string());
    }
    if !is_valid_float(config.player.dodge_stage_ms) || config.player.dodge_stage_ms <= 0.0 {
        return err(format!("dodge_stage_ms must be positive: {}", config.player.dodge_stage_ms));
    }
    if !is_valid_float(config.player.spin_speed) {
        return err(format!("spin_speed must be finite: {}", config.player.spin_speed));
    }
    if config.enemy.count > limits::MAX_ENEMIES {
        return err(format!(
            "enemy count too large ({} > {})",
            config.enemy.count,
            limits::MAX_ENEMIES
        ));
    }
    if !is_valid_float(config.enemy.speed) || config.enemy.speed < 0.0 {
        return err(format!("enemy speed must be non-negative: {}", config.enemy.speed));
    }
    if !is_valid_float(config.enemy.sprite_size) || config.enemy.sprite_size <= 0.0 {
        return err(format!("enemy sprite_size must be positive: {}", config.enemy.sprite_size));
    }
    if !is_valid_float(config.enemy.spawn_x)
        || !is_valid_float(config.enemy.spawn_y)
        || !is_valid_float(config.enemy.spacing)
    {
        return err("enemy positions must be finite".to_string());
    }

    for name in [
        &config.bindings.move_left,
        &config.bindings.move_right,
        &config.bindings.fire,
        &config.bindings.toggle_overlay,
    ] {
        if crate::input::parse_key_name(name).is_none() {
            return err(format!("unknown key name: {:?}", name));
        }
    }

    Ok(())
}

impl GameConfig {
    /// Load and validate settings from a RON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<GameConfig, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config: GameConfig = ron::from_str(&contents)?;
        validate(&config)?;
        Ok(config)
    }

    /// Save settings as pretty RON (used to generate a starter file)
    #[allow(dead_code)]
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(4)
            .indentor("  ".to_string());
        let ron_string = ron::ser::to_string_pretty(self, pretty)?;
        fs::write(path, ron_string)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_round_trips() {
        let file = NamedTempFile::new().unwrap();
        let config = GameConfig::default();
        config.save(file.path()).unwrap();

        let loaded = GameConfig::load(file.path()).unwrap();
        assert_eq!(loaded.window.width, 480);
        assert_eq!(loaded.window.height, 640);
        assert!((loaded.background.scroll_step - 4.0).abs() < 0.001);
        assert!((loaded.enemy.speed - 100.0).abs() < 0.001);
        assert_eq!(loaded.bindings.fire, "F");
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let file = NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "(window: (width: 800))").unwrap();

        let loaded = GameConfig::load(file.path()).unwrap();
        assert_eq!(loaded.window.width, 800);
        // untouched sections keep their defaults
        assert_eq!(loaded.window.height, 640);
        assert_eq!(loaded.enemy.count, 1);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = GameConfig::load("does/not/exist.ron").unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
    }

    #[test]
    fn test_garbage_is_parse_error() {
        let file = NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "not ron at all {{{").unwrap();

        let err = GameConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_rejects_bad_window_size() {
        let file = NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "(window: (width: -5))").unwrap();

        let err = GameConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_rejects_unknown_key_name() {
        let file = NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "(bindings: (fire: \"Banana\"))").unwrap();

        let err = GameConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_rejects_zero_dodge_duration() {
        let file = NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "(player: (dodge_stage_ms: 0.0))").unwrap();

        let err = GameConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }
}
