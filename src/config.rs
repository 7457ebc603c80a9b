use anyhow::{Context, Result, ensure};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const WINDOW_TITLE: &str = "Snake Game";
pub const CONFIG_ENV_VAR: &str = "SNAKE_CONFIG";
const DEFAULT_CONFIG_FILE: &str = "snake.json";

const MIN_GRID_DIM: i32 = 4;
const MAX_GRID_DIM: i32 = 256;
const MAX_FPS: u32 = 120;
const MAX_WINDOW_DIM: i32 = 8192;

/// Game tunables. Every field falls back to its default when absent from the
/// JSON file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub grid_width: i32,
    pub grid_height: i32,
    pub cell_size: i32,
    pub frames_per_second: u32,
    pub initial_length: usize,
    pub max_length: usize,
    pub keep_score_on_restart: bool,
    pub food_avoids_snake: bool,
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            grid_width: 32,
            grid_height: 24,
            cell_size: 20,
            frames_per_second: 15,
            initial_length: 3,
            max_length: 100,
            keep_score_on_restart: false,
            food_avoids_snake: true,
            seed: None,
        }
    }
}

impl Config {
    /// Location of the config file: `$SNAKE_CONFIG`, else `snake.json`.
    pub fn default_path() -> PathBuf {
        std::env::var_os(CONFIG_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
    }

    /// Loads and validates the config at `path`. A missing file yields the
    /// defaults; a present but broken one is an error.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("invalid config file {}", path.display()))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(text).context("malformed config JSON")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            (MIN_GRID_DIM..=MAX_GRID_DIM).contains(&self.grid_width),
            "grid_width must be in {MIN_GRID_DIM}..={MAX_GRID_DIM}, got {}",
            self.grid_width
        );
        ensure!(
            (MIN_GRID_DIM..=MAX_GRID_DIM).contains(&self.grid_height),
            "grid_height must be in {MIN_GRID_DIM}..={MAX_GRID_DIM}, got {}",
            self.grid_height
        );
        ensure!(self.cell_size >= 1, "cell_size must be positive, got {}", self.cell_size);
        for (axis, cells) in [("width", self.grid_width), ("height", self.grid_height)] {
            let pixels = cells.checked_mul(self.cell_size).filter(|px| *px <= MAX_WINDOW_DIM);
            ensure!(
                pixels.is_some(),
                "window {axis} of {cells} cells x {} px exceeds {MAX_WINDOW_DIM} px",
                self.cell_size
            );
        }
        ensure!(
            (1..=MAX_FPS).contains(&self.frames_per_second),
            "frames_per_second must be in 1..={MAX_FPS}, got {}",
            self.frames_per_second
        );
        ensure!(
            self.initial_length >= 1 && self.initial_length <= (self.grid_width / 2) as usize,
            "initial_length must be in 1..={}, got {}",
            self.grid_width / 2,
            self.initial_length
        );
        ensure!(
            self.max_length >= self.initial_length && self.max_length <= self.cell_count(),
            "max_length must be in {}..={}, got {}",
            self.initial_length,
            self.cell_count(),
            self.max_length
        );
        Ok(())
    }

    pub fn cell_count(&self) -> usize {
        (self.grid_width * self.grid_height) as usize
    }

    pub fn window_size(&self) -> (i32, i32) {
        (self.grid_width * self.cell_size, self.grid_height * self.cell_size)
    }

    pub fn frame_interval(&self) -> f64 {
        1.0 / self.frames_per_second as f64
    }
}
