use crate::core::calculator::hours::MAX_SHIFT_HOURS;
use crate::core::summary::{DEFAULT_ADVANCE, DEFAULT_HOURLY_RATE, PayRates};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Sheet holding the clock scans inside the uploaded workbook.
    #[serde(default = "default_sheet_name")]
    pub sheet_name: String,
    #[serde(default = "default_hourly_rate")]
    pub hourly_rate: f64,
    /// Placeholder written in the "Tạm ứng" row; the payer edits it later.
    #[serde(default = "default_advance")]
    pub advance: f64,
    /// Pairings longer than this get blank hours.
    #[serde(default = "default_max_shift_hours")]
    pub max_shift_hours: f64,
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,
}

fn default_sheet_name() -> String {
    "Cham_Cong".to_string()
}
fn default_hourly_rate() -> f64 {
    DEFAULT_HOURLY_RATE
}
fn default_advance() -> f64 {
    DEFAULT_ADVANCE
}
fn default_max_shift_hours() -> f64 {
    MAX_SHIFT_HOURS
}
fn default_output_dir() -> String {
    ".".to_string()
}
fn default_file_prefix() -> String {
    "Bảng_lương_nhân_viên_Ori".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sheet_name: default_sheet_name(),
            hourly_rate: default_hourly_rate(),
            advance: default_advance(),
            max_shift_hours: default_max_shift_hours(),
            output_dir: default_output_dir(),
            file_prefix: default_file_prefix(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("rtimesheet")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rtimesheet")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rtimesheet.conf")
    }

    /// Load configuration from `path` (or the standard location).
    /// A missing file means defaults; a broken one is an error.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_file);

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    pub fn pay_rates(&self) -> PayRates {
        PayRates {
            hourly_rate: self.hourly_rate,
            advance: self.advance,
        }
    }
}
