use crate::core::calendar::{
    CalendarWindow, DEFAULT_SLOT_MINUTES, DEFAULT_WINDOW_END, DEFAULT_WINDOW_START,
};
use crate::core::clock;
use crate::core::week;
use crate::errors::{AppError, AppResult};
use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_user")]
    pub user: String,
    /// Weekday the reporting week starts on. Thursday is the historical
    /// default of this timesheet; change it here, not in code.
    #[serde(default = "default_week_start")]
    pub week_start: String,
    /// Calendar display window (entries outside it are clipped or hidden).
    #[serde(default = "default_day_start")]
    pub day_start: String,
    #[serde(default = "default_day_end")]
    pub day_end: String,
    #[serde(default = "default_slot_minutes")]
    pub slot_minutes: i64,
}

fn default_user() -> String {
    "default".to_string()
}
fn default_week_start() -> String {
    "thu".to_string()
}
fn default_day_start() -> String {
    clock::minutes_to_label(DEFAULT_WINDOW_START)
}
fn default_day_end() -> String {
    clock::minutes_to_label(DEFAULT_WINDOW_END)
}
fn default_slot_minutes() -> i64 {
    DEFAULT_SLOT_MINUTES
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            user: default_user(),
            week_start: default_week_start(),
            day_start: default_day_start(),
            day_end: default_day_end(),
            slot_minutes: default_slot_minutes(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".chargelog")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("chargelog.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("chargelog.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Resolve a user-supplied database path: absolute paths are kept as-is,
    /// relative ones live in the config directory.
    pub fn resolve_db_path(name: &str) -> PathBuf {
        let p = std::path::Path::new(name);
        if p.is_absolute() {
            p.to_path_buf()
        } else {
            Self::config_dir().join(p)
        }
    }

    /// Initialize configuration and database files.
    /// Returns the resolved database path so callers open the same file the
    /// config records.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let db_path = match custom_db {
            Some(name) => Self::resolve_db_path(&name),
            None => Self::database_file(),
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Self::default()
        };

        if !is_test {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| AppError::Config(e.to_string()))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        Ok(db_path)
    }

    /// The configured week-start weekday.
    pub fn week_start_weekday(&self) -> AppResult<Weekday> {
        week::parse_weekday(&self.week_start)
            .ok_or_else(|| AppError::InvalidWeekday(self.week_start.clone()))
    }

    /// The configured calendar display window.
    pub fn window(&self) -> AppResult<CalendarWindow> {
        let start_minutes = clock::time_to_minutes(&self.day_start)?;
        let end_minutes = clock::time_to_minutes(&self.day_end)?;
        if start_minutes >= end_minutes {
            return Err(AppError::Config(format!(
                "day_start {} is not before day_end {}",
                self.day_start, self.day_end
            )));
        }
        Ok(CalendarWindow {
            start_minutes,
            end_minutes,
            slot_minutes: self.slot_minutes,
        })
    }
}
