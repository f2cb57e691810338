use crate::errors::{AppError, AppResult};
use crate::signature::{MAX_SURFACE_SIDE, PenStyle, Rgba, SignatureCapture, SignatureEngine};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_export_dir")]
    pub export_dir: String,
    #[serde(default)]
    pub signature: SignatureConfig,
}

/// Signature surface and pen settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignatureConfig {
    #[serde(default = "default_engine")]
    pub engine: SignatureEngine,
    /// Backing width in pixels
    #[serde(default = "default_pad_width")]
    pub width: u32,
    /// Backing height in pixels
    #[serde(default = "default_pad_height")]
    pub height: u32,
    #[serde(default = "default_pen_width")]
    pub pen_width: f32,
    #[serde(default = "default_ink")]
    pub ink_color: Rgba,
    #[serde(default = "default_background")]
    pub background_color: Rgba,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_export_dir() -> String {
    ".".to_string()
}
fn default_engine() -> SignatureEngine {
    SignatureEngine::Smooth
}
fn default_pad_width() -> u32 {
    600
}
fn default_pad_height() -> u32 {
    220
}
fn default_pen_width() -> f32 {
    2.0
}
fn default_ink() -> Rgba {
    Rgba::BLACK
}
fn default_background() -> Rgba {
    Rgba::TRANSPARENT
}

impl Default for SignatureConfig {
    fn default() -> Self {
        Self {
            engine: default_engine(),
            width: default_pad_width(),
            height: default_pad_height(),
            pen_width: default_pen_width(),
            ink_color: default_ink(),
            background_color: default_background(),
        }
    }
}

impl SignatureConfig {
    pub fn pen_style(&self) -> PenStyle {
        PenStyle {
            width: self.pen_width,
            ink: self.ink_color,
            background: self.background_color,
        }
    }

    /// Reject surface sizes outside `1..=MAX_SURFACE_SIDE`.
    pub fn validate(&self) -> AppResult<()> {
        for (name, value) in [("width", self.width), ("height", self.height)] {
            if value == 0 || value > MAX_SURFACE_SIDE {
                return Err(AppError::Config(format!(
                    "signature.{name} must be between 1 and {MAX_SURFACE_SIDE}, got {value}"
                )));
            }
        }
        Ok(())
    }

    /// A fresh pad from the configured engine.
    pub fn create_pad(&self) -> Box<dyn SignatureCapture> {
        self.engine.create(self.width, self.height, self.pen_style())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            export_dir: default_export_dir(),
            signature: SignatureConfig::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("presensi")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".presensi")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("presensi.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("presensi.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        let cfg: Config =
            serde_yaml::from_str(content).map_err(|e| AppError::Config(e.to_string()))?;
        cfg.signature.validate()?;
        Ok(cfg)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Initialize configuration and database files.
    ///
    /// Returns the database path that was configured.
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();

        // DB name: user provided or default
        let db_path = match custom_name {
            Some(name) => {
                let p = Path::new(&name);
                if p.is_absolute() {
                    p.to_path_buf()
                } else {
                    dir.join(p)
                }
            }
            None => Self::database_file(),
        };

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            fs::create_dir_all(&dir)?;
            let yaml = config.to_yaml()?;
            let mut file = fs::File::create(Self::config_file()).map_err(|_| AppError::ConfigSave)?;
            file.write_all(yaml.as_bytes())
                .map_err(|_| AppError::ConfigSave)?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        Ok(db_path)
    }
}
