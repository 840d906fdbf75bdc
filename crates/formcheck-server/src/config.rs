use crate::ServerError;
use formcheck_analysis::FormStandards;
use formcheck_base::{log::LevelFilter, LogConfig};
use formcheck_pose::{Device, CONFIDENCE_THRESHOLD};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Looked up in the working directory when no path is given on the command line.
pub const DEFAULT_CONFIG_FILE: &str = "formcheck.toml";

pub const DEFAULT_ADDR: &str = "0.0.0.0:5000";
pub const DEFAULT_MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

/// Server configuration, read from TOML. Every field has a default, so an
/// empty file (or no file at all) gives a working setup.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub model: ModelConfig,
    pub analysis: AnalysisConfig,
    pub log: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub addr: String,
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: DEFAULT_ADDR.to_string(),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceKind {
    Cpu,
    Cuda,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    pub path: PathBuf,
    /// Reported by `/api/health`.
    pub name: String,
    pub device: DeviceKind,
    pub cuda_device_id: i32,
    /// Minimum person score kept before NMS.
    pub person_threshold: f32,
    pub iou_threshold: f32,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("models/yolov8s-pose.onnx"),
            name: "YOLOv8s-pose".to_string(),
            device: DeviceKind::Cpu,
            cuda_device_id: 0,
            person_threshold: 0.25,
            iou_threshold: 0.45,
        }
    }
}

impl ModelConfig {
    pub fn device(&self) -> Device {
        match self.device {
            DeviceKind::Cpu => Device::Cpu,
            DeviceKind::Cuda => Device::Cuda {
                device_id: self.cuda_device_id,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Keypoints below this confidence are treated as not detected.
    pub keypoint_threshold: f32,
    #[serde(flatten)]
    pub standards: FormStandards,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            keypoint_threshold: CONFIDENCE_THRESHOLD,
            standards: FormStandards::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `off`, `error`, `warn`, `info`, `debug` or `trace`.
    pub level: Option<String>,
    pub dir: Option<PathBuf>,
}

impl LoggingConfig {
    pub fn to_log_config(&self) -> Result<LogConfig, ServerError> {
        let mut config = LogConfig::stdout();
        if let Some(level) = &self.level {
            let level = LevelFilter::from_str(level)
                .map_err(|_| ServerError::Config(format!("unknown log level: {level}")))?;
            config = config.with_level(level);
        }
        if let Some(dir) = &self.dir {
            config = config.with_dir(dir);
        }
        Ok(config)
    }
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self, ServerError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ServerError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ServerError::Config(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&content)
    }

    /// Load `path` if given, else [`DEFAULT_CONFIG_FILE`] if it exists, else defaults.
    ///
    /// Also returns the file the configuration came from, if any.
    pub fn discover(path: Option<PathBuf>) -> Result<(Self, Option<PathBuf>), ServerError> {
        let path = path.or_else(|| {
            let default = PathBuf::from(DEFAULT_CONFIG_FILE);
            default.is_file().then_some(default)
        });
        match path {
            Some(path) => Ok((Self::load(&path)?, Some(path))),
            None => Ok((Self::default(), None)),
        }
    }

    /// Reject values that would make every request fail or every frame fail grading.
    pub fn validate(&self) -> Result<(), ServerError> {
        if self.server.max_body_bytes == 0 {
            return Err(ServerError::Config("server.max_body_bytes must be positive".into()));
        }
        for (name, value) in [
            ("analysis.keypoint_threshold", self.analysis.keypoint_threshold),
            ("model.person_threshold", self.model.person_threshold),
            ("model.iou_threshold", self.model.iou_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ServerError::Config(format!(
                    "{name} must be within [0, 1], got {value}"
                )));
            }
        }
        let standards = &self.analysis.standards;
        for (name, range) in [
            ("elbow_angle", standards.elbow_angle),
            ("knee_bend", standards.knee_bend),
            ("shooting_arc", standards.shooting_arc),
        ] {
            if range.min.is_nan() || range.max.is_nan() || range.min > range.max {
                return Err(ServerError::Config(format!(
                    "analysis.{name}: min {} exceeds max {}",
                    range.min, range.max
                )));
            }
        }
        Ok(())
    }
}
