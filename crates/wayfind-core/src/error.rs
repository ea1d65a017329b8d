use thiserror::Error;

#[derive(Error, Debug)]
pub enum WayfindError {
    #[error("Unknown location: {0}")]
    UnknownLocation(String),

    #[error("Camera API not available on this device")]
    CameraUnavailable,

    #[error("Camera permission denied")]
    CameraPermissionDenied,

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, WayfindError>;
