use thiserror::Error;

/// Failures surfaced by the core when markup, panel input or configuration
/// do not match what the scene knows about.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SceneError {
    #[error("unknown palette preset `{0}`")]
    UnknownPreset(String),
    #[error("unknown panel control `{0}`")]
    UnknownControl(String),
    #[error("invalid color `{0}` (expected #rrggbb)")]
    InvalidColor(String),
    #[error("control `{control}` does not accept this kind of value")]
    ControlKindMismatch { control: &'static str },
    #[error("invalid value `{value}` for config key `{key}`")]
    InvalidConfig { key: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, SceneError>;
