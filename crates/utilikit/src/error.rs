#[derive(thiserror::Error, Debug, serde::Deserialize, serde::Serialize)]
#[allow(clippy::enum_variant_names)]
pub enum Error {
    #[error("Generic {0}")]
    Generic(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unknown unit: {0}")]
    UnknownUnit(String),

    #[error("Clipboard unavailable: {0}")]
    ClipboardUnavailable(String),
}
