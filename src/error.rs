use thiserror::Error;

pub type ShowcaseResult<T> = Result<T, ShowcaseError>;

#[derive(Debug, Error)]
pub enum ShowcaseError {
    #[error("unknown section: `{0}`")]
    UnknownSection(String),

    #[error("unknown chart slot: `{0}`")]
    UnknownSlot(String),

    #[error("chart slot `{0}` is already registered")]
    DuplicateSlot(String),

    #[error("no chart configuration for canvas `{0}`")]
    MissingChartConfig(String),

    #[error("invalid page layout: {0}")]
    InvalidLayout(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("chart backend failed for slot `{slot}`: {reason}")]
    ChartBackend { slot: String, reason: String },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
