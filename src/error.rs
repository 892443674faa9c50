use thiserror::Error;

use crate::options::ChartKind;

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration rejected for {kind:?} chart: {source}")]
    Rejected {
        kind: ChartKind,
        #[source]
        source: serde_json::Error,
    },

    #[error("unknown chart kind: {0:?}")]
    UnknownKind(String),
}
