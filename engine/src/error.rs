use thiserror::Error;

/// Failures the engine actually surfaces. Per the tool's design only the
/// source workbook itself can abort a run: value resolution and arithmetic
/// degrade to defaults instead of erroring.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("workbook file not found: {0}")]
    WorkbookNotFound(String),

    #[error("failed to read workbook: {0}")]
    WorkbookRead(String),

    #[error("scenario sheet not found: {0}")]
    ScenarioNotFound(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("export error: {source}")]
    Csv {
        #[from]
        source: csv::Error,
    },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
