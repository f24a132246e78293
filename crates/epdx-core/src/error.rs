#[derive(Debug, thiserror::Error)]
pub enum EpdError {
    #[error("Please select a PDF file.")]
    NotAPdf,

    #[error("File size too large. Please select a PDF file smaller than 50MB.")]
    FileTooLarge,

    #[error("no file selected")]
    NoFileSelected,

    #[error("no data available to export")]
    NoData,

    #[error("API Error: {status} {status_text}")]
    Api { status: u16, status_text: String },

    #[error("API is unreachable or unhealthy")]
    Unhealthy,

    #[error("export failed: {0}")]
    Export(String),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
