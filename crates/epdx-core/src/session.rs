use crate::client::ExtractionClient;
use crate::error::EpdError;
use crate::export;
use crate::normalize::normalize;
use serde_json::Value;
use std::path::Path;
use tracing::info;

pub const MAX_PDF_BYTES: u64 = 50 * 1024 * 1024;

const PDF_MAGIC: &[u8] = b"%PDF-";

/// A validated file staged for extraction.
#[derive(Debug, Clone)]
pub struct SelectedFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// Explicit application context: the currently selected file and the result
/// of the last extraction, read by the presenter and the export encoder.
///
/// Extraction takes `&mut self`, so a second request while one is pending is
/// unrepresentable.
pub struct Session {
    client: ExtractionClient,
    current_file: Option<SelectedFile>,
    current_data: Option<Value>,
}

impl Session {
    pub fn new(client: ExtractionClient) -> Self {
        Self {
            client,
            current_file: None,
            current_data: None,
        }
    }

    /// Read and stage a file, validating type and size before any network
    /// call is made.
    pub fn select_file(&mut self, path: &Path) -> Result<(), EpdError> {
        let bytes = std::fs::read(path)?;
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("document.pdf")
            .to_string();
        self.select_bytes(name, bytes)
    }

    /// Stage in-memory file bytes, validating type (PDF magic bytes) and the
    /// 50 MiB size limit.
    pub fn select_bytes(&mut self, name: String, bytes: Vec<u8>) -> Result<(), EpdError> {
        if !bytes.starts_with(PDF_MAGIC) {
            return Err(EpdError::NotAPdf);
        }
        if bytes.len() as u64 > MAX_PDF_BYTES {
            return Err(EpdError::FileTooLarge);
        }
        info!("Selected {} ({} bytes)", name, bytes.len());
        self.current_file = Some(SelectedFile { name, bytes });
        Ok(())
    }

    /// Clear the staged file and any previous results.
    pub fn remove_file(&mut self) {
        self.current_file = None;
        self.current_data = None;
    }

    pub fn current_file(&self) -> Option<&SelectedFile> {
        self.current_file.as_ref()
    }

    pub fn current_data(&self) -> Option<&Value> {
        self.current_data.as_ref()
    }

    /// Upload the staged file and store the raw response.
    pub async fn extract(&mut self) -> Result<&Value, EpdError> {
        let file = self.current_file.clone().ok_or(EpdError::NoFileSelected)?;
        let data = self.client.extract(&file.name, file.bytes).await?;
        Ok(self.current_data.insert(data))
    }

    /// Pretty-printed JSON export of the raw response.
    pub fn export_json(&self) -> Result<String, EpdError> {
        let data = self.current_data.as_ref().ok_or(EpdError::NoData)?;
        export::to_json(data)
    }

    /// CSV export of the normalized field set.
    pub fn export_csv(&self) -> Result<String, EpdError> {
        let data = self.current_data.as_ref().ok_or(EpdError::NoData)?;
        export::to_csv(&normalize(data))
    }
}
