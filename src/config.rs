use std::path::PathBuf;

/// Runtime configuration for the pipeline and the HTTP surface.
///
/// Everything the pipeline needs is carried here explicitly; no module reads
/// process-global state after startup. The API key is the only value sourced
/// from the environment, and that read happens once in `main`.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Root directory to scan.
    pub root: PathBuf,
    /// File name suffix to include, e.g. ".js".
    pub extension: String,
    /// Where the assembled graph JSON is persisted.
    pub output: PathBuf,
    /// HTTP listen port.
    pub port: u16,
    /// API key for the text-generation endpoints. Analysis works without it.
    pub gemini_api_key: Option<String>,
    /// Model name for the text-generation endpoints.
    pub gemini_model: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            extension: ".js".to_string(),
            output: PathBuf::from("output/graph.json"),
            port: 3000,
            gemini_api_key: None,
            gemini_model: "gemini-1.5-pro".to_string(),
        }
    }
}
