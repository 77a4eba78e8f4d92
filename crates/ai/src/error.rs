/// Failures talking to the AI service.
///
/// The display strings are returned to API clients verbatim.
#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("AI service is not configured.")]
    NotConfigured,

    /// Network, DNS, timeout, or body decoding failure.
    #[error("Gemini API request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Gemini API request failed: {status} - {body}")]
    HttpStatus { status: u16, body: String },

    /// The service answered 200 with an `error` object instead of candidates.
    #[error("Gemini API Error: {0}")]
    Api(String),

    #[error("Invalid response structure from Gemini API. No candidates found.")]
    NoCandidates,

    /// The candidate text was not the JSON shape we asked for.
    #[error("Malformed AI response: {0}")]
    Malformed(#[from] serde_json::Error),
}
