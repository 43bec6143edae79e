use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot read {path}: {source}")]
    FileRead {
        path: String,
        source: std::io::Error,
    },

    #[error("request failed: {0}")]
    Request(String),

    #[error("HTTP status {0}")]
    HttpStatus(u16),

    #[error("no readable text in fetched document")]
    EmptyDocument,

    #[error("self-test digest mismatch for {input}: got {got}, expected {want}")]
    SelfTestMismatch {
        input: &'static str,
        got: String,
        want: &'static str,
    },
}
