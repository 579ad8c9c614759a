/// Failure while fetching or decoding a provider response
#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    #[error("HTTP client error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Provider returned status {status} for {url}")]
    Status { status: u16, url: String },

    #[error("Unexpected response shape: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Rejected selector input
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum SelectionError {
    #[error("No category selected")]
    NoCategory,

    #[error("\"{subgenre}\" is not a subgenre of {category}")]
    UnknownSubgenre { category: String, subgenre: String },
}
