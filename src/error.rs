use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("request to Urban Dictionary failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("could not decode Urban Dictionary response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),

    #[error("{term} is not on Urban Dictionary")]
    NotFound { term: String },

    #[error("no word above {threshold} thumbs up after {attempts} attempts")]
    NoQualifyingEntry { threshold: u64, attempts: u32 },

    #[error("Please set the MAILGUN_PUBLIC_API_KEY and MAILGUN_DOMAIN variables.")]
    Configuration,

    #[error("mail provider rejected the message: {0}")]
    MailProvider(String),

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
