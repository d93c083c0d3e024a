use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("The configured API host can not be used as a base URL")]
    ApiHostUnusable,
    #[error(transparent)]
    Config(#[from] confy::ConfyError),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error(transparent)]
    IO(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("An API key is required - set {0} or add api_key to the config file")]
    MissingApiKey(String),
    #[error(transparent)]
    Url(#[from] url::ParseError),
}
