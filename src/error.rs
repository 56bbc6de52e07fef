#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    IO(#[from] std::io::Error),
    #[error(transparent)]
    YAML(#[from] serde_yaml::Error),
    #[error(transparent)]
    Regex(#[from] fancy_regex::Error),
    #[error(transparent)]
    AhoCorasick(#[from] aho_corasick::BuildError),
    #[error("unknown browser family in signature table: {0:?}")]
    UnknownBrowserFamily(String),
    #[error("unknown os family in signature table: {0:?}")]
    UnknownOsFamily(String),
}

pub type Result<T> = std::result::Result<T, Error>;
