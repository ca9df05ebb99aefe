use thiserror::Error;

/// All kinds of errors in this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// The lattice grew past its configured cell ceiling.
    #[error("lattice holds {cells} cells, over the limit of {limit}")]
    CellLimitExceeded { cells: usize, limit: usize },

    /// Living cells grew past the configured population ceiling.
    #[error("population reached {population}, over the limit of {limit}")]
    PopulationLimitExceeded { population: usize, limit: usize },

    #[error("config file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("config is not valid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
