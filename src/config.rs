use crate::cli::Cli;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://api.api-ninjas.com/v1/cars";
pub const DEFAULT_IMAGE_DIR: &str = "the-car-connection-picture-dataset";
pub const METADATA_FILE_NAME: &str = "cars_metadata.csv";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Runtime settings resolved from the command line
#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub api_key: String,
    pub image_dir: PathBuf,
    pub metadata_csv: PathBuf,
    pub timeout: Duration,
    pub output: Option<PathBuf>,
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Self {
        let metadata_csv = cli
            .metadata_csv
            .clone()
            .unwrap_or_else(|| cli.image_dir.join(METADATA_FILE_NAME));

        Self {
            api_url: cli.api_url.clone(),
            api_key: cli.api_key.clone(),
            image_dir: cli.image_dir.clone(),
            metadata_csv,
            timeout: Duration::from_secs(cli.timeout_secs),
            output: cli.output.clone(),
        }
    }
}
