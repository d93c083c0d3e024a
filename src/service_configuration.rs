use crate::cli::Cli;
use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

pub const API_HOST_ENV_VAR: &str = "EV_API_HOST";
pub const API_KEY_ENV_VAR: &str = "EV_API_KEY";

const DEFAULT_API_HOST: &str = "https://www.ipqualityscore.com";

#[derive(Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct FileConfig {
    pub api_host: Option<String>,
    pub api_key: Option<String>,
}

pub trait Configuration {
    fn abuse_strictness(&self) -> u8;

    fn api_host(&self) -> &str;

    fn api_key(&self) -> &str;

    fn column_index(&self) -> usize;

    fn fast(&self) -> bool;

    fn input_path(&self) -> &Path;

    fn limit(&self) -> usize;

    fn output_path(&self) -> &Path;

    fn timeout(&self) -> u32;
}

#[derive(Debug)]
pub struct ServiceConfiguration<'a> {
    api_host: String,
    api_key: String,
    cli: &'a Cli,
}

impl<'a> ServiceConfiguration<'a> {
    pub fn new<I>(
        cli: &'a Cli,
        env_vars: I,
        config_file_location: &Path,
    ) -> Result<Self, AppError>
    where
        I: Iterator<Item = (String, String)>,
    {
        let file_config: FileConfig = confy::load_path(config_file_location)?;
        let env: HashMap<String, String> = env_vars.collect();

        let api_key = non_empty(env.get(API_KEY_ENV_VAR).cloned())
            .or_else(|| non_empty(file_config.api_key))
            .ok_or_else(|| AppError::MissingApiKey(API_KEY_ENV_VAR.into()))?;

        let api_host = non_empty(env.get(API_HOST_ENV_VAR).cloned())
            .or_else(|| non_empty(file_config.api_host))
            .unwrap_or_else(|| DEFAULT_API_HOST.into());

        Ok(Self {
            api_host,
            api_key,
            cli,
        })
    }
}

impl Configuration for ServiceConfiguration<'_> {
    fn abuse_strictness(&self) -> u8 {
        self.cli.abuse_strictness
    }

    fn api_host(&self) -> &str {
        &self.api_host
    }

    fn api_key(&self) -> &str {
        &self.api_key
    }

    fn column_index(&self) -> usize {
        self.cli.column
    }

    fn fast(&self) -> bool {
        self.cli.fast
    }

    fn input_path(&self) -> &Path {
        &self.cli.input
    }

    fn limit(&self) -> usize {
        self.cli.limit
    }

    fn output_path(&self) -> &Path {
        &self.cli.output
    }

    fn timeout(&self) -> u32 {
        self.cli.timeout
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
