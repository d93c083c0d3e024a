use crate::errors::AppError;
use reqwest::blocking::Client;
use url::Url;

pub struct Validator {
    api_key: String,
    base_url: Url,
}

#[derive(Debug, PartialEq)]
pub struct ValidateOptions {
    pub abuse_strictness: u8,
    pub fast: bool,
    pub timeout: u32,
}

impl Default for ValidateOptions {
    fn default() -> Self {
        Self {
            abuse_strictness: 0,
            fast: false,
            timeout: 7,
        }
    }
}


impl Validator {
    pub fn new(api_key: &str, api_host: &str) -> Result<Self, AppError> {
        Ok(Self {
            api_key: api_key.into(),
            base_url: Url::parse(api_host)?.join("api/json/")?,
        })
    }

    pub fn validate(&self, email: &str, options: &ValidateOptions) -> Result<String, AppError> {
        let request_url = self.request_url(email, options)?;

        let response = Client::new().get(request_url).send()?;

        Ok(response.text()?)
    }

    fn request_url(&self, email: &str, options: &ValidateOptions) -> Result<Url, AppError> {
        let mut request_url = self.base_url.clone();

        request_url
            .path_segments_mut()
            .map_err(|()| AppError::ApiHostUnusable)?
            .pop_if_empty()
            .extend(["email", self.api_key.as_str(), email]);

        request_url
            .query_pairs_mut()
            .append_pair("timeout", &options.timeout.to_string())
            .append_pair("fast", if options.fast { "true" } else { "false" })
            .append_pair("abuse_strictness", &options.abuse_strictness.to_string());

        Ok(request_url)
    }
}
