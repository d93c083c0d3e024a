use crate::errors::AppError;
use crate::report::{Report, ValidationRow};
use crate::roster;
use crate::service_configuration::Configuration;
use crate::validator::{ValidateOptions, Validator};


pub fn run<T: Configuration>(config: &T) -> Result<String, AppError> {
    let email_list = roster::read_column(config.input_path(), config.column_index())?;

    let validator = Validator::new(config.api_key(), config.api_host())?;

    let options = ValidateOptions {
        abuse_strictness: config.abuse_strictness(),
        fast: config.fast(),
        timeout: config.timeout(),
    };

    let mut report = Report::create(config.output_path())?;

    for email in email_list.iter().take(config.limit()) {
        if email.is_empty() {
            continue;
        }

        let response_body = validator.validate(email, &options)?;
        let row = ValidationRow::from_response(&response_body, email)?;

        report.append(&row)?;
    }

    Ok(format!(
        "Data saved to {}.",
        config.output_path().display()
    ))
}
