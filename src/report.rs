use crate::errors::AppError;
use csv::Writer;
use serde_json::Value;
use std::fs::File;
use std::path::Path;

pub const HEADERS: [&str; 18] = [
    "message",
    "success",
    "disposable",
    "smtp_score",
    "overall_score",
    "generic",
    "dns_valid",
    "honeypot",
    "deliverability",
    "frequent_complainer",
    "spam_trap_score",
    "catch_all",
    "timed_out",
    "suspect",
    "recent_abuse",
    "fraud_score",
    "sanitized_email",
    "original_email",
];

#[derive(Debug, PartialEq)]
pub struct ValidationRow {
    fields: Vec<String>,
}


impl ValidationRow {
    pub fn from_response(body: &str, original_email: &str) -> Result<Self, AppError> {
        let data: Value = serde_json::from_str(body)?;

        let mut fields: Vec<String> = HEADERS[..HEADERS.len() - 1]
            .iter()
            .map(|key| cell(&data, key))
            .collect();

        fields.push(original_email.into());

        Ok(Self { fields })
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }
}

fn cell(data: &Value, key: &str) -> String {
    match data.get(key) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(value)) => value.clone(),
        Some(value) => value.to_string(),
    }
}

pub struct Report {
    writer: Writer<File>,
}


impl Report {
    pub fn create(path: &Path) -> Result<Self, AppError> {
        let mut writer = Writer::from_path(path)?;

        writer.write_record(HEADERS)?;
        writer.flush()?;

        Ok(Self { writer })
    }

    pub fn append(&mut self, row: &ValidationRow) -> Result<(), AppError> {
        self.writer.write_record(row.fields())?;
        self.writer.flush()?;

        Ok(())
    }
}
