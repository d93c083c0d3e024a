pub mod cli;
pub mod errors;
pub mod report;
pub mod roster;
pub mod run;
pub mod service_configuration;
pub mod validator;
