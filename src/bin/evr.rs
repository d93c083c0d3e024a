use clap::Parser;
use email_vetter::cli::Cli;
use email_vetter::run::run;
use email_vetter::service_configuration::ServiceConfiguration;
use std::process::exit;

fn main() {
    let cli = Cli::parse();

    let config_file_location = match confy::get_configuration_file_path("email_vetter", None) {
        Ok(location) => location,
        Err(e) => {
            eprintln!("{e}");
            exit(1);
        }
    };

    match ServiceConfiguration::new(&cli, std::env::vars(), &config_file_location) {
        Ok(config) => match run(&config) {
            Ok(output) => {
                println!("{output}");
                exit(0)
            }
            Err(e) => {
                eprintln!("{e}");
                exit(2);
            }
        },
        Err(e) => {
            eprintln!("{e}");
            exit(1);
        }
    }
}
