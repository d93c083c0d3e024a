use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
pub struct Cli {
    #[arg(long, default_value = "example.csv")]
    pub input: PathBuf,
    #[arg(long, default_value_t = 0)]
    pub column: usize,
    #[arg(long, default_value = "output.csv")]
    pub output: PathBuf,
    #[arg(long, default_value_t = 3)]
    pub limit: usize,
    #[arg(long, default_value_t = 7, value_parser = clap::value_parser!(u32).range(1..))]
    pub timeout: u32,
    #[arg(long)]
    pub fast: bool,
    #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(..=2))]
    pub abuse_strictness: u8,
}
