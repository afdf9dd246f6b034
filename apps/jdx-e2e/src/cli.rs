use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use uuid::Uuid;

use crate::pipeline::RunOptions;

#[derive(Parser, Debug)]
#[command(name = "jdx-e2e")]
#[command(about = "End to end test for JDX API.", long_about = None)]
pub struct Cli {
    /// Select the server you want to use (only production is enabled currently)
    #[arg(long, value_enum, default_value_t = Server::Production)]
    pub server: Server,

    /// Path to a directory or a single file that contains job description(s)
    #[arg(short, long, default_value = "./files")]
    pub directory_or_file: PathBuf,

    /// UUID of a single framework to select instead of the top recommendation
    #[arg(short, long)]
    pub framework: Option<Uuid>,

    /// Loop through all files in the directory forever
    #[arg(short = 'l', long = "loop")]
    pub loop_forever: bool,

    /// Also request a tagged preview right after the upload
    #[arg(long)]
    pub with_preview: bool,

    /// Also request the metadata score after the upload and after user actions
    #[arg(long)]
    pub with_score: bool,
}

impl Cli {
    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            framework_override: self.framework,
            with_preview: self.with_preview,
            with_score: self.with_score,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Server {
    #[default]
    Production,
}

impl Server {
    pub fn url(&self) -> &'static str {
        match self {
            Server::Production => "https://jdx-api.brighthive.net",
        }
    }
}

impl std::fmt::Display for Server {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Server::Production => write!(f, "production"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["jdx-e2e"]).unwrap();
        assert_eq!(cli.server, Server::Production);
        assert_eq!(cli.directory_or_file, PathBuf::from("./files"));
        assert!(cli.framework.is_none());
        assert!(!cli.loop_forever);
        assert!(!cli.with_preview && !cli.with_score);
    }

    #[test]
    fn test_short_flags() {
        let cli = Cli::try_parse_from([
            "jdx-e2e",
            "-d",
            "jobs/dev.docx",
            "-f",
            "5b3c0f4e-7a0d-4f3e-9d55-2a8d8d1c9f11",
            "-l",
        ])
        .unwrap();
        assert_eq!(cli.directory_or_file, PathBuf::from("jobs/dev.docx"));
        assert_eq!(
            cli.framework.unwrap().to_string(),
            "5b3c0f4e-7a0d-4f3e-9d55-2a8d8d1c9f11"
        );
        assert!(cli.loop_forever);
    }

    #[test]
    fn test_only_production_server_is_accepted() {
        assert!(Cli::try_parse_from(["jdx-e2e", "--server", "production"]).is_ok());
        assert!(Cli::try_parse_from(["jdx-e2e", "--server", "staging"]).is_err());
    }

    #[test]
    fn test_framework_must_be_uuid() {
        assert!(Cli::try_parse_from(["jdx-e2e", "--framework", "not-a-uuid"]).is_err());
    }

    #[test]
    fn test_run_options_carry_flags() {
        let cli = Cli::try_parse_from(["jdx-e2e", "--with-preview", "--with-score"]).unwrap();
        let opts = cli.run_options();
        assert!(opts.with_preview && opts.with_score);
        assert!(opts.framework_override.is_none());
    }

    #[test]
    fn test_production_url() {
        assert_eq!(Server::Production.url(), "https://jdx-api.brighthive.net");
    }
}
