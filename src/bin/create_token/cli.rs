// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the token-issuer project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

use clap::{Arg, ArgAction, ArgMatches, Command};
use std::path::PathBuf;
use token_issuer::config::{IssuerConfig, DEFAULT_SECRET_FILE};
use token_issuer::TokenCreationError;

/// Structure for handling command-line arguments
#[derive(Debug, Clone)]
pub struct CliArgs {
    pub subject: String,
    pub issuer: String,
    pub secret_file: PathBuf,
    pub verbose: bool,
    pub quiet: bool,
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse() -> Self {
        let matches = Self::build_cli().get_matches();
        Self::from_matches(&matches)
    }

    /// Rendered help text, printed along configuration errors
    pub fn usage() -> String {
        let mut command = Self::build_cli();
        command.render_help().to_string()
    }

    /// Validate the arguments into the issuer configuration
    pub fn into_config(self) -> Result<IssuerConfig, TokenCreationError> {
        IssuerConfig::new(self.subject, self.issuer, Some(self.secret_file))
    }

    /// Build the CLI interface
    fn build_cli() -> Command {
        Command::new("create_token")
            .version(env!("CARGO_PKG_VERSION"))
            .about("Create an HS256 signed JWT from a shared secret file")
            .arg(
                Arg::new("subject")
                    .short('s')
                    .long("subject")
                    .value_name("SUBJECT")
                    .help("subject - The user id you are generating this token for"),
            )
            .arg(
                Arg::new("issuer")
                    .short('i')
                    .long("issuer")
                    .value_name("ISSUER")
                    .help("issuer - The id of the cluster you are generating the token for"),
            )
            .arg(
                Arg::new("file")
                    .short('f')
                    .long("file")
                    .value_name("FILE")
                    .help("Name of file holding your JWT secret")
                    .value_parser(clap::value_parser!(PathBuf))
                    .default_value(DEFAULT_SECRET_FILE),
            )
            .arg(
                Arg::new("verbose")
                    .short('v')
                    .long("verbose")
                    .help("Enable verbose logging (debug level)")
                    .action(ArgAction::SetTrue),
            )
            .arg(
                Arg::new("quiet")
                    .short('q')
                    .long("quiet")
                    .help("Disable all logging output")
                    .action(ArgAction::SetTrue),
            )
    }

    /// Extract arguments from matches
    ///
    /// Subject and issuer are left empty when absent so that both an omitted
    /// flag and an explicit `""` go through the same validation.
    fn from_matches(matches: &ArgMatches) -> Self {
        Self {
            subject: matches
                .get_one::<String>("subject")
                .cloned()
                .unwrap_or_default(),
            issuer: matches
                .get_one::<String>("issuer")
                .cloned()
                .unwrap_or_default(),
            secret_file: matches
                .get_one::<PathBuf>("file")
                .cloned()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_SECRET_FILE)),
            verbose: matches.get_flag("verbose"),
            quiet: matches.get_flag("quiet"),
        }
    }
}
