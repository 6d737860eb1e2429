// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the token-issuer project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

mod cli;

use cli::CliArgs;
use log::info;
use std::process;
use token_issuer::utility::issue_token;
use token_issuer::TokenCreationError;

fn main() {
    let args = CliArgs::parse();
    init_logger(&args);

    if let Err(e) = run(args) {
        if e.shows_usage() {
            eprintln!("{}", CliArgs::usage());
        }
        eprintln!("Error: {}", e);
        process::exit(e.exit_code());
    }
}

fn init_logger(args: &CliArgs) {
    let log_level = if args.quiet {
        log::LevelFilter::Off
    } else if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .init();
}

fn run(args: CliArgs) -> Result<(), TokenCreationError> {
    let config = args.into_config()?;
    let result = issue_token(&config)?;

    info!(
        "Issued token {} for subject '{}' by issuer '{}'",
        result.claims.jti,
        config.subject(),
        config.issuer()
    );
    println!("tokenString = {}", result.token);

    Ok(())
}
