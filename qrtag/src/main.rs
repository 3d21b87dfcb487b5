// This file is part of the product QR Tracker.
// SPDX-FileCopyrightText: 2026 QR Tracker contributors
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use actix_web::rt::System;
use actix_web::{App, HttpServer, middleware::Logger, web};
use log::{Level, info};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use qrtag::app_state::AppState;
use qrtag::config::{Config, PORT_ENV_VAR, ValidatedConfig};
use qrtag::util::{self, TargetLevelRule};
use qrtag::{headers, public, tags};

const HELP_TEXT: &str = "\
Usage: qrtag [-C <root>] [-p <port>]

Options:
  -C <root>   Runtime directory containing an optional config.yaml (default: .)
  -p <port>   Listening port; overrides config.yaml and the PORT variable
  -h, --help  Show this help
";

fn main() {
    let exit_code = run();
    std::process::exit(exit_code);
}

fn run() -> i32 {
    let parsed_args = match parse_args() {
        Ok(args) => args,
        Err(error) => {
            eprintln!("❌ Invalid command line arguments: {}", error);
            eprintln!("❌ Use -h for usage.");
            return 1;
        }
    };

    if parsed_args.help {
        print!("{}", HELP_TEXT);
        return 0;
    }

    let env_port = std::env::var(PORT_ENV_VAR).ok();
    let port_override = parsed_args.port.as_deref().or(env_port.as_deref());
    let config = match Config::load_and_validate(&parsed_args.runtime_root, port_override) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("❌ {}", error);
            eprintln!("❌ Application cannot start with invalid configuration.");
            return 1;
        }
    };

    if let Err(error) = init_logging(&config) {
        eprintln!("❌ Failed to initialize logger: {}", error);
        return 1;
    }

    match System::new().block_on(run_server(config)) {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("❌ Server failed to start: {}", error);
            1
        }
    }
}

fn init_logging(config: &ValidatedConfig) -> Result<(), log::SetLoggerError> {
    let mut builder = env_logger::Builder::from_default_env();
    if std::env::var_os("RUST_LOG").is_none() {
        builder.filter_level(config.log_level_filter());
    }

    let logger = builder
        .target(env_logger::Target::Stdout)
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}: {}",
                chrono::Utc::now().format("%Y-%m-%d %H:%M:%S%.3f UTC"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .build();

    util::init_logger(
        vec![TargetLevelRule::new("actix_server", Level::Info, Level::Debug)],
        logger,
    )
}

async fn run_server(config: ValidatedConfig) -> std::io::Result<()> {
    let config = Arc::new(config);
    let app_state = Arc::new(AppState::in_memory(&config.app.name));

    info!("Starting {} - {}", config.app.name, config.app.description);
    info!("Workers: {}", config.server.workers);
    info!(
        "Listening on {}:{}",
        config.server.host, config.server.port
    );
    info!(
        "✅ Tag store initialized with {} record(s); records are kept in memory only",
        app_state.lifecycle.registered_count()
    );

    let workers = config.server.workers;
    let address = config.address_tuple();

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::from(config.clone()))
            .app_data(web::Data::from(app_state.clone()))
            .wrap(Logger::new(
                r#"%a "%r" %s %b "%{Referer}i" "%{User-Agent}i" %T"#,
            ))
            .wrap(headers::Headers)
            .configure(tags::configure)
            .configure(public::configure)
            .default_service(web::to(public::handlers::not_found))
    })
    .workers(workers)
    .bind(address)?
    .run()
    .await
}

#[derive(Debug)]
struct ParsedArgs {
    runtime_root: PathBuf,
    port: Option<String>,
    help: bool,
}

fn parse_args() -> Result<ParsedArgs, String> {
    parse_args_from(std::env::args().skip(1))
}

fn parse_args_from<I>(args: I) -> Result<ParsedArgs, String>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let mut parsed = ParsedArgs {
        runtime_root: PathBuf::from("."),
        port: None,
        help: false,
    };

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => parsed.help = true,
            "-C" => {
                let value = args
                    .next()
                    .ok_or_else(|| "Missing value for -C".to_string())?;
                parsed.runtime_root = PathBuf::from(value);
            }
            "-p" => {
                let value = args
                    .next()
                    .ok_or_else(|| "Missing value for -p".to_string())?;
                parsed.port = Some(value);
            }
            other => return Err(format!("Unexpected argument: {}", other)),
        }
    }

    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::parse_args_from;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn parse_args_defaults_to_current_directory() {
        let parsed = parse_args_from(Vec::new()).expect("parse args");
        assert_eq!(parsed.runtime_root, std::path::PathBuf::from("."));
        assert!(parsed.port.is_none());
        assert!(!parsed.help);
    }

    #[test]
    fn parse_args_accepts_root_and_port() {
        let parsed = parse_args_from(args(&["-C", "runtime", "-p", "8080"])).expect("parse args");
        assert!(parsed.runtime_root.ends_with("runtime"));
        assert_eq!(parsed.port.as_deref(), Some("8080"));
    }

    #[test]
    fn parse_args_accepts_help_flag() {
        let parsed = parse_args_from(args(&["--help"])).expect("parse args");
        assert!(parsed.help);
    }

    #[test]
    fn parse_args_rejects_missing_values() {
        match parse_args_from(args(&["-p"])) {
            Err(error) => assert!(error.contains("-p")),
            Ok(_) => panic!("expected missing value error"),
        }
    }

    #[test]
    fn parse_args_rejects_unknown_arguments() {
        assert!(parse_args_from(args(&["serve"])).is_err());
    }
}
