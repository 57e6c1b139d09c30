//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

mod config;

use clap::{App, Arg};
use config::{Config, LoggingFmtStyle};
use holo_prefix_sid::packet::prefix_sid::decode_attribute_with;
use tracing::debug_span;
use tracing_subscriber::Layer;
use tracing_subscriber::prelude::*;

fn init_tracing(config: &config::Logging) {
    // Diagnostics go to stderr so that stdout only carries the JSON output.
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_file(config.show_source)
        .with_line_number(config.show_source)
        .with_ansi(config.colors);
    let layer = match config.style {
        LoggingFmtStyle::Compact => layer.compact().boxed(),
        LoggingFmtStyle::Full => layer.boxed(),
        LoggingFmtStyle::Json => layer.json().boxed(),
        LoggingFmtStyle::Pretty => layer.pretty().boxed(),
    };

    let env_filter = tracing_subscriber::EnvFilter::builder()
        .parse_lossy(&config.filter);
    tracing_subscriber::registry()
        .with(env_filter)
        .with(layer)
        .init();
}

// Parses a hex string, ignoring whitespace and an optional "0x" prefix.
fn parse_hex(input: &str) -> Result<Vec<u8>, String> {
    let digits = input
        .split_whitespace()
        .map(|word| word.strip_prefix("0x").unwrap_or(word))
        .collect::<String>();
    if digits.len() % 2 != 0 {
        return Err(format!("odd number of hex digits: {}", digits.len()));
    }

    digits
        .as_bytes()
        .chunks(2)
        .map(|pair| {
            let pair = std::str::from_utf8(pair)
                .map_err(|_| "invalid hex digit".to_owned())?;
            u8::from_str_radix(pair, 16)
                .map_err(|_| format!("invalid hex byte: {pair}"))
        })
        .collect()
}

// ===== main =====

fn main() {
    // Parse command-line parameters.
    let matches = App::new("Decode BGP Prefix-SID attribute")
        .about("Decode a BGP Prefix-SID attribute value and print it as JSON")
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("file")
                .help("Configuration file with decoding limits and logging"),
        )
        .arg(
            Arg::with_name("file")
                .short("f")
                .long("file")
                .value_name("file")
                .conflicts_with("HEX")
                .help("Read the hex-encoded attribute value from a file"),
        )
        .arg(
            Arg::with_name("peer")
                .long("peer")
                .value_name("address")
                .help("Peer address attached to diagnostics"),
        )
        .arg(
            Arg::with_name("pretty")
                .long("pretty")
                .help("Pretty-print the JSON output"),
        )
        .arg(
            Arg::with_name("HEX")
                .help("Hex-encoded attribute value")
                .required_unless("file")
                .index(1),
        )
        .get_matches();

    // Read configuration file.
    let config = Config::load(matches.value_of("config"));
    if config.logging.enabled {
        init_tracing(&config.logging);
    }

    // Read attribute value.
    let input = match matches.value_of("file") {
        Some(filename) => std::fs::read_to_string(filename)
            .expect("Unable to read attribute file"),
        None => matches.value_of("HEX").unwrap_or_default().to_owned(),
    };
    let data = match parse_hex(&input) {
        Ok(data) => data,
        Err(error) => {
            eprintln!("Failed to parse attribute value: {error}");
            std::process::exit(1);
        }
    };

    // Decode attribute.
    let peer = matches.value_of("peer").unwrap_or("-");
    let span = debug_span!("peer", address = %peer);
    let node = match span
        .in_scope(|| decode_attribute_with(&data, data.len(), &config.decode))
    {
        Ok(node) => node,
        Err(error) => {
            eprintln!("Failed to decode attribute: {error}");
            std::process::exit(1);
        }
    };

    // Print decoded attribute.
    let output = if matches.is_present("pretty") {
        serde_json::to_string_pretty(&node)
    } else {
        serde_json::to_string(&node)
    };
    match output {
        Ok(output) => println!("{output}"),
        Err(error) => {
            eprintln!("Failed to serialize attribute: {error}");
            std::process::exit(1);
        }
    }
}
