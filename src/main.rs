mod debug_report;

use geosift::{scan, selfcheck, to_geo_features, to_lat_lng, to_lng_lat};
use std::io::{self, IsTerminal, Read};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    if config.self_check {
        let report = selfcheck::run();
        debug_report::print_self_check(&report, config.color);
        if !report.all_passed() {
            std::process::exit(1);
        }
        return;
    }

    let Some(input) = config.input else {
        eprintln!("error: no input provided");
        std::process::exit(2);
    };
    match config.output {
        OutputMode::Report => {
            let result = scan(&input);
            debug_report::print_scan(&input, &result, config.color);
        }
        OutputMode::GeoJson => {
            let fc = to_geo_features(&input);
            match serde_json::to_string_pretty(&fc) {
                Ok(json) => println!("{json}"),
                Err(err) => {
                    eprintln!("error: failed to serialize feature collection: {err}");
                    std::process::exit(1);
                }
            }
        }
        OutputMode::LngLat => print_pairs(&to_lng_lat(&input)),
        OutputMode::LatLng => print_pairs(&to_lat_lng(&input)),
    }
}

fn print_pairs(pairs: &[(f64, f64)]) {
    for (a, b) in pairs {
        println!("{a}, {b}");
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum OutputMode {
    #[default]
    Report,
    GeoJson,
    LngLat,
    LatLng,
}

struct CliConfig {
    input: Option<String>,
    output: OutputMode,
    self_check: bool,
    color: bool,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut input: Option<String> = None;
    let mut output = OutputMode::default();
    let mut self_check = false;
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1).peekable();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("geosift {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "--self-check" => self_check = true,
            "--geojson" => output = OutputMode::GeoJson,
            "--lng-lat" => output = OutputMode::LngLat,
            "--lat-lng" => output = OutputMode::LatLng,
            "--input" | "-i" => {
                let value = args.next().ok_or_else(|| "error: --input expects a value".to_string())?;
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(value);
            }
            "--" => {
                let rest = args.collect::<Vec<_>>().join(" ");
                if !rest.trim().is_empty() {
                    if input.is_some() {
                        return Err("error: input provided multiple times".to_string());
                    }
                    input = Some(rest);
                }
                break;
            }
            _ if arg.starts_with("--input=") => {
                let value = arg.trim_start_matches("--input=");
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(value.to_string());
            }
            _ if arg.starts_with('-') => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                let rest = std::iter::once(arg).chain(args).collect::<Vec<_>>().join(" ");
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(rest);
                break;
            }
        }
    }

    let input = if self_check {
        input
    } else {
        Some(match input {
            Some(value) => value,
            None => read_stdin_input()?,
        })
    };

    if let Some(text) = &input {
        if !self_check && text.trim().is_empty() {
            return Err(format!("error: no input provided\n\n{}", help_text()));
        }
    }

    Ok(CliConfig { input, output, self_check, color })
}

fn read_stdin_input() -> Result<String, String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;
    Ok(buffer)
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "geosift {version}

Coordinate extraction CLI: scans text for plausible geographic points.

Usage:
  geosift [OPTIONS] [--] <text...>
  geosift [OPTIONS] --input <text>
  geosift --self-check

Options:
  -i, --input <text>   Text to scan. If omitted, reads remaining args
                       or stdin when no args are provided.
  --geojson            Print a GeoJSON feature collection instead of a report.
  --lng-lat            Print (longitude, latitude) pairs, one per line.
  --lat-lng            Print (latitude, longitude) pairs, one per line.
  --self-check         Run the built-in regression battery and exit.
  --color              Force ANSI color output.
  --no-color           Disable ANSI color output.
  -h, --help           Show this help message.
  -V, --version        Print version information.

Exit codes:
  0  Success.
  1  Internal error or failing self-check cases.
  2  Invalid arguments or missing input.
",
        version = env!("CARGO_PKG_VERSION"),
    )
}
