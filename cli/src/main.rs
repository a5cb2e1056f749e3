//! cangerana - simulador de custos e fluxo de caixa para fazenda leiteira.
//!
//! Loads a scenario workbook, resolves the input fields from the chosen
//! sheet, applies command-line overrides, and prints the monthly DRE.

mod report;

use anyhow::{bail, Result};
use engine::config::EngineSettings;
use engine::export;
use engine::services::ScenarioService;
use shared::utils::brazilian_format;
use std::path::PathBuf;
use std::process;
use std::str::FromStr;

fn print_usage() {
    eprintln!("Usage: cangerana [OPTIONS] [WORKBOOK.xlsx]");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  [WORKBOOK.xlsx]           Scenario workbook (overrides config)");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -l, --list                List scenario sheets and exit");
    eprintln!("  -s, --scenario <NAME>     Scenario to compute (default: first sheet)");
    eprintln!("      --set <CAMPO=VALOR>   Override an input field (can be repeated)");
    eprintln!("      --export <FILE>       Write the report as ;-delimited text");
    eprintln!("      --audit               Show which fields were read and which used defaults");
    eprintln!("      --config <FILE>       Load engine settings from a JSON file");
    eprintln!("  -h, --help                Print help");
}

struct CliArgs {
    workbook: Option<PathBuf>,
    config: Option<PathBuf>,
    scenario: Option<String>,
    overrides: Vec<(String, f64)>,
    export_path: Option<PathBuf>,
    list: bool,
    audit: bool,
}

/// Accepts both "2.6" and Brazilian "2,60" / "1.234,56".
fn parse_value(raw: &str) -> Result<f64> {
    if let Ok(value) = f64::from_str(raw.trim()) {
        return Ok(value);
    }
    brazilian_format::parse_decimal(raw)
        .map_err(|_| anyhow::anyhow!("invalid numeric value: '{}'", raw))
}

fn parse_override(raw: &str) -> Result<(String, f64)> {
    let Some((key, value)) = raw.split_once('=') else {
        bail!("--set expects CAMPO=VALOR, got '{}'", raw);
    };
    Ok((key.trim().to_string(), parse_value(value)?))
}

fn parse_args(args: &[String]) -> Result<Option<CliArgs>> {
    let mut parsed = CliArgs {
        workbook: None,
        config: None,
        scenario: None,
        overrides: Vec::new(),
        export_path: None,
        list: false,
        audit: false,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_usage();
                return Ok(None);
            }
            "-l" | "--list" => parsed.list = true,
            "--audit" => parsed.audit = true,
            "-s" | "--scenario" => {
                i += 1;
                if i >= args.len() {
                    bail!("--scenario requires a value");
                }
                parsed.scenario = Some(args[i].clone());
            }
            "--set" => {
                i += 1;
                if i >= args.len() {
                    bail!("--set requires CAMPO=VALOR");
                }
                parsed.overrides.push(parse_override(&args[i])?);
            }
            "--export" => {
                i += 1;
                if i >= args.len() {
                    bail!("--export requires a file path");
                }
                parsed.export_path = Some(PathBuf::from(&args[i]));
            }
            "--config" => {
                i += 1;
                if i >= args.len() {
                    bail!("--config requires a file path");
                }
                parsed.config = Some(PathBuf::from(&args[i]));
            }
            other if other.starts_with('-') => {
                bail!("unknown option: {}", other);
            }
            other => {
                if parsed.workbook.is_some() {
                    bail!("only one workbook may be given");
                }
                parsed.workbook = Some(PathBuf::from(other));
            }
        }
        i += 1;
    }

    Ok(Some(parsed))
}

fn run(args: CliArgs) -> Result<()> {
    let mut settings = match &args.config {
        Some(path) => EngineSettings::from_file(path)?,
        None => EngineSettings::default(),
    };
    if let Some(workbook) = &args.workbook {
        settings.workbook_path = workbook.display().to_string();
    }

    tracing::info!(workbook = %settings.workbook_path, "Starting cangerana");

    let mut service = ScenarioService::open(&settings.workbook_path)?;
    let names = service.scenario_names();

    if args.list {
        for name in &names {
            println!("{}", name);
        }
        return Ok(());
    }

    if names.is_empty() {
        bail!("no scenario sheets in {}", settings.workbook_path);
    }

    let scenario = args
        .scenario
        .or_else(|| settings.default_scenario.clone())
        .unwrap_or_else(|| names[0].clone());

    let mut session = service.load_scenario(&scenario)?;

    for (key, value) in &args.overrides {
        if !session.set_input(key, *value) {
            bail!("unknown input field: {}", key);
        }
    }

    if args.audit {
        println!("Origem dos campos ({}):", session.scenario());
        for field in session.resolutions() {
            let origin = if field.resolution.is_defaulted() {
                "padrão"
            } else {
                "planilha"
            };
            println!(
                "  {:<24}{:>14}  [{}]",
                field.field,
                brazilian_format::format_decimal(field.resolution.value(), 4),
                origin
            );
        }
        println!();
    }

    let report = session.report();
    print!("{}", report::render(&report));

    if let Some(path) = &args.export_path {
        export::write_report(path, &report)?;
        println!("\nRelatório exportado para {}", path.display());
    }

    Ok(())
}

fn main() {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().collect();
    match parse_args(&args) {
        Ok(Some(parsed)) => {
            if let Err(e) = run(parsed) {
                eprintln!("Error: {:#}", e);
                process::exit(1);
            }
        }
        Ok(None) => {}
        Err(e) => {
            eprintln!("Error: {:#}", e);
            print_usage();
            process::exit(2);
        }
    }
}
