//! Helper Phage MOI Calculator - Entry point
//!
//! Computes the helper phage stock volume to add for a target MOI.
//!
//! CLI Usage:
//!   cargo run                                # Compute the default setup
//!   cargo run -- --od600 0.35 --moi 20       # Override individual inputs
//!   cargo run -- --interactive               # Prompt loop for bench use
//!   cargo run -- --plain --export-csv        # Grouped-number report + CSV record

use std::io::{self, BufRead, Write};

use anyhow::Result;
use phage_moi_calc::{
    calculator::{MoiCalculator, RawRequest},
    config::{InputDefaults, Parameters},
    export::{export_calculation_json, CsvExporter},
    format::{minimal_report, styled_report},
};

/// Parsed command line options
struct CliArgs {
    interactive: bool,
    plain: bool,
    list_strains: bool,
    export_csv: bool,
    export_json: bool,
    strain: Option<String>,
    od600: Option<String>,
    volume_ml: Option<String>,
    moi: Option<String>,
    stock: Option<String>,
}

/// Parse CLI arguments
fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().collect();
    let mut parsed = CliArgs {
        interactive: false,
        plain: false,
        list_strains: false,
        export_csv: false,
        export_json: false,
        strain: None,
        od600: None,
        volume_ml: None,
        moi: None,
        stock: None,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--interactive" | "-i" => parsed.interactive = true,
            "--plain" | "-p" => parsed.plain = true,
            "--list-strains" => parsed.list_strains = true,
            "--export-csv" => parsed.export_csv = true,
            "--export-json" => parsed.export_json = true,
            "-s" | "--strain" => {
                i += 1;
                if i < args.len() {
                    parsed.strain = Some(args[i].clone());
                }
            }
            "-o" | "--od600" => {
                i += 1;
                if i < args.len() {
                    parsed.od600 = Some(args[i].clone());
                }
            }
            "-v" | "--volume-ml" => {
                i += 1;
                if i < args.len() {
                    parsed.volume_ml = Some(args[i].clone());
                }
            }
            "-m" | "--moi" => {
                i += 1;
                if i < args.len() {
                    parsed.moi = Some(args[i].clone());
                }
            }
            "-c" | "--stock" => {
                i += 1;
                if i < args.len() {
                    parsed.stock = Some(args[i].clone());
                }
            }
            "--help" | "-h" => {
                println!("Helper Phage MOI Calculator");
                println!();
                println!("Usage: phage-moi-calc [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -s, --strain NAME    Bacterial strain (default: XL1-Blue)");
                println!("  -o, --od600 X        Optical density reading (default: 0.2)");
                println!("  -v, --volume-ml X    Culture volume in mL (default: 1.0)");
                println!("  -m, --moi X          Target MOI (default: 10)");
                println!("  -c, --stock X        Stock titer in PFU/mL (default: 2e12)");
                println!("  -p, --plain          Grouped-number report instead of scientific");
                println!("  -i, --interactive    Prompt loop; empty input keeps the default");
                println!("      --export-csv     Append the dose to a CSV record under exports/");
                println!("      --export-json    Write a JSON snapshot under exports/");
                println!("      --list-strains   Print the calibration table");
                println!("  --help, -h           Show this help");
                std::process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }

    parsed
}

fn main() -> Result<()> {
    env_logger::init();

    let args = parse_args();

    log::info!("Helper phage calculator starting...");

    let params = Parameters::load_or_default();
    log::info!("Strain table loaded: {:?}", params.strains.names());

    let calculator = MoiCalculator::new(params.strains.clone());

    if args.list_strains {
        println!("Known strains (CFU/mL per OD600 unit):");
        for strain in &calculator.table().strains {
            println!("  {:<10} {:.2e}", strain.name, strain.cfu_per_ml_per_od600);
        }
        return Ok(());
    }

    if args.interactive {
        run_interactive(&calculator, &params.defaults, &args)
    } else {
        run_once(&calculator, &params.defaults, &args)
    }
}

/// Compute a single dose from CLI flags (defaults fill the gaps)
fn run_once(calculator: &MoiCalculator, defaults: &InputDefaults, args: &CliArgs) -> Result<()> {
    let raw = raw_request(defaults, args);

    let request = match raw.parse() {
        Ok(request) => request,
        Err(e) => anyhow::bail!("Invalid input: {e}"),
    };
    let result = match calculator.compute(&request) {
        Ok(result) => result,
        Err(e) => anyhow::bail!("Invalid input: {e}"),
    };

    if args.plain {
        println!("{}", minimal_report(&result));
    } else {
        println!("{}", styled_report(&request, &result));
    }

    if args.export_csv {
        let mut exporter = CsvExporter::new()?;
        exporter.record(&request, &result)?;
        let path = exporter.finish()?;
        println!("Saved CSV record: {}", path.display());
    }

    if args.export_json {
        let path = export_calculation_json(&request, &result)?;
        println!("Saved JSON snapshot: {}", path.display());
    }

    Ok(())
}

/// Prompt loop: recompute after each round of edits
///
/// Empty input keeps the bracketed default; `q` at any prompt exits.
/// Errors are reported and the loop continues with fresh input.
fn run_interactive(
    calculator: &MoiCalculator,
    defaults: &InputDefaults,
    args: &CliArgs,
) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let mut exporter = if args.export_csv {
        Some(CsvExporter::new()?)
    } else {
        None
    };

    println!("Helper Phage MOI Calculator (q to quit)");
    println!("Strains: {}", calculator.table().names().join(", "));

    loop {
        let Some(strain) = prompt(&mut lines, "Strain", &defaults.strain)? else {
            break;
        };
        let Some(od600) = prompt(&mut lines, "OD600", &defaults.od600.to_string())? else {
            break;
        };
        let Some(volume_ml) = prompt(&mut lines, "Culture volume (mL)", &defaults.volume_ml.to_string())?
        else {
            break;
        };
        let Some(moi) = prompt(&mut lines, "MOI", &defaults.moi.to_string())? else {
            break;
        };
        let Some(stock) = prompt(&mut lines, "Stock titer (PFU/mL)", &format!("{:e}", defaults.stock_pfu_per_ml))?
        else {
            break;
        };

        let raw = RawRequest {
            strain,
            od600,
            volume_ml,
            moi,
            stock_pfu_per_ml: stock,
        };

        match raw.parse().and_then(|request| {
            calculator.compute(&request).map(|result| (request, result))
        }) {
            Ok((request, result)) => {
                println!();
                if args.plain {
                    println!("{}", minimal_report(&result));
                } else {
                    println!("{}", styled_report(&request, &result));
                }
                println!();

                if let Some(exporter) = exporter.as_mut() {
                    exporter.record(&request, &result)?;
                }
                if args.export_json {
                    let path = export_calculation_json(&request, &result)?;
                    println!("Saved JSON snapshot: {}", path.display());
                }
            }
            Err(e) => {
                println!("Invalid input: {e}");
                println!();
            }
        }
    }

    if let Some(exporter) = exporter {
        let path = exporter.finish()?;
        println!("Saved CSV record: {}", path.display());
    }

    Ok(())
}

/// Read one field; returns `None` on `q` or end of input
fn prompt(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    label: &str,
    default: &str,
) -> Result<Option<String>> {
    print!("{label} [{default}]: ");
    io::stdout().flush()?;

    match lines.next() {
        Some(line) => {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.eq_ignore_ascii_case("q") {
                Ok(None)
            } else if trimmed.is_empty() {
                Ok(Some(default.to_string()))
            } else {
                Ok(Some(trimmed.to_string()))
            }
        }
        None => Ok(None),
    }
}

/// Merge CLI overrides over the configured defaults, keeping raw text
/// so bad numerics surface as the library's parse errors
fn raw_request(defaults: &InputDefaults, args: &CliArgs) -> RawRequest {
    RawRequest {
        strain: args
            .strain
            .clone()
            .unwrap_or_else(|| defaults.strain.clone()),
        od600: args
            .od600
            .clone()
            .unwrap_or_else(|| defaults.od600.to_string()),
        volume_ml: args
            .volume_ml
            .clone()
            .unwrap_or_else(|| defaults.volume_ml.to_string()),
        moi: args.moi.clone().unwrap_or_else(|| defaults.moi.to_string()),
        stock_pfu_per_ml: args
            .stock
            .clone()
            .unwrap_or_else(|| defaults.stock_pfu_per_ml.to_string()),
    }
}
