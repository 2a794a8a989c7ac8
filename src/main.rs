use std::process::ExitCode;

use tracing::info;

use printwaste::{default_catalog, load_catalog, Settings, WasteEngine, WasteRequest};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let settings = Settings::load();
    let catalog = match settings.catalog_path.as_deref() {
        Some(path) => match load_catalog(path) {
            Ok(catalog) => catalog,
            Err(e) => {
                eprintln!("Failed to load catalog from {:?}: {:#}", path, e);
                return ExitCode::FAILURE;
            }
        },
        None => default_catalog(),
    };
    info!("{} ready ({} records)", settings.app_name, catalog.len());

    let engine = WasteEngine::new(catalog);
    let args: Vec<String> = std::env::args().skip(1).collect();

    match args.as_slice() {
        [cmd] if cmd == "print-types" => {
            let types = engine.print_types();
            println!(
                "{}",
                serde_json::to_string_pretty(&types).expect("print types serialize to JSON")
            );
            ExitCode::SUCCESS
        }
        [cmd, print_type, print_run] if cmd == "resolve" => {
            let print_run: u32 = match print_run.parse() {
                Ok(n) => n,
                Err(_) => {
                    eprintln!("print_run must be a positive integer, got {:?}", print_run);
                    return ExitCode::FAILURE;
                }
            };

            let request = WasteRequest {
                print_type: print_type.clone(),
                print_run,
            };

            match engine.resolve(&request) {
                Ok(estimate) => {
                    println!(
                        "{}",
                        serde_json::to_string_pretty(&estimate)
                            .expect("estimate serializes to JSON")
                    );
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("{}", e);
                    ExitCode::FAILURE
                }
            }
        }
        _ => {
            eprintln!("Usage:");
            eprintln!("  printwaste print-types");
            eprintln!("  printwaste resolve <print_type> <print_run>");
            ExitCode::FAILURE
        }
    }
}
