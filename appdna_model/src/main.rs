use appdna_model::config::runtime::RuntimePreferences;
use appdna_model::model::ModelStore;
use appdna_model::{logging, pipeline};
use std::env;
use std::fs::File;
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    if args.len() >= 2 && args[1] == "--help" {
        print_help(&args[0]);
        return Ok(());
    }
    if args.len() < 3 {
        eprintln!("Usage: {} <model.json> <batch.txt> [options]", args[0]);
        eprintln!("       {} --help", args[0]);
        std::process::exit(1);
    }

    let model_path = Path::new(&args[1]);
    let batch_path = Path::new(&args[2]);
    let options = parse_options(&args[3..]);

    let prefs = load_preferences(options.prefs_path.as_deref())?;

    // Logging preferences must land before the global service is created
    logging::config::init_runtime_preferences(prefs.logging.clone())?;
    logging::init_global_logging()?;

    // Validate pipeline configuration
    pipeline::validate_pipeline()?;

    let mut store = ModelStore::load_from_reader(File::open(model_path)?)?;
    println!(
        "Loaded model {} ({} objects)",
        model_path.display(),
        store.object_count()
    );

    let input = std::fs::read_to_string(batch_path)?;
    let outcome = pipeline::validate_bulk_input(&input, &store, &prefs.validation)?;

    for result in &outcome.results {
        let marker = if result.is_valid { "ok " } else { "ERR" };
        println!("{} {}: {}", marker, result.line_descriptor, result.message);
    }

    if !outcome.all_valid() {
        println!();
        logging::print_cargo_style_summary();
        std::process::exit(1);
    }

    if options.validate_only {
        println!(
            "{} declarations valid; nothing committed (--validate-only)",
            outcome.valid_declarations.len()
        );
        return Ok(());
    }

    let count = pipeline::commit_bulk(&mut store, &outcome.valid_declarations)?;
    store.save_to_writer(File::create(model_path)?)?;
    println!(
        "Committed {} objects to {} ({} total)",
        count,
        model_path.display(),
        store.object_count()
    );

    Ok(())
}

struct CliOptions {
    validate_only: bool,
    prefs_path: Option<String>,
}

fn parse_options(args: &[String]) -> CliOptions {
    let mut options = CliOptions {
        validate_only: false,
        prefs_path: None,
    };

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--validate-only" => options.validate_only = true,
            "--prefs" => {
                if i + 1 < args.len() {
                    options.prefs_path = Some(args[i + 1].clone());
                    i += 1;
                } else {
                    eprintln!("Warning: --prefs requires a file path, ignoring");
                }
            }
            other => eprintln!("Warning: unknown option '{}', ignoring", other),
        }
        i += 1;
    }

    options
}

fn load_preferences(
    explicit_path: Option<&str>,
) -> Result<RuntimePreferences, Box<dyn std::error::Error>> {
    if let Some(path) = explicit_path {
        return Ok(RuntimePreferences::load_from_file(Path::new(path))?);
    }

    // Implicit appdna.toml next to the working directory, when present
    let implicit = Path::new("appdna.toml");
    if implicit.exists() {
        return Ok(RuntimePreferences::load_from_file(implicit)?);
    }

    Ok(RuntimePreferences::default())
}

fn print_help(program_name: &str) {
    println!("AppDNA Model Engine v{}", env!("CARGO_PKG_VERSION"));
    println!("Bulk object declaration validation and commit against an AppDNA model file");
    println!();
    println!("USAGE:");
    println!("    {} <model.json> <batch.txt> [options]", program_name);
    println!();
    println!("ARGUMENTS:");
    println!("    <model.json>   Path to the AppDNA model document");
    println!("    <batch.txt>    Text file with one object declaration per line");
    println!();
    println!("DECLARATION LINES:");
    println!("    <Name> is a child of <Parent>");
    println!("    <Name> is a lookup");
    println!();
    println!("OPTIONS:");
    println!("    --help             Show this help message");
    println!("    --validate-only    Validate the batch without committing");
    println!("    --prefs FILE       Load runtime preferences from FILE (default: ./appdna.toml)");
    println!();
    println!("OUTPUT:");
    println!("    One verdict per declaration line, then either a commit confirmation");
    println!("    or a summary of collected errors grouped by batch");
    println!();

    let info = pipeline::pipeline_info();
    println!("PIPELINE:");
    println!("    Engine: {} v{}", info.name, info.version);
    println!("    Registered error codes: {}", info.registered_error_codes);
}
