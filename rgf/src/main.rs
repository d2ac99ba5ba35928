use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use log::{error, info, warn};
use relief_rs::entities::Instance;
use relief_rs::io::export::{export_instance, export_load_plan, export_priority_order};
use relief_rs::io::import::Normalizer;
use rgf::config::RGFConfig;
use rgf::io;
use rgf::io::chart::load_plan_to_svg;
use rgf::io::cli::Cli;
use rgf::io::output::RGFOutput;
use rgf::io::report::render_report;
use rgf::opt::RGFAllocator;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            RGFConfig::default()
        }
        Some(config_file) => io::read_config(&config_file)?,
    };

    info!("Successfully parsed RGFConfig: {config:?}");

    let input_file_stem = args
        .input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .context("input file has no valid file name")?;

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).with_context(|| {
            format!(
                "could not create solution folder: {:?}",
                args.solution_folder
            )
        })?;
    }

    let instance = read_instance(&args.input_file, args.capacity, &config)?;
    info!(
        "[MAIN] instance with {} items ({:.1} kg, {:.1} utility in total) and a capacity of {:.1} kg",
        instance.items.len(),
        instance.total_item_weight(),
        instance.total_importance(),
        instance.capacity
    );

    main_rgf(instance, config, input_file_stem, args.solution_folder)
}

/// Reads and normalizes the input file, CSV files are read as tables, anything else as a JSON instance
fn read_instance(path: &Path, capacity: Option<f64>, config: &RGFConfig) -> Result<Instance> {
    let normalizer = Normalizer::new(config.invalid_item_policy);
    let is_csv = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

    let normalized = match is_csv {
        true => {
            let table = io::read_csv_table(path)?;
            info!("[MAIN] read {} rows from {}", table.rows.len(), path.display());
            let capacity = capacity.unwrap_or(config.default_capacity);
            normalizer.normalize_table_instance(&table, capacity)
        }
        false => {
            let ext_instance = io::read_json_instance(path)?;
            // operator override > capacity in the file > configured default
            let capacity = match (capacity, ext_instance.capacity) {
                (Some(capacity), _) => Some(capacity),
                (None, Some(_)) => None,
                (None, None) => Some(config.default_capacity),
            };
            normalizer.normalize_instance(&ext_instance, capacity)
        }
    };

    normalized
        .inspect_err(|err| error!("[MAIN] input rejected, no load plan computed: {err}"))
        .with_context(|| format!("invalid input file: {}", path.display()))
}

fn main_rgf(
    instance: Instance,
    config: RGFConfig,
    input_stem: &str,
    output_folder: PathBuf,
) -> Result<()> {
    let allocator = RGFAllocator::new(instance);
    let priority_order = allocator.priority_order();
    let plan = allocator.solve();

    {
        let output = RGFOutput {
            instance: export_instance(&allocator.instance),
            solution: export_load_plan(&plan),
            priority_order: export_priority_order(&priority_order),
            config,
        };

        let solution_path = output_folder.join(format!("sol_{input_stem}.json"));

        io::write_json(&output, Path::new(&solution_path))?;
    }

    {
        let svg_path = output_folder.join(format!("sol_{input_stem}.svg"));
        let svg = load_plan_to_svg(&plan, config.chart);

        io::write_svg(&svg, Path::new(&svg_path))?;
    }

    println!("{}", render_report(&plan, &priority_order));

    Ok(())
}
