//! # Cutlist CLI
//!
//! Command-line front end for `cutlist_core`: compute the cutting list of a
//! single unit, keep shop settings files, and manage job files holding many
//! units.
//!
//! Errors are printed to stderr with their error code, and the process exits
//! non-zero. Set `RUST_LOG` (or pass `--verbose`) for progress logging.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::info;
use uuid::Uuid;

use cutlist_core::file_io::{load_prices, load_project, load_settings, save_project, save_settings};
use cutlist_core::pricing::{estimate, estimate_usage};
use cutlist_core::registry::compute_request;
use cutlist_core::{CalcError, CalculationResult, CuttingSettings, DoorType, EdgeDistribution, Project, UnitRequest, UnitType};

#[derive(Parser)]
#[command(name = "cutlist", version, about = "Cutting lists for kitchen cabinet units")]
struct Cli {
    /// Log progress to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the cutting list of one unit
    Compute(ComputeArgs),

    /// List supported unit types
    Types,

    /// Create or inspect shop settings files
    #[command(subcommand)]
    Settings(SettingsCommand),

    /// Manage job files
    #[command(subcommand)]
    Project(ProjectCommand),

    /// Price the material totals of a job file without changing it
    Estimate {
        file: PathBuf,

        #[arg(long)]
        prices: PathBuf,
    },
}

#[derive(Args)]
struct ComputeArgs {
    #[command(flatten)]
    request: RequestArgs,

    /// Shop settings file (defaults when omitted)
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Price table; adds a cost estimate
    #[arg(long)]
    prices: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

/// Unit request flags. Lengths in centimeters.
#[derive(Args)]
struct RequestArgs {
    /// Unit type tag (see `cutlist types`)
    #[arg(value_name = "TYPE")]
    unit_type: String,

    #[arg(long)]
    width: f64,

    #[arg(long)]
    height: f64,

    #[arg(long)]
    depth: f64,

    /// Secondary width of corner units
    #[arg(long)]
    width_2: Option<f64>,

    /// Secondary depth of corner units
    #[arg(long)]
    depth_2: Option<f64>,

    #[arg(long)]
    shelves: Option<i64>,

    #[arg(long)]
    doors: Option<i64>,

    #[arg(long, value_enum)]
    door_type: Option<DoorArg>,

    #[arg(long)]
    flip_door_height: Option<f64>,

    #[arg(long)]
    bottom_door_height: Option<f64>,

    #[arg(long)]
    oven_height: Option<f64>,

    #[arg(long)]
    microwave_height: Option<f64>,

    #[arg(long)]
    vent_height: Option<f64>,

    #[arg(long)]
    drawers: Option<i64>,

    #[arg(long)]
    drawer_height: Option<f64>,

    /// Width of the fixed (non-opening) part
    #[arg(long)]
    fixed_part: Option<f64>,
}

#[derive(Clone, Copy, ValueEnum)]
enum DoorArg {
    Hinged,
    Flip,
}

impl From<DoorArg> for DoorType {
    fn from(arg: DoorArg) -> Self {
        match arg {
            DoorArg::Hinged => DoorType::Hinged,
            DoorArg::Flip => DoorType::Flip,
        }
    }
}

impl RequestArgs {
    fn to_request(&self) -> UnitRequest {
        let defaults = UnitRequest::new(self.unit_type.as_str(), self.width, self.height, self.depth);
        UnitRequest {
            width_2_cm: self.width_2.unwrap_or(defaults.width_2_cm),
            depth_2_cm: self.depth_2.unwrap_or(defaults.depth_2_cm),
            shelf_count: self.shelves.unwrap_or(defaults.shelf_count),
            door_count: self.doors.unwrap_or(defaults.door_count),
            door_type: self.door_type.map_or(defaults.door_type, DoorType::from),
            flip_door_height_cm: self.flip_door_height.unwrap_or(defaults.flip_door_height_cm),
            bottom_door_height_cm: self.bottom_door_height.unwrap_or(defaults.bottom_door_height_cm),
            oven_height_cm: self.oven_height.unwrap_or(defaults.oven_height_cm),
            microwave_height_cm: self.microwave_height.unwrap_or(defaults.microwave_height_cm),
            vent_height_cm: self.vent_height.unwrap_or(defaults.vent_height_cm),
            drawer_count: self.drawers.unwrap_or(defaults.drawer_count),
            drawer_height_cm: self.drawer_height.unwrap_or(defaults.drawer_height_cm),
            fixed_part_cm: self.fixed_part.unwrap_or(defaults.fixed_part_cm),
            ..defaults
        }
    }
}

#[derive(Subcommand)]
enum SettingsCommand {
    /// Write a settings file with every default filled in
    Init {
        file: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print settings as JSON (defaults when no file is given)
    Show { file: Option<PathBuf> },
}

#[derive(Subcommand)]
enum ProjectCommand {
    /// Create an empty job file
    New {
        file: PathBuf,

        #[arg(long, default_value = "")]
        customer: String,

        #[arg(long, default_value = "")]
        job: String,

        /// Settings file to embed in the job
        #[arg(long)]
        settings: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Add a unit to a job and calculate it
    Add {
        file: PathBuf,

        /// Shop label for the unit
        #[arg(long)]
        label: String,

        #[command(flatten)]
        request: RequestArgs,
    },

    /// Remove a unit by id (or unique id prefix)
    Remove { file: PathBuf, id: String },

    /// Recalculate every unit, optionally pricing them
    Calc {
        file: PathBuf,

        #[arg(long)]
        prices: Option<PathBuf>,
    },

    /// Print the units of a job with their totals
    Show {
        file: PathBuf,

        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let code = err
                .chain()
                .find_map(|e| e.downcast_ref::<CalcError>())
                .map_or("ERROR", CalcError::error_code);
            eprintln!("error[{code}]: {err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Structured logging to stderr; `RUST_LOG` overrides the level.
fn init_logging(verbose: bool) {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::INFO };
    let env_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true);

    tracing_subscriber::registry().with(env_filter).with(fmt_layer).init();
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Compute(args) => run_compute(args),
        Commands::Types => {
            list_types();
            Ok(())
        }
        Commands::Settings(cmd) => run_settings(cmd),
        Commands::Project(cmd) => run_project(cmd),
        Commands::Estimate { file, prices } => run_estimate(&file, &prices),
    }
}

// ============================================================================
// compute / types
// ============================================================================

fn run_compute(args: ComputeArgs) -> Result<()> {
    let settings = settings_or_default(args.settings.as_deref())?;
    let mut result = compute_request(&args.request.to_request(), &settings)?;

    let currency = match &args.prices {
        Some(path) => {
            let table = load_prices(path).with_context(|| format!("loading prices from {}", path.display()))?;
            let priced = estimate(&result, &table)?;
            priced.apply_to(&mut result);
            Some(priced.currency)
        }
        None => None,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_result(&result, currency.as_deref());
    }
    Ok(())
}

fn list_types() {
    println!("{:<52} {:<8} NAME", "TYPE", "FAMILY");
    for unit_type in UnitType::ALL {
        println!(
            "{:<52} {:<8} {}",
            unit_type.tag(),
            format!("{:?}", unit_type.family()).to_lowercase(),
            unit_type.display_name()
        );
    }
}

fn settings_or_default(path: Option<&Path>) -> Result<CuttingSettings> {
    match path {
        Some(path) => load_settings(path).with_context(|| format!("loading settings from {}", path.display())),
        None => Ok(CuttingSettings::default()),
    }
}

// ============================================================================
// settings
// ============================================================================

fn run_settings(cmd: SettingsCommand) -> Result<()> {
    match cmd {
        SettingsCommand::Init { file, force } => {
            refuse_overwrite(&file, force)?;
            save_settings(&CuttingSettings::default(), &file)?;
            println!("Wrote default settings to {}", file.display());
        }
        SettingsCommand::Show { file } => {
            let settings = settings_or_default(file.as_deref())?;
            println!("{}", serde_json::to_string_pretty(&settings)?);
        }
    }
    Ok(())
}

fn refuse_overwrite(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }
    Ok(())
}

// ============================================================================
// project
// ============================================================================

fn run_project(cmd: ProjectCommand) -> Result<()> {
    match cmd {
        ProjectCommand::New {
            file,
            customer,
            job,
            settings,
            force,
        } => {
            refuse_overwrite(&file, force)?;
            let mut project = Project::new(customer, job);
            project.settings = settings_or_default(settings.as_deref())?;
            save_project(&project, &file)?;
            println!("Created {}", file.display());
        }

        ProjectCommand::Add { file, label, request } => {
            let mut project = open_project(&file)?;
            let request = request.to_request();
            // Reject bad input before it lands in the job file
            let result = compute_request(&request, &project.settings)?;

            let id = project.add_unit(label, request);
            if let Some(unit) = project.get_unit_mut(&id) {
                unit.result = Some(result);
            }
            save_project(&project, &file)?;
            println!("Added unit {}", short_id(&id));
        }

        ProjectCommand::Remove { file, id } => {
            let mut project = open_project(&file)?;
            let id = find_unit(&project, &id)?;
            if let Some(unit) = project.remove_unit(&id) {
                println!("Removed '{}'", unit.label);
            }
            save_project(&project, &file)?;
        }

        ProjectCommand::Calc { file, prices } => {
            let mut project = open_project(&file)?;
            let failures = project.recalculate_all();

            if let Some(path) = prices {
                let table = load_prices(&path).with_context(|| format!("loading prices from {}", path.display()))?;
                for (id, err) in project.price_all(&table) {
                    eprintln!("warning: unit {} not priced: {err}", short_id(&id));
                }
            }

            for (id, err) in &failures {
                eprintln!("warning: unit {} failed: {err}", short_id(id));
            }
            save_project(&project, &file)?;
            info!(units = project.unit_count(), failed = failures.len(), "job recalculated");
            println!(
                "Recalculated {} unit(s), {} failed",
                project.unit_count(),
                failures.len()
            );
        }

        ProjectCommand::Show { file, json } => {
            let project = open_project(&file)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&project)?);
            } else {
                print_project(&project);
            }
        }
    }
    Ok(())
}

fn run_estimate(file: &Path, prices: &Path) -> Result<()> {
    let mut project = open_project(file)?;
    let table = load_prices(prices).with_context(|| format!("loading prices from {}", prices.display()))?;

    let failures = project.recalculate_all();
    for (id, err) in &failures {
        eprintln!("warning: unit {} left out: {err}", short_id(id));
    }

    let totals = project.totals();
    let priced = estimate_usage(&totals.material_usage, &table)?;

    println!("Job {}  ({})", project.meta.job_id, project.meta.customer);
    for (material, quantity) in &totals.material_usage {
        let cost = priced.cost_breakdown.get(material).copied();
        match cost {
            Some(cost) => println!("{material:<12} {quantity:>10.4} {cost:>12.2} {}", priced.currency),
            None => println!("{material:<12} {quantity:>10.4} {:>12}", "-"),
        }
    }
    println!("Total:       {:>23.2} {}", priced.total_cost, priced.currency);
    Ok(())
}

fn open_project(path: &Path) -> Result<Project> {
    load_project(path).with_context(|| format!("opening job file {}", path.display()))
}

fn short_id(id: &Uuid) -> String {
    id.simple().to_string()[..8].to_string()
}

/// Resolve a full id or a unique prefix of one
fn find_unit(project: &Project, prefix: &str) -> Result<Uuid> {
    let prefix = prefix.replace('-', "").to_lowercase();
    let matches: Vec<Uuid> = project
        .units
        .keys()
        .filter(|id| id.simple().to_string().starts_with(&prefix))
        .copied()
        .collect();

    match matches.as_slice() {
        [id] => Ok(*id),
        [] => bail!("no unit with id '{prefix}'"),
        _ => bail!("id prefix '{prefix}' matches {} units", matches.len()),
    }
}

// ============================================================================
// Output
// ============================================================================

fn edges_label(edges: EdgeDistribution) -> String {
    let label: String = [(edges.top, 'T'), (edges.left, 'L'), (edges.right, 'R'), (edges.bottom, 'B')]
        .iter()
        .filter(|(banded, _)| *banded)
        .map(|(_, c)| *c)
        .collect();
    if label.is_empty() {
        "-".to_string()
    } else {
        label
    }
}

fn print_result(result: &CalculationResult, currency: Option<&str>) {
    println!(
        "{}  {} x {} x {} cm",
        result.unit_type, result.width_cm, result.height_cm, result.depth_cm
    );
    println!(
        "{:<24} {:>9} {:>9} {:>4}  {:<5} {:>9} {:>9}",
        "PART", "W (cm)", "H (cm)", "QTY", "EDGES", "AREA m2", "BAND m"
    );
    for part in &result.parts {
        println!(
            "{:<24} {:>9.2} {:>9.2} {:>4}  {:<5} {:>9.4} {:>9.4}",
            part.name,
            part.width_cm,
            part.height_cm,
            part.qty,
            edges_label(part.edge_distribution),
            part.area_m2,
            part.edge_band_m
        );
    }
    println!();
    println!("Pieces:          {}", result.piece_count());
    println!("Total area:      {:.4} m2", result.total_area_m2);
    println!("Total edge band: {:.2} m", result.total_edge_band_m);
    if let Some(total) = result.total_cost {
        println!("Estimated cost:  {:.2} {}", total, currency.unwrap_or_default());
    }
}

fn print_project(project: &Project) {
    println!("Job {}  ({})", project.meta.job_id, project.meta.customer);
    println!(
        "{:<8}  {:<16} {:<40} {:>9} {:>9} {:>10}",
        "ID", "LABEL", "TYPE", "AREA m2", "BAND m", "COST"
    );
    for (id, unit) in project.units_in_order() {
        let (area, band) = unit
            .result
            .as_ref()
            .map_or((String::from("-"), String::from("-")), |r| {
                (format!("{:.4}", r.total_area_m2), format!("{:.2}", r.total_edge_band_m))
            });
        let cost = unit.price_estimate.map_or_else(|| "-".to_string(), |c| format!("{c:.2}"));
        println!(
            "{:<8}  {:<16} {:<40} {:>9} {:>9} {:>10}",
            short_id(id),
            unit.label,
            unit.request.unit_type,
            area,
            band,
            cost
        );
    }

    let totals = project.totals();
    println!();
    println!("Total area:      {:.4} m2", totals.total_area_m2);
    println!("Total edge band: {:.2} m", totals.total_edge_band_m);
}
