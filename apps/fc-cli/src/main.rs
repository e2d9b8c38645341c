use clap::{Args, Parser, Subcommand, ValueEnum};
use fc_app::{
    AppError, AppResult, ReportFormat, ReportOptions, RunMode, ScenarioOutcome,
    ensure_all_succeeded, evaluate_scenario, run_service, scenario_service,
};
use fc_project::reference::base_column;
use fc_project::schema::{ColumnDef, ScenarioDef};
use fc_project::reference_scenarios;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "fc-cli")]
#[command(about = "Distillation column flooding calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate the reference columns (base, scaled, optimal)
    Demo {
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Evaluate the scenarios of a scenario file
    Run {
        /// Path to the scenario file (YAML, or JSON with a .json extension)
        scenario_path: PathBuf,
        /// Only evaluate this scenario
        #[arg(short, long)]
        scenario: Option<String>,
        /// Evaluate scenarios across all cores
        #[arg(long)]
        parallel: bool,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Validate scenario file structure and column inputs
    Validate {
        /// Path to the scenario file
        scenario_path: PathBuf,
    },
    /// List scenarios in a scenario file
    List {
        /// Path to the scenario file
        scenario_path: PathBuf,
    },
    /// Write the reference scenarios to a new scenario file
    Init {
        /// Output path; a .json extension writes JSON
        scenario_path: PathBuf,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Evaluate one column given on the command line
    Evaluate {
        #[command(flatten)]
        column: ColumnArgs,
        /// Multiplier applied to all four nominal flows
        #[arg(long, default_value_t = 1.0)]
        flow_scale: f64,
        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Args)]
struct OutputArgs {
    /// Report format
    #[arg(long, value_enum, default_value_t = FormatArg::Text)]
    format: FormatArg,
    /// Include flow rates, Flv and Csbf in the report
    #[arg(long)]
    details: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Text,
    Json,
}

impl From<&OutputArgs> for ReportOptions {
    fn from(args: &OutputArgs) -> Self {
        ReportOptions {
            format: match args.format {
                FormatArg::Text => ReportFormat::Text,
                FormatArg::Json => ReportFormat::Json,
            },
            details: args.details,
        }
    }
}

/// Column inputs; any value left out is taken from the base column.
#[derive(Args)]
struct ColumnArgs {
    /// Column diameter (m)
    #[arg(long)]
    diameter: Option<f64>,
    /// Distillate mole flow (mole/hr)
    #[arg(long)]
    distillate_mole_flow: Option<f64>,
    /// Bottoms mole flow (mole/hr)
    #[arg(long)]
    bottoms_mole_flow: Option<f64>,
    /// Distillate mass flow (kg/hr)
    #[arg(long)]
    distillate_mass_flow: Option<f64>,
    /// Bottoms mass flow (kg/hr)
    #[arg(long)]
    bottoms_mass_flow: Option<f64>,
    #[arg(long)]
    reflux_ratio: Option<f64>,
    #[arg(long)]
    boilup_ratio: Option<f64>,
    /// Liquid density (kg/m^3)
    #[arg(long)]
    liquid_density: Option<f64>,
    /// Vapor density (kg/m^3)
    #[arg(long)]
    vapor_density: Option<f64>,
    /// Average molecular weight (kg/kmole)
    #[arg(long)]
    molecular_weight: Option<f64>,
    /// Surface tension (mN/m)
    #[arg(long)]
    surface_tension: Option<f64>,
}

impl ColumnArgs {
    fn to_column_def(&self) -> ColumnDef {
        let base = base_column();
        ColumnDef {
            diameter_m: self.diameter.unwrap_or(base.diameter_m),
            distillate_mole_flow: self
                .distillate_mole_flow
                .unwrap_or(base.distillate_mole_flow),
            bottoms_mole_flow: self.bottoms_mole_flow.unwrap_or(base.bottoms_mole_flow),
            distillate_mass_flow_kg_per_hr: self
                .distillate_mass_flow
                .unwrap_or(base.distillate_mass_flow_kg_per_hr),
            bottoms_mass_flow_kg_per_hr: self
                .bottoms_mass_flow
                .unwrap_or(base.bottoms_mass_flow_kg_per_hr),
            reflux_ratio: self.reflux_ratio.unwrap_or(base.reflux_ratio),
            boilup_ratio: self.boilup_ratio.unwrap_or(base.boilup_ratio),
            liquid_density_kg_per_m3: self
                .liquid_density
                .unwrap_or(base.liquid_density_kg_per_m3),
            vapor_density_kg_per_m3: self
                .vapor_density
                .unwrap_or(base.vapor_density_kg_per_m3),
            molecular_weight_kg_per_kmol: self
                .molecular_weight
                .unwrap_or(base.molecular_weight_kg_per_kmol),
            surface_tension_mn_per_m: self
                .surface_tension
                .unwrap_or(base.surface_tension_mn_per_m),
        }
    }
}

fn main() -> AppResult<()> {
    // Logs go to stderr so reports on stdout stay machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Demo { output } => cmd_demo(&output),
        Commands::Run {
            scenario_path,
            scenario,
            parallel,
            output,
        } => cmd_run(&scenario_path, scenario.as_deref(), parallel, &output),
        Commands::Validate { scenario_path } => cmd_validate(&scenario_path),
        Commands::List { scenario_path } => cmd_list(&scenario_path),
        Commands::Init {
            scenario_path,
            force,
        } => cmd_init(&scenario_path, force),
        Commands::Evaluate {
            column,
            flow_scale,
            output,
        } => cmd_evaluate(&column, flow_scale, &output),
    }
}

fn print_report(outcomes: &[ScenarioOutcome], output: &OutputArgs) -> AppResult<()> {
    let report = fc_app::render(outcomes, output.into())?;
    if report.ends_with('\n') {
        print!("{report}");
    } else {
        println!("{report}");
    }
    ensure_all_succeeded(outcomes)
}

fn cmd_demo(output: &OutputArgs) -> AppResult<()> {
    let file = reference_scenarios();
    let outcomes = run_service::run_file(&file, None, RunMode::Serial)?;
    print_report(&outcomes, output)
}

fn cmd_run(
    scenario_path: &Path,
    scenario_id: Option<&str>,
    parallel: bool,
    output: &OutputArgs,
) -> AppResult<()> {
    let file = scenario_service::load_scenarios(scenario_path)?;
    let mode = if parallel {
        RunMode::Parallel
    } else {
        RunMode::Serial
    };
    let outcomes = run_service::run_file(&file, scenario_id, mode)?;
    print_report(&outcomes, output)
}

fn cmd_validate(scenario_path: &Path) -> AppResult<()> {
    println!("Validating scenario file: {}", scenario_path.display());
    let file = scenario_service::load_scenarios(scenario_path)?;
    scenario_service::validate_scenarios(&file)?;
    println!("✓ Scenario file is valid ({} scenarios)", file.scenarios.len());
    Ok(())
}

fn cmd_list(scenario_path: &Path) -> AppResult<()> {
    let file = scenario_service::load_scenarios(scenario_path)?;
    let scenarios = scenario_service::list_scenarios(&file);

    if scenarios.is_empty() {
        println!("No scenarios found in {}", file.name);
    } else {
        println!("Scenarios in {}:", file.name);
        for s in scenarios {
            println!(
                "  {} - {} (diameter {} m, flow scale {})",
                s.id, s.name, s.diameter_m, s.flow_scale
            );
        }
    }
    Ok(())
}

fn cmd_init(scenario_path: &Path, force: bool) -> AppResult<()> {
    if scenario_path.exists() && !force {
        return Err(AppError::InvalidInput(format!(
            "{} already exists (use --force to overwrite)",
            scenario_path.display()
        )));
    }
    scenario_service::save_scenarios(scenario_path, &reference_scenarios())?;
    println!("✓ Wrote reference scenarios to {}", scenario_path.display());
    Ok(())
}

fn cmd_evaluate(column: &ColumnArgs, flow_scale: f64, output: &OutputArgs) -> AppResult<()> {
    let scenario = ScenarioDef {
        id: "column".to_string(),
        name: "Column".to_string(),
        description: None,
        column: column.to_column_def(),
        flow_scale,
    };
    let outcome = evaluate_scenario(&scenario);
    print_report(std::slice::from_ref(&outcome), output)
}
