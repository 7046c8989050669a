use threebody::{run, DiagnosticSeries, Scenario, ScenarioConfig};

use anyhow::Result;
use clap::Parser;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, default_value = "figure_eight.yaml")]
    file_name: String,
}

// load here to keep main clean
fn load_scenario_from_yaml() -> Result<ScenarioConfig> {
    let args = Args::parse();
    let file_name = args.file_name;

    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(&file_name);
    let file = File::open(&config_path)?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    let scenario_cfg = load_scenario_from_yaml()?;
    let scenario = Scenario::build_scenario(scenario_cfg);

    let trajectory = run(
        &scenario.initial,
        &scenario.masses,
        &scenario.forces,
        scenario.parameters.dt,
        scenario.parameters.steps,
    )?;

    let series = DiagnosticSeries::from_trajectory(&trajectory, &scenario.masses, scenario.parameters.g);

    println!("Steps: {}, dt = {}", trajectory.len(), trajectory.dt());
    println!("Final Energy: {:.6}", series.energy.last().copied().unwrap_or(f64::NAN));
    println!(
        "Final Angular Momentum: {:.6}",
        series.angular_momentum.last().copied().unwrap_or(f64::NAN)
    );
    println!("Relative Energy Drift: {:.3e}", series.relative_energy_drift());

    Ok(())
}
