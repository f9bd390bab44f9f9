use antsim::{analytical_convergence_time, Scenario, ScenarioConfig};

use anyhow::Result;
use clap::Parser;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, default_value = "square.yaml")]
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
    env_logger::init();

    let scenario_cfg = load_scenario_from_yaml()?;
    let scenario = Scenario::build_scenario(scenario_cfg)?;
    let p = scenario.parameters.clone();

    let expected = analytical_convergence_time(p.ants, p.radius, p.speed);

    let mut runner = scenario.into_runner()?;
    let outcome = runner.run()?;

    // max_frames >= 1, so at least one frame is always kept
    let last = runner.frames_used() - 1;
    println!("outcome          : {outcome:?}");
    println!("frames kept      : {}", runner.frames_used());
    println!("elapsed time     : {:.10}", runner.time_at(last));
    println!("expected time    : {expected:.10}");
    println!("final separation : {:.10}", runner.distance_at(last));

    //bench_step();
    //bench_run();

    Ok(())
}
