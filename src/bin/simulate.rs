use std::{
    error::Error,
    fs::File,
    io::{stdout, BufWriter, Write},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use log::error;
use random_paths::simulation::{SimulationConfig, Simulator};

/// Estimates the average shortest path length of random graphs by Monte Carlo simulation.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of vertices per graph
    #[arg(short, long, default_value_t = 50)]
    vertices: u32,

    /// Edge densities to simulate, one report per density
    #[arg(short, long, num_args = 1.., default_values_t = vec![0.2, 0.4])]
    densities: Vec<f64>,

    /// Minimum edge weight
    #[arg(long, default_value_t = 1.0)]
    min_weight: f64,

    /// Maximum edge weight
    #[arg(long, default_value_t = 10.0)]
    max_weight: f64,

    /// Number of random graphs per density
    #[arg(short, long, default_value_t = 1)]
    iterations: u32,

    /// Seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Source vertex of the shortest paths
    #[arg(long, default_value_t = 0)]
    source: u32,

    /// Print one sampled graph and its shortest paths per density
    #[arg(long)]
    show_graph: bool,

    /// Write the reports as JSON
    #[arg(long)]
    json: bool,

    /// Output file, stdout if not given
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let mut writer: BufWriter<Box<dyn Write>> = match &args.output {
        Some(path) => BufWriter::new(Box::new(File::create(path)?)),
        None => BufWriter::new(Box::new(stdout())),
    };

    let mut reports = Vec::new();
    for &density in &args.densities {
        let config = SimulationConfig {
            vertices: args.vertices,
            density,
            min_weight: args.min_weight,
            max_weight: args.max_weight,
            iterations: args.iterations,
            seed: args.seed,
            source: args.source,
        };
        let mut simulator = Simulator::new(config.clone())?;

        if !args.json {
            writeln!(writer, "simulating graphs")?;
            writeln!(writer, "> vertices:            {}", args.vertices)?;
            writeln!(writer, "> density:             {}", density)?;
            writeln!(writer, "> minimum edge weight: {:.1}", args.min_weight)?;
            writeln!(writer, "> maximum edge weight: {:.1}", args.max_weight)?;
            writeln!(writer, "> seed:                {}", simulator.seed())?;
            writeln!(writer)?;
        }

        if args.show_graph && !args.json {
            // Same seed, so this is the first graph of the run below.
            let mut preview = Simulator::new(SimulationConfig {
                seed: Some(simulator.seed()),
                ..config
            })?;
            let graph = preview.sample()?;
            let shortest_path = preview.solve(&graph)?;
            writeln!(writer, "{}", graph)?;
            writeln!(writer, "{}", shortest_path)?;
        }

        let report = simulator.run()?;
        if !args.json {
            writeln!(writer, "{}", report)?;
            writeln!(writer)?;
        }
        reports.push(report);
    }

    if args.json {
        serde_json::to_writer_pretty(&mut writer, &reports)?;
        writeln!(writer)?;
    }
    writer.flush()?;

    Ok(())
}
