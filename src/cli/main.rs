#![warn(clippy::all, clippy::pedantic)]
use std::error::Error;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use clap::{ArgAction, Parser, ValueEnum};
use itertools::Itertools;
use log::LevelFilter;
use rand::rngs::StdRng;
use rand::SeedableRng;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use roadflow::{
    build_road_network, max_flow, Algorithm, FlowNetwork, RandomCapacity, RawArc, RoadSegment,
};

type NodeId = u64;
type Capacity = i64;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum AlgorithmArg {
    Dinitz,
    EdmondsKarp,
    FordFulkerson,
    /// Run every algorithm and check that they agree
    All,
}

impl AlgorithmArg {
    fn algorithms(self) -> Vec<Algorithm> {
        match self {
            AlgorithmArg::Dinitz => vec![Algorithm::Dinitz],
            AlgorithmArg::EdmondsKarp => vec![Algorithm::EdmondsKarp],
            AlgorithmArg::FordFulkerson => vec![Algorithm::FordFulkerson],
            AlgorithmArg::All => Algorithm::ALL.to_vec(),
        }
    }
}

/// Maximum flow between two intersections of a road network.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Opts {
    /// CSV file with `tail,head[,capacity]` rows, or `from,to` rows with --undirected
    input: PathBuf,

    #[arg(long)]
    source: NodeId,

    #[arg(long)]
    sink: NodeId,

    #[arg(short, long, value_enum, default_value_t = AlgorithmArg::Dinitz)]
    algorithm: AlgorithmArg,

    /// Rows are undirected road segments; each direction gets its own random capacity
    #[arg(long)]
    undirected: bool,

    /// Smallest randomly assigned capacity
    #[arg(long, default_value_t = 1)]
    min_capacity: Capacity,

    /// Largest randomly assigned capacity
    #[arg(long, default_value_t = 18888)]
    max_capacity: Capacity,

    /// Seed for the capacity generator (defaults to the current time)
    #[arg(long)]
    seed: Option<u64>,

    /// Where to write the arcs carrying flow (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

// Function to read the network from a CSV file
fn read_network_csv(
    filepath: &Path,
    undirected: bool,
    capacities: &mut RandomCapacity<Capacity, StdRng>,
) -> Result<FlowNetwork<NodeId, Capacity>, Box<dyn Error>> {
    let mut rdr = csv::Reader::from_path(filepath)?;
    let network = if undirected {
        let segments = rdr
            .deserialize::<RoadSegment<NodeId>>()
            .collect::<Result<Vec<_>, _>>()?;
        build_road_network(segments, capacities)?
    } else {
        let arcs = rdr
            .deserialize::<RawArc<NodeId, Capacity>>()
            .collect::<Result<Vec<_>, _>>()?;
        FlowNetwork::from_raw_arcs(arcs, capacities)?
    };
    Ok(network)
}

// Function to write the arcs carrying flow
fn write_csv(
    network: &FlowNetwork<NodeId, Capacity>,
    filepath: Option<&Path>,
) -> Result<(), Box<dyn Error>> {
    let writer: Box<dyn io::Write> = match filepath {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout()),
    };
    let mut wtr = csv::Writer::from_writer(writer);
    for record in network.flow_records() {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let opts = Opts::parse();

    let level = match opts.verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    let seed = match opts.seed {
        Some(seed) => seed,
        None => SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs(),
    };
    log::debug!("capacity seed: {seed}");
    let mut capacities = RandomCapacity::with_range(
        StdRng::seed_from_u64(seed),
        opts.min_capacity,
        opts.max_capacity,
    )?;

    let network = read_network_csv(&opts.input, opts.undirected, &mut capacities)?;
    log::info!(
        "read {} nodes and {} arcs from {}",
        network.node_count(),
        network.arc_count(),
        opts.input.display()
    );

    let mut solved: Option<(Capacity, FlowNetwork<NodeId, Capacity>)> = None;
    for algo in opts.algorithm.algorithms() {
        let (value, flows) = max_flow(network.clone(), opts.source, opts.sink, algo)?;
        log::info!("{algo:>15}: {value}");

        match solved.as_ref().map(|(expected, _)| *expected) {
            Some(expected) if expected != value => {
                return Err(format!("{algo} found {value}, expected {expected}").into());
            }
            Some(_) => {}
            None => solved = Some((value, flows)),
        }
    }

    let Some((value, flows)) = solved else {
        return Ok(());
    };
    flows.check(&opts.source, &opts.sink)?;

    let cut = flows.min_cut(&opts.source)?;
    log::info!("----------------------------------");
    log::info!("       Max flow = {value}");
    log::info!("   Min cut arcs = {}", cut.arcs.len());
    log::info!("   Cut capacity = {}", cut.capacity);
    if let Some(path) = flows.flow_path(&opts.source, &opts.sink)? {
        log::info!("      Flow path = {}", path.iter().join(" -> "));
    }

    write_csv(&flows, opts.output.as_deref())
}
