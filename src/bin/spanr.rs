use clap::Parser;
use log::{debug, error, info, warn};

use spanr::graph::{CpuClient, GraphError, GraphResult, MSTAlgorithms, MSTMethod};
use spanr::report::{estimate_space_usage, timed, RunReport};
use spanr::{GeneratorOptions, GraphDensity, GraphGenerator, Representation};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct SpanrArgs {
    /// Spanning tree algorithm
    #[arg(short, long, value_enum, default_value_t = MSTMethod::Kruskal)]
    pub algorithm: MSTMethod,

    /// Graph density
    #[arg(short, long, value_enum, default_value_t = GraphDensity::Sparse)]
    pub density: GraphDensity,

    /// Representation the graph is generated in
    #[arg(short, long, value_enum, default_value_t = Representation::List)]
    pub representation: Representation,

    /// Number of vertices
    #[arg(short = 'n', long)]
    pub vertices: usize,

    /// Weights are drawn from [0, max_weight)
    #[arg(short, long, default_value_t = 100)]
    pub max_weight: u32,

    /// RNG seed for reproducible graphs
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Print only the summary, not every tree edge
    #[arg(short, long)]
    pub quiet: bool,
}

fn run(args: &SpanrArgs) -> GraphResult<RunReport<u32>> {
    if args.vertices == 0 {
        return Err(GraphError::InvalidArgument {
            arg: "vertices",
            reason: "graph needs at least one vertex".to_string(),
        });
    }

    let mut options = GeneratorOptions::new(args.vertices)
        .with_density(args.density)
        .with_representation(args.representation)
        .with_max_weight(args.max_weight);
    if let Some(seed) = args.seed {
        options = options.with_seed(seed);
    }
    let mut generator = GraphGenerator::new(options)?;
    debug!("generator options: {:?}", generator.options());
    let client = CpuClient::new();

    let report = match args.algorithm {
        MSTMethod::Kruskal => {
            let edges = generator.generate_edge_list();
            let (result, elapsed) = timed(|| client.kruskal_mst(&edges, args.vertices));
            let bytes =
                estimate_space_usage::<u32>(args.representation, args.vertices, edges.len());
            RunReport::new(MSTMethod::Kruskal, edges.len(), result?, elapsed, bytes)
        }
        MSTMethod::Prim => {
            let graph = generator.generate_adjacency_list();
            let (result, elapsed) = timed(|| client.prim_mst(&graph));
            let bytes = estimate_space_usage::<u32>(
                args.representation,
                graph.num_vertices(),
                graph.num_entries(),
            );
            RunReport::new(MSTMethod::Prim, graph.num_entries(), result?, elapsed, bytes)
        }
    };

    Ok(report.with_edge_listing(!args.quiet))
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = SpanrArgs::parse();
    info!(
        "{} on a {:?} graph ({:?}) with {} vertices",
        args.algorithm, args.density, args.representation, args.vertices
    );

    match run(&args) {
        Ok(report) => {
            if !report.result.is_spanning() {
                warn!("graph is disconnected, result does not span every vertex");
            }
            println!("{report}");
        }
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    }
}
