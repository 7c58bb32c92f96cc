use edge_decay::counter::FileRunCounter;
use edge_decay::session::{run, DecayConfig};
use std::io;
use std::io::{stdin, stdout, BufRead, Write};
use std::path::PathBuf;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "edge-decay-cli",
    about = "Deletes random edges from a random graph and reports how connectivity decays."
)]
struct Opt {
    /// Number of vertices. Prompted for if not specified.
    #[structopt(short = "n", long)]
    vertices: Option<usize>,

    /// Number of edges. Prompted for if not specified.
    #[structopt(short = "m", long)]
    edges: Option<usize>,

    /// Number of edge deletions. Prompted for if not specified.
    #[structopt(short, long)]
    deletions: Option<usize>,

    /// Seed for the random generator. Uses entropy if not specified.
    #[structopt(short, long)]
    seed: Option<u64>,

    /// Directory the adjacency files are written to.
    #[structopt(short, long, parse(from_os_str), default_value = ".")]
    output_dir: PathBuf,

    /// File holding the run counter used to name the adjacency files.
    #[structopt(long, parse(from_os_str), default_value = "file_counter.txt")]
    counter_file: PathBuf,

    /// Log verbosity, repeat for more.
    #[structopt(short, long, parse(from_occurrences))]
    verbose: u8,
}

/// Reads a count from `input`, falling back to `default` on an empty line.
fn prompt<R: BufRead>(input: &mut R, message: &str, default: usize) -> io::Result<usize> {
    print!("{} [{}]: ", message, default);
    stdout().flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    let line = line.trim();
    if line.is_empty() {
        return Ok(default);
    }
    line.parse().map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("expected a number, got `{}`: {}", line, e),
        )
    })
}

fn try_main() -> edge_decay::Result<()> {
    let opt = Opt::from_args();

    edge_decay::log::init_logger(edge_decay::log::verbosity_level(opt.verbose));

    #[cfg(feature = "handle-ctrlc")]
    if let Err(e) = edge_decay::signals::initialize() {
        log::warn!("unable to install Ctrl-C handler: {}", e);
    }

    let defaults = DecayConfig::default();
    let stdin = stdin();
    let mut input = stdin.lock();
    let vertices = match opt.vertices {
        Some(n) => n,
        None => prompt(&mut input, "Enter the number of vertices", defaults.vertices)?,
    };
    let edges = match opt.edges {
        Some(m) => m,
        None => prompt(&mut input, "Enter the number of edges", defaults.edges)?,
    };
    let deletions = match opt.deletions {
        Some(d) => d,
        None => prompt(
            &mut input,
            "Enter the number of edge deletions",
            defaults.deletions,
        )?,
    };

    let config = DecayConfig {
        vertices,
        edges,
        deletions,
        seed: opt.seed,
        output_dir: opt.output_dir,
        counter_file: opt.counter_file,
    };
    let mut counter = FileRunCounter::new(config.counter_file.clone());
    let mut rng = config.rng();

    let summary = run(&config, &mut rng, &mut counter, |report| println!("{}", report))?;

    for path in summary
        .initial_export
        .iter()
        .chain(summary.final_export.iter())
    {
        println!("Graph data saved as {}", path.display());
    }
    println!(
        "Components: {} before, {} after {} deletions{}",
        summary.initial_components,
        summary.final_components(),
        summary.reports.len(),
        if summary.interrupted {
            " (interrupted)"
        } else {
            ""
        }
    );
    Ok(())
}

fn main() {
    if let Err(e) = try_main() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
