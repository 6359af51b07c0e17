// objgraph: object graph walker with Graphviz output and a terminal browser

use std::io;
use std::path::PathBuf;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;
use tracing_subscriber::EnvFilter;

use objgraph::constants::DEFAULT_MAX_DEPTH;
use objgraph::samples::SampleKind;
use objgraph::ui::App;
use objgraph::emit::sink::write_document;
use objgraph::{visualize, Config, DotEmitter, Visualization};

/// Walk a sample data structure and write its object graph as a DOT file
#[derive(Debug, Parser)]
#[command(name = "objgraph", version, about)]
struct Cli {
    /// Data structure to build and visualize
    #[arg(value_enum)]
    sample: SampleKind,

    /// Number of values to insert
    #[arg(long, default_value_t = 7)]
    size: usize,

    /// Seed for insertion order and skip list levels
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Member name whose value is shown or whose container is expanded
    #[arg(short = 'w', long = "whitelist", value_name = "NAME")]
    whitelist: Vec<String>,

    /// Member-name fragment to hide
    #[arg(short = 'b', long = "blacklist", value_name = "FRAG")]
    blacklist: Vec<String>,

    /// Only apply the fragments given with --blacklist
    #[arg(long)]
    no_default_blacklist: bool,

    /// Expand every container inline instead of summarizing it
    #[arg(long)]
    expand_containers: bool,

    /// Maximum reference depth from the root
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Maximum number of nodes
    #[arg(long)]
    max_nodes: Option<usize>,

    /// Layout direction of the graph
    #[arg(long, default_value = "TB", value_parser = ["TB", "LR", "BT", "RL"])]
    rankdir: String,

    /// Directory the .dot file is written into
    #[arg(short = 'o', long = "output", value_name = "DIR", default_value = ".")]
    output: PathBuf,

    /// Print the document instead of writing a file
    #[arg(long)]
    stdout: bool,

    /// Open the terminal browser after writing
    #[arg(long)]
    view: bool,
}

impl Cli {
    fn config(&self) -> Config {
        Config::new()
            .whitelist(self.whitelist.iter().cloned())
            .blacklist(self.blacklist.iter().cloned())
            .default_blacklist(!self.no_default_blacklist)
            .expand_containers(self.expand_containers)
            .max_depth(Some(self.max_depth))
            .max_nodes(self.max_nodes)
    }

    fn emitter(&self) -> DotEmitter {
        DotEmitter::new().rankdir(self.rankdir.as_str())
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let sample = cli.sample.build(cli.size, cli.seed);
    let visualization = visualize(&*sample, &cli.config())?;
    info!(
        nodes = visualization.nodes().len(),
        edges = visualization.edges().len(),
        diagnostics = visualization.diagnostics().len(),
        "walked {}",
        visualization.root_type()
    );

    let document = cli.emitter().emit(&visualization);
    if cli.stdout {
        print!("{}", document);
    } else {
        let path = cli.output.join(visualization.file_name());
        write_document(&path, &document)?;
        eprintln!("Wrote {}", path.display());
    }

    if cli.view {
        view(visualization)?;
    }
    Ok(())
}

fn view(visualization: Visualization) -> io::Result<()> {
    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(visualization);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}
