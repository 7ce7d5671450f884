use clap::Parser;
use dimacs2plain::parser as dparser;
use log::info;
use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::time::Instant;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Parser)]
#[command(name = "dimacs2plain", version, arg_required_else_help(true))]
struct Cli {
    /// The path to the graph file in the DIMACS arc-list format.
    #[arg(verbatim_doc_comment)]
    input: String,

    /// Output path, stdout when not given.
    #[arg(short, long, verbatim_doc_comment)]
    output: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    pretty_env_logger::init();

    let time = Instant::now();

    let mut graph = dparser::parse_graph(&cli.input);
    graph.sort_arcs();

    info!(
        "Parsed and sorted {} arcs over {} nodes in {:.3}s.",
        graph.arcs.len(),
        graph.header.num_nodes,
        time.elapsed().as_secs_f32()
    );

    let mut writer: Box<dyn Write> = if let Some(path) = &cli.output {
        Box::new(BufWriter::new(
            File::create(path).expect("Unable to create file"),
        ))
    } else {
        Box::new(BufWriter::new(stdout()))
    };

    write!(writer, "{graph}").expect("Unable to write the plain format");
    writer.flush().unwrap();
}
