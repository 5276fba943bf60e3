#[macro_use]
extern crate log;

use std::process;

use tfnorm_tensorflow::prelude::*;

use crate::display_params::DisplayParams;

mod display_params;
mod dump;

/// Entrypoint for the command-line interface.
fn main() {
    use clap::*;
    let app = Command::new("tfnorm")
        .version(crate_version!())
        .about("Dump normalized operator parameters of a TensorFlow graph")
        .arg(Arg::new("model").required(true).help("Sets the frozen GraphDef (.pb) to read"))
        .arg(
            Arg::new("verbosity")
                .short('v')
                .multiple_occurrences(true)
                .help("Sets the level of verbosity."),
        )
        .arg(
            Arg::new("node_name")
                .long("node-name")
                .takes_value(true)
                .multiple_occurrences(true)
                .help("Only dump nodes whose name starts with this"),
        )
        .arg(
            Arg::new("op_name")
                .long("op-name")
                .takes_value(true)
                .multiple_occurrences(true)
                .help("Only dump nodes of this op"),
        )
        .arg(Arg::new("json").long("json").help("Dump as JSON instead of text"));

    let matches = app.get_matches();

    let level = match matches.occurrences_of("verbosity") {
        0 => "tfnorm=warn,tfnorm_tensorflow=warn",
        1 => "tfnorm=info,tfnorm_tensorflow=info",
        2 => "tfnorm=debug,tfnorm_tensorflow=debug",
        _ => "tfnorm=trace,tfnorm_tensorflow=trace",
    };
    let env = env_logger::Env::default().filter_or("TFNORM_LOG", level);
    env_logger::Builder::from_env(env).format_timestamp_nanos().init();

    if let Err(e) = handle(&matches) {
        error!("{:?}", e);
        process::exit(1)
    }
}

fn handle(matches: &clap::ArgMatches) -> TfResult<()> {
    let params = DisplayParams::from_clap(matches);
    let path = matches.value_of("model").unwrap_or_default();
    info!("Loading {}", path);
    let bytes = fs_err::read(path)?;
    let graph = tensorflow().graph_for_read(&mut &*bytes)?;
    dump::handle(&graph, &params, &mut std::io::stdout().lock())
}
