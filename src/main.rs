use clap::{
    crate_authors, crate_description, crate_name, crate_version, App, Arg, ArgMatches,
};
use dvr::{
    engine::{Relaxation, RelaxationMode},
    loader,
    report::{Order, Report},
};
use std::{
    error::Error,
    ffi::OsString,
    io::{BufWriter, Write},
};

const DEFAULT_SOURCE: &str = "bellman-ford";

fn app<'a, 'b>() -> App<'a, 'b> {
    App::new(crate_name!())
        .version(crate_version!())
        .author(crate_authors!())
        .about(crate_description!())
        .arg(
            Arg::with_name("GRAPH")
                .help("Topology file: one `vertex (neighbor weight)*` per line")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("source")
                .short("s")
                .long("source")
                .value_name("VERTEX")
                .help("Source vertex")
                .takes_value(true)
                .default_value(DEFAULT_SOURCE),
        )
        .arg(
            Arg::with_name("mode")
                .short("m")
                .long("mode")
                .help("`faithful` skips the first vertex in every round")
                .takes_value(true)
                .possible_values(&["faithful", "textbook"])
                .default_value("faithful"),
        )
        .arg(
            Arg::with_name("sorted")
                .long("sorted")
                .help("Sort report lines by vertex id"),
        )
}

fn handle_run(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let graph = loader::load(matches.value_of("GRAPH").ok_or("missing GRAPH")?)?;
    let source = matches.value_of("source").unwrap_or(DEFAULT_SOURCE);
    let mode: RelaxationMode = matches.value_of("mode").unwrap_or("faithful").parse()?;
    let order = if matches.is_present("sorted") {
        Order::Sorted
    } else {
        Order::Natural
    };
    let result = Relaxation::new(&graph, source).mode(mode).run();
    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write!(out, "{}", Report::new(&result).order(order))?;
    out.flush()?;
    Ok(())
}

fn run<I, T>(args: I) -> Result<(), Box<dyn Error>>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = match app().get_matches_from_safe(args) {
        Ok(matches) => matches,
        // Any clap error on stderr, such as a missing or extra argument or an
        // unknown --mode value, prints the message and exits with status 0.
        Err(e) if e.use_stderr() => {
            eprintln!("{}", e.message);
            return Ok(());
        }
        Err(e) => e.exit(),
    };
    handle_run(&matches)
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    run(std::env::args_os())
}
