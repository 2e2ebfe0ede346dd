use geojson_container::{decode_batch_stream, decode_stream, Container, Decoded};
use itertools::Itertools;
use log::{info, LevelFilter};
use std::env;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::PathBuf;
use structopt::StructOpt;

#[derive(StructOpt, Debug)]
#[structopt(name = "geojson_container", about = "Decode GeoJSON and print its structure")]
struct Opt {
    /// Log more, repeat for even more (-v, -vv, -vvv)
    #[structopt(short, long, parse(from_occurrences))]
    verbose: u8,

    /// Accept a top-level array of GeoJSON objects
    #[structopt(short, long)]
    batch: bool,

    /// Print one line per object instead of the full structure
    #[structopt(short, long)]
    summary: bool,

    /// GeoJSON file, stdin if omitted
    #[structopt(parse(from_os_str))]
    input: Option<PathBuf>,
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);
    if let Ok(filters) = env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    builder.init();
}

fn geometry_labels<'a>(container: &'a Container, labels: &mut Vec<&'a str>) {
    match container.geometry() {
        Some(geometry) if geometry.is_empty() => labels.push("empty"),
        Some(geometry) => labels.push(geometry.type_name()),
        None => {
            for feature in container.features() {
                geometry_labels(feature, labels);
            }
        }
    }
}

fn summarize(container: &Container) -> String {
    let mut labels = vec![];
    geometry_labels(container, &mut labels);
    let groups = labels.into_iter().sorted().group_by(|label| *label);
    let counts = groups
        .into_iter()
        .map(|(label, group)| format!("{}:{}", label, group.count()))
        .join(",");
    format!(
        "{} features={} geometries={}",
        container.type_name(),
        container.features().len(),
        counts
    )
}

fn main() -> Result<(), Box<dyn Error>> {
    let opt = Opt::from_args();
    init_logger(opt.verbose);

    let reader: Box<dyn Read> = match &opt.input {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(io::stdin()),
    };

    let containers: Vec<Container> = if opt.batch {
        let decoded = decode_batch_stream(reader)?;
        let failures: usize = decoded.iter().map(|d| d.diagnostics.len()).sum();
        info!("decoded {} objects, {} features failed", decoded.len(), failures);
        decoded
            .into_iter()
            .map(|Decoded { container, .. }| container)
            .collect()
    } else {
        vec![decode_stream(reader)?]
    };

    for container in &containers {
        if opt.summary {
            println!("{}", summarize(container));
        } else {
            println!("{:#?}", container);
        }
    }
    Ok(())
}
