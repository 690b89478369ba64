use geometry_compare::server::start_server;
use geometry_compare::MyResult;

use std::path::PathBuf;
use structopt::StructOpt;
use tracing::{info, warn};

#[derive(StructOpt)]
struct Opts {
    /// Csv file with one row per uuid containing the old and new geometry
    #[structopt(default_value = "data.csv")]
    csv_file: PathBuf,
    /// Port the http server listens on
    #[structopt(short, long, default_value = "8080")]
    port: u16,
}

#[actix_web::main]
async fn main() -> MyResult<()> {
    tracing_subscriber::fmt::init();

    let Opts { csv_file, port } = Opts::from_args();

    if !csv_file.is_file() {
        // lookups answer 404 until the file shows up
        warn!("csv file {:?} does not exist yet", csv_file);
    }

    info!("serving geometries from {:?} on port {}", csv_file, port);

    start_server(csv_file, port).await?;

    Ok(())
}
