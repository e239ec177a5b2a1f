//! # guarani-corpus
//!
//! Builds a corpus of Guarani words out of (mostly Spanish) Paraguayan websites.
//!
//! ```sh
//! guarani-corpus 0.1.0
//! Guarani corpus generation from Paraguayan websites.
//!
//! USAGE:
//!     guarani-corpus [OPTIONS] <--csv <csv>|--url <url>>
//! ```
//!
//! Words are written in `<dst>/<domain>/<page>.txt`, one per line,
//! along with a `<dst>/<domain>/<domain>.json` metadata file per domain.
use std::time::Duration;

use guarani_corpus::error::Error;
use guarani_corpus::pipelines::{CorpusPipeline, Pipeline};
use guarani_corpus::sources::Seeds;
use structopt::StructOpt;

#[macro_use]
extern crate log;

mod cli;

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::GuaraniCorpus::from_args();
    debug!("cli args\n{:#?}", opt);

    let seeds = match (&opt.csv, &opt.url) {
        (Some(path), _) => Seeds::from_csv(path),
        (None, Some(url)) => Seeds::from_url(url),
        (None, None) => Err(Error::Seed("no seed provided".to_string())),
    };
    let seeds = match seeds {
        Ok(seeds) => seeds,
        Err(e) => {
            error!("could not load seeds: {e}");
            return Err(e);
        }
    };

    let p = CorpusPipeline::new(
        seeds,
        opt.dst,
        opt.lid_path,
        opt.generic_lid_path,
        Duration::from_secs(opt.timeout),
    );
    let summary = p.run()?;
    info!("{summary}");
    Ok(())
}
