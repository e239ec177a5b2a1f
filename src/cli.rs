//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::{clap::ArgGroup, StructOpt};

#[derive(Debug, StructOpt)]
#[structopt(
    name = "guarani-corpus",
    about = "Guarani corpus generation from Paraguayan websites.",
    group = ArgGroup::with_name("seed").required(true)
)]
/// Seeds and corpus parameters.
pub struct GuaraniCorpus {
    #[structopt(
        parse(from_os_str),
        long = "csv",
        group = "seed",
        help = "seed file (name,description,url columns)"
    )]
    pub csv: Option<PathBuf>,
    #[structopt(long = "url", group = "seed", help = "single seed url")]
    pub url: Option<String>,
    #[structopt(
        parse(from_os_str),
        long = "dst",
        help = "corpus destination",
        default_value = "corpus"
    )]
    pub dst: PathBuf,
    #[structopt(
        parse(from_os_str),
        long = "lid-path",
        help = "Path to lid.176.bin",
        default_value = "lid.176.bin"
    )]
    pub lid_path: PathBuf,
    #[structopt(
        parse(from_os_str),
        long = "generic-lid-path",
        help = "Path to the multilingual model (GlotLID)",
        default_value = "glotlid.bin"
    )]
    pub generic_lid_path: PathBuf,
    #[structopt(
        long = "timeout",
        help = "fetch timeout (in seconds)",
        default_value = "30"
    )]
    pub timeout: u64,
}
