//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "zipfian", about = "word frequency analysis tool.")]
/// Holds every command that is callable by the `zipfian` command.
pub enum Zipfian {
    #[structopt(about = "Top words of a text corpus")]
    Top(Top),
    #[structopt(about = "Compare a synthetic Zipf sample against expected counts")]
    Sample(Sample),
    #[structopt(about = "Fit a power law to a corpus frequency series")]
    Fit(Fit),
    #[structopt(about = "Classify a phrase into a chatbot intent and reply")]
    Intent(Intent),
}

#[derive(Debug, StructOpt)]
/// Top command and parameters.
pub struct Top {
    #[structopt(parse(from_os_str), help = "corpus file location")]
    pub src: PathBuf,
    #[structopt(
        short = "n",
        long = "top",
        default_value = "10",
        help = "number of words to show"
    )]
    pub top_n: usize,
    #[structopt(long = "stopword", help = "additional stopwords to drop")]
    pub stopwords: Vec<String>,
    #[structopt(
        parse(from_os_str),
        long = "csv",
        help = "write the full ranked series to a CSV file"
    )]
    pub csv: Option<PathBuf>,
}

#[derive(Debug, StructOpt)]
/// Sample command and parameters.
pub struct Sample {
    #[structopt(
        short = "a",
        long = "exponent",
        default_value = "4.0",
        help = "power-law exponent, must be > 1"
    )]
    pub exponent: f64,
    #[structopt(short = "s", long = "size", default_value = "20000", help = "sample size")]
    pub size: usize,
    #[structopt(long = "seed", help = "random seed. Drawn from entropy if missing.")]
    pub seed: Option<u64>,
    #[structopt(
        parse(from_os_str),
        long = "csv",
        help = "write observed vs expected counts to a CSV file"
    )]
    pub csv: Option<PathBuf>,
}

#[derive(Debug, StructOpt)]
/// Fit command and parameters.
pub struct Fit {
    #[structopt(parse(from_os_str), help = "corpus file location")]
    pub src: PathBuf,
    #[structopt(long = "stopword", help = "additional stopwords to drop")]
    pub stopwords: Vec<String>,
}

#[derive(Debug, StructOpt)]
/// Intent command and parameters.
pub struct Intent {
    #[structopt(help = "phrase to classify. A built-in demo phrase if missing.")]
    pub phrase: Option<String>,
    #[structopt(
        parse(from_os_str),
        long = "responses",
        help = "JSON file mapping intents to response lists"
    )]
    pub responses: Option<PathBuf>,
    #[structopt(long = "seed", help = "random seed for phrase and reply choice")]
    pub seed: Option<u64>,
}
