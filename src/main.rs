//! # Zipfian
//!
//! Zipfian explores Zipf's-law word-frequency statistics: empirical
//! rank/frequency analysis of text corpora, synthetic zeta-distribution
//! sampling with theoretical expected counts, and a maximum-likelihood
//! power-law fit. A keyword-driven chatbot intent demo rides along.
//!
//! This project can be used both as a command line tool and as a lib to
//! integrate frequency analysis into other projects.
//!
//! ## Getting started
//!
//! ```sh
//! zipfian 0.2.0
//! word frequency analysis tool.
//!
//! USAGE:
//!     zipfian <SUBCOMMAND>
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!     -V, --version    Prints version information
//!
//! SUBCOMMANDS:
//!     fit       Fit a power law to a corpus frequency series
//!     help      Prints this message or the help of the given subcommand(s)
//!     intent    Classify a phrase into a chatbot intent and reply
//!     sample    Compare a synthetic Zipf sample against expected counts
//!     top       Top words of a text corpus
//! ```
//!
use std::fs::File;

use rand::rngs::StdRng;
use rand::SeedableRng;
use structopt::StructOpt;

#[macro_use]
extern crate log;

mod cli;

use zipfian::error::Error;
use zipfian::intent::{detect_intent, ResponseSet};
use zipfian::pipelines::{CorpusAnalysis, SampleComparison};
use zipfian::sources::{pick, TextFile};
use zipfian::writing;

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::Zipfian::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::Zipfian::Top(t) => {
            let analysis = CorpusAnalysis::new(TextFile::new(&t.src), t.top_n, t.stopwords);
            let report = analysis.run()?;

            print!("{}", writing::top_words(&report.series, report.top_n));
            if let Some(fit) = &report.fit {
                println!("{}", writing::fit_summary(fit));
            }
            if let Some(dst) = t.csv {
                writing::write_ranked_series(File::create(dst)?, &report.series)?;
            }
        }

        cli::Zipfian::Sample(s) => {
            let report = SampleComparison::new(s.exponent, s.size, s.seed).run()?;

            print!("{}", writing::comparison_preview(&report, 20));
            if let Some(dst) = s.csv {
                writing::write_comparison(File::create(dst)?, &report)?;
            }
        }

        cli::Zipfian::Fit(f) => {
            let analysis = CorpusAnalysis::new(TextFile::new(&f.src), 0, f.stopwords);
            let report = analysis.run()?;

            match report.fit {
                Some(fit) => println!("{}", writing::fit_summary(&fit)),
                None => {
                    error!("no fit for {:?}", f.src);
                    return Err(Error::Custom(
                        "fit failed: corpus too small or degenerate".to_string(),
                    ));
                }
            }
        }

        cli::Zipfian::Intent(i) => {
            let mut rng = match i.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let phrase = match i.phrase {
                Some(phrase) => phrase,
                None => pick(&mut rng).to_string(),
            };
            let responses = match i.responses {
                Some(path) => ResponseSet::from_reader(File::open(path)?)?,
                None => ResponseSet::default(),
            };

            let intent = detect_intent(&phrase);
            debug!("detected intent {:?}", intent);
            println!("you: {}", phrase);
            println!("bot: {}", responses.pick(intent, &mut rng));
        }
    };
    Ok(())
}
