//! Error enum
#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Serde(serde_json::Error),
    Csv(csv::Error),
    InvalidParameter(String),
    Fit(FitError),
    Custom(String),
}

/// Failure modes of the power-law fit.
///
/// Kept separate from [Error] so that callers can tell a bad fit apart
/// from a bad parameter without string matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitError {
    /// no values were provided at all.
    EmptyInput,
    /// no positive values, or every value at most 1:
    /// the likelihood has no interior maximum.
    DegenerateInput,
    /// the optimizer did not settle within its iteration limit,
    /// or settled on the exponent clamp boundary.
    NoConvergence { iterations: usize },
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Serde(e)
    }
}

impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Error {
        Error::Csv(e)
    }
}

impl From<FitError> for Error {
    fn from(e: FitError) -> Error {
        Error::Fit(e)
    }
}

impl From<String> for Error {
    fn from(s: String) -> Error {
        Error::Custom(s)
    }
}
