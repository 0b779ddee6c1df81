use {
    snafu::{prelude::*, Backtrace},
    std::{io, path::PathBuf},
};

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(super)))]
pub enum Error {
    #[snafu(display("Failed to read result set {}, source: {}", path.display(), source))]
    ReadResultSet {
        path: PathBuf,
        source: io::Error,
        backtrace: Backtrace,
    },

    #[snafu(display("Failed to parse result set {}, source: {}", path.display(), source))]
    ParseResultSet {
        path: PathBuf,
        source: serde_json::Error,
        backtrace: Backtrace,
    },

    #[snafu(display("{}", source))]
    Mission {
        #[snafu(backtrace)]
        source: mission::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
