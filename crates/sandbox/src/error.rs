use snafu::{prelude::*, Backtrace};

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("failed to open the sandbox database: {}", source))]
    Open {
        source: rusqlite::Error,
        backtrace: Backtrace,
    },

    #[snafu(display("setup statement `{}` failed: {}", statement, source))]
    Setup {
        statement: String,
        source: rusqlite::Error,
        backtrace: Backtrace,
    },

    #[snafu(display("{}", source))]
    Query {
        source: rusqlite::Error,
        backtrace: Backtrace,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
