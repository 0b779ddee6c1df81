use {
    crate::guard,
    snafu::{prelude::*, Backtrace},
    std::{io, path::PathBuf},
};

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("{}", source))]
    Rejected { source: guard::Error },

    #[snafu(display("failed to prepare the mission database: {}", source))]
    Setup {
        #[snafu(backtrace)]
        source: sandbox::Error,
    },

    #[snafu(display("Syntax or execution error: {}", source))]
    PlayerQuery {
        #[snafu(backtrace)]
        source: sandbox::Error,
    },

    #[snafu(display("the reference query of mission {} failed: {}", id, source))]
    ReferenceQuery {
        id: u32,
        #[snafu(backtrace)]
        source: sandbox::Error,
    },

    #[snafu(display("failed to read missions from {}: {}", path.display(), source))]
    ReadCatalog {
        path: PathBuf,
        source: io::Error,
        backtrace: Backtrace,
    },

    #[snafu(display("failed to parse missions in {}: {}", path.display(), source))]
    ParseCatalog {
        path: PathBuf,
        source: serde_json::Error,
        backtrace: Backtrace,
    },

    #[snafu(display("the mission catalog is empty"))]
    EmptyCatalog,

    #[snafu(display("mission {} is defined more than once", id))]
    DuplicateMission { id: u32 },

    #[snafu(display("mission {} does not exist", id))]
    MissionNotFound { id: u32 },
}

pub type Result<T> = std::result::Result<T, Error>;
