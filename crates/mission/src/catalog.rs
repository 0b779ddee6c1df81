mod builtin;

use {
    crate::{
        error::{
            DuplicateMissionSnafu, EmptyCatalogSnafu, MissionNotFoundSnafu, ParseCatalogSnafu,
            ReadCatalogSnafu,
        },
        Mission, Result,
    },
    snafu::prelude::*,
    std::{fs, path::Path},
    tracing::info,
};

/// Missions ordered by id.
#[derive(Debug, Clone)]
pub struct Catalog {
    missions: Vec<Mission>,
}

impl Catalog {
    /// The demo campaign shipped with the game.
    pub fn builtin() -> Self {
        Self {
            missions: builtin::missions(),
        }
    }

    pub fn from_missions(mut missions: Vec<Mission>) -> Result<Self> {
        ensure!(!missions.is_empty(), EmptyCatalogSnafu);

        missions.sort_by_key(|m| m.id);

        if let Some(pair) = missions.windows(2).find(|pair| pair[0].id == pair[1].id) {
            return DuplicateMissionSnafu { id: pair[0].id }.fail();
        }

        Ok(Self { missions })
    }

    /// Reads a JSON array of missions.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).context(ReadCatalogSnafu { path })?;
        let missions: Vec<Mission> =
            serde_json::from_str(&content).context(ParseCatalogSnafu { path })?;

        info!(path = %path.display(), count = missions.len(), "loaded missions");

        Self::from_missions(missions)
    }

    pub fn get(&self, id: u32) -> Result<&Mission> {
        self.missions
            .iter()
            .find(|m| m.id == id)
            .context(MissionNotFoundSnafu { id })
    }

    pub fn first(&self) -> Option<&Mission> {
        self.missions.first()
    }

    pub fn next_after(&self, id: u32) -> Option<&Mission> {
        self.missions.iter().find(|m| m.id > id)
    }

    pub fn len(&self) -> usize {
        self.missions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.missions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Mission> {
        self.missions.iter()
    }
}
