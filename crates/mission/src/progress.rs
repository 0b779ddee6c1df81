use {
    crate::{Catalog, Mission, Outcome},
    tracing::info,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Mission(u32),
    /// Every mission of the catalog has been completed.
    Finished,
}

/// A player's way through a catalog: the current mission, whether it has been
/// solved, and the findings archived so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Progress {
    stage: Stage,
    completed: bool,
    findings: Vec<String>,
}

impl Progress {
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            stage: first_stage(catalog),
            completed: false,
            findings: vec![],
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn current_mission<'a>(&self, catalog: &'a Catalog) -> Option<&'a Mission> {
        match self.stage {
            Stage::Mission(id) => catalog.get(id).ok(),
            Stage::Finished => None,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn is_finished(&self) -> bool {
        self.stage == Stage::Finished
    }

    pub fn findings(&self) -> &[String] {
        &self.findings
    }

    /// Marks the current mission as completed when `outcome` is a correct
    /// attempt at it, archiving the mission's finding.
    pub fn record(&mut self, mission: &Mission, outcome: &Outcome) {
        if self.stage != Stage::Mission(mission.id)
            || outcome.mission_id != mission.id
            || !outcome.is_correct()
        {
            return;
        }

        self.completed = true;

        if let Some(finding) = &mission.finding {
            let rows = outcome.player_result.row_count().to_string();
            self.archive(finding.replace("{rows}", &rows));
        }
    }

    /// Moves on to the next mission. Returns `false`, staying put, while the
    /// current mission is unsolved.
    pub fn advance(&mut self, catalog: &Catalog) -> bool {
        let Stage::Mission(id) = self.stage else {
            return false;
        };
        if !self.completed {
            return false;
        }

        self.stage = catalog
            .next_after(id)
            .map_or(Stage::Finished, |m| Stage::Mission(m.id));
        self.completed = false;

        info!(stage = ?self.stage, "advanced");

        true
    }

    /// Stores a finding once; returns whether it was new.
    pub fn archive(&mut self, finding: String) -> bool {
        if self.findings.contains(&finding) {
            return false;
        }

        self.findings.push(finding);
        true
    }

    pub fn reset(&mut self, catalog: &Catalog) {
        *self = Self::new(catalog);
    }
}

fn first_stage(catalog: &Catalog) -> Stage {
    catalog
        .first()
        .map_or(Stage::Finished, |m| Stage::Mission(m.id))
}
