use {
    crate::{
        error::{PlayerQuerySnafu, ReferenceQuerySnafu, RejectedSnafu, SetupSnafu},
        guard, Mission, Result,
    },
    def::ResultSet,
    evaluator::{compare_results, Verdict},
    sandbox::{QueryExecutor, SqliteSandbox},
    snafu::ResultExt,
    tracing::{info, instrument, warn},
};

/// The result of one attempt at a mission.
#[derive(Debug, Clone)]
pub struct Outcome {
    pub mission_id: u32,
    pub verdict: Verdict,
    pub player_result: ResultSet,
    feedback: String,
    hint: Option<String>,
}

impl Outcome {
    pub fn is_correct(&self) -> bool {
        self.verdict.is_correct()
    }

    /// The mission's success message, or the diagnostic of the first
    /// mismatch.
    pub fn feedback(&self) -> &str {
        &self.feedback
    }

    /// Only offered after an incorrect attempt.
    pub fn hint(&self) -> Option<&str> {
        if self.is_correct() {
            None
        } else {
            self.hint.as_deref()
        }
    }
}

/// Screens the player's query, runs it and the mission's reference query on
/// `executor`, and compares the two results.
#[instrument(level = "debug", skip_all, fields(mission = mission.id))]
pub fn evaluate<E>(mission: &Mission, executor: &E, player_query: &str) -> Result<Outcome>
where
    E: QueryExecutor + ?Sized,
{
    if let Err(rejection) = guard::check_query(player_query, mission.allow_restricted_keywords) {
        warn!(%rejection, "player query rejected");
        return Err(rejection).context(RejectedSnafu);
    }

    let player_result = executor.query(player_query).context(PlayerQuerySnafu)?;
    let reference = executor
        .query(&mission.reference_query)
        .context(ReferenceQuerySnafu { id: mission.id })?;

    let verdict = compare_results(&player_result, &reference, &mission.evaluation_options);
    info!(correct = verdict.is_correct(), rows = player_result.row_count(), "attempt evaluated");

    let feedback = match &verdict {
        Verdict::Correct => mission.success_message().to_string(),
        Verdict::Incorrect(mismatch) => mismatch.to_string(),
    };

    Ok(Outcome {
        mission_id: mission.id,
        verdict,
        player_result,
        feedback,
        hint: mission.hint.clone(),
    })
}

/// Runs an attempt in a fresh in-memory database prepared by the mission's
/// setup script.
pub fn play(mission: &Mission, player_query: &str) -> Result<Outcome> {
    info!(mission = mission.id, "preparing mission database");

    let sandbox = SqliteSandbox::open().context(SetupSnafu)?;
    sandbox
        .execute_script(&mission.setup_sql)
        .context(SetupSnafu)?;

    evaluate(mission, &sandbox, player_query)
}

#[cfg(test)]
mod test {
    use {
        super::*,
        crate::Error,
        def::Value,
        evaluator::EvaluationOptions,
        std::cell::RefCell,
    };

    /// Replays canned results and records what it was asked to run.
    struct Scripted {
        player: ResultSet,
        reference: ResultSet,
        reference_query: String,
        seen: RefCell<Vec<String>>,
    }

    impl QueryExecutor for Scripted {
        fn execute_script(&self, _statements: &[String]) -> sandbox::Result<()> {
            Ok(())
        }

        fn query(&self, sql: &str) -> sandbox::Result<ResultSet> {
            self.seen.borrow_mut().push(sql.to_string());

            Ok(if sql == self.reference_query {
                self.reference.clone()
            } else {
                self.player.clone()
            })
        }
    }

    fn mission() -> Mission {
        Mission {
            id: 9,
            title: "Roll call".to_string(),
            subject: String::new(),
            briefing: String::new(),
            setup_sql: vec![],
            reference_query: "SELECT id FROM agents".to_string(),
            evaluation_options: EvaluationOptions {
                order_matters: false,
                ..EvaluationOptions::STRICT
            },
            hint: Some("count the agents".to_string()),
            success_message: None,
            finding: None,
            allow_restricted_keywords: false,
        }
    }

    fn ids(ids: &[i64]) -> ResultSet {
        ResultSet::new(
            vec!["id".to_string()],
            ids.iter().map(|&id| vec![Value::Integer(id)]).collect(),
        )
    }

    fn scripted(player: ResultSet) -> Scripted {
        Scripted {
            player,
            reference: ids(&[1, 2]),
            reference_query: mission().reference_query,
            seen: RefCell::new(vec![]),
        }
    }

    #[test]
    fn correct_attempt_uses_success_message() {
        let executor = scripted(ids(&[2, 1]));

        let outcome = evaluate(&mission(), &executor, "SELECT id FROM agents ORDER BY id DESC")
            .unwrap();

        assert!(outcome.is_correct());
        assert_eq!(outcome.feedback(), crate::DEFAULT_SUCCESS_MESSAGE);
        assert_eq!(outcome.hint(), None);
        assert_eq!(outcome.mission_id, 9);
        assert_eq!(
            *executor.seen.borrow(),
            vec!["SELECT id FROM agents ORDER BY id DESC", "SELECT id FROM agents"]
        );
    }

    #[test]
    fn incorrect_attempt_explains_and_hints() {
        let executor = scripted(ids(&[1]));

        let outcome = evaluate(&mission(), &executor, "SELECT id FROM agents LIMIT 1").unwrap();

        assert!(!outcome.is_correct());
        assert_eq!(
            outcome.feedback(),
            "The number of rows does not match. Expected: 2, found: 1"
        );
        assert_eq!(outcome.hint(), Some("count the agents"));
        assert_eq!(outcome.player_result, ids(&[1]));
    }

    #[test]
    fn rejected_query_never_runs() {
        let executor = scripted(ids(&[]));

        let err = evaluate(&mission(), &executor, "DELETE FROM agents").unwrap_err();

        assert!(matches!(
            err,
            Error::Rejected {
                source: guard::Error::NotSelect
            }
        ));
        assert!(executor.seen.borrow().is_empty());
    }

    #[test]
    fn negative_zero_matches_zero() {
        let mission = Mission {
            setup_sql: vec![
                "CREATE TABLE readings (x REAL)".to_string(),
                "INSERT INTO readings VALUES (0.0), (1.5)".to_string(),
            ],
            reference_query: "SELECT x AS v FROM readings".to_string(),
            evaluation_options: EvaluationOptions::STRICT,
            ..mission()
        };

        let outcome = play(&mission, "SELECT x * -1.0 AS v FROM readings").unwrap();
        assert_eq!(
            outcome.feedback(),
            "Incorrect data in row 2 (row order matters). Expected: (1.5), found: (-1.5)"
        );

        let outcome = play(&mission, "SELECT -0.0 AS v UNION ALL SELECT 1.5").unwrap();
        assert!(outcome.is_correct(), "{}", outcome.feedback());

        let mission = Mission {
            evaluation_options: EvaluationOptions {
                order_matters: false,
                ..EvaluationOptions::STRICT
            },
            ..mission
        };
        let outcome = play(&mission, "SELECT 1.5 AS v UNION ALL SELECT x * -1.0 FROM readings WHERE x = 0")
            .unwrap();
        assert!(outcome.is_correct(), "{}", outcome.feedback());
    }
}
