use {
    clap::{arg, Arg, ArgMatches, Command},
    evaluator::EvaluationOptions,
    sleuth::cmd::{self, Error as ExecutionError},
    snafu::prelude::*,
    std::{env, path::PathBuf, process},
    tracing_subscriber::EnvFilter,
};

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("the mission id must be a positive integer, found `{}`", id))]
    InvalidMissionId { id: String },

    #[snafu(display("{}", source))]
    ExecuteCommand {
        #[snafu(backtrace)]
        source: ExecutionError,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

const SLEUTH_MISSIONS: &str = "SLEUTH_MISSIONS";

const COMPARE: &str = "compare";
const MISSIONS: &str = "missions";
const PLAY: &str = "play";

fn missions_arg() -> Arg {
    arg!(-m --missions <PATH> "mission file, defaults to the built-in campaign")
}

fn cli() -> Command {
    let pkg_name = env!("CARGO_PKG_NAME");

    Command::new(pkg_name)
        .bin_name(pkg_name)
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .subcommand_required(true)
        .subcommand(
            Command::new(COMPARE)
                .about("compare a result set against a reference result set")
                .arg(arg!(<USER> "JSON result set to check"))
                .arg(arg!(<REFERENCE> "JSON result set holding the expected answer"))
                .arg(arg!(--"unordered-rows" "rows may come in any order"))
                .arg(arg!(--"unordered-columns" "columns may come in any order"))
                .arg(arg!(--"ignore-column-names" "compare columns by position only")),
        )
        .subcommand(
            Command::new(MISSIONS)
                .about("list the available missions")
                .arg(missions_arg()),
        )
        .subcommand(
            Command::new(PLAY)
                .about("submit a query for a mission")
                .arg(arg!(<ID> "mission id"))
                .arg(arg!(<QUERY> "SQL query"))
                .arg(missions_arg()),
        )
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    match try_main() {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(err) => {
            eprintln!("{}", err);
            process::exit(2);
        }
    }
}

/// Returns whether the submitted answer was correct.
fn try_main() -> Result<bool> {
    let matches = cli().get_matches();
    match matches.subcommand() {
        Some((COMPARE, sub_matches)) => {
            let options = EvaluationOptions {
                check_column_names: !sub_matches.get_flag("ignore-column-names"),
                column_order_matters: !sub_matches.get_flag("unordered-columns"),
                order_matters: !sub_matches.get_flag("unordered-rows"),
            };
            let user = path_arg(sub_matches, "USER");
            let reference = path_arg(sub_matches, "REFERENCE");

            let verdict =
                cmd::compare_files(&user, &reference, &options).context(ExecuteCommandSnafu)?;
            println!("{}", verdict);

            Ok(verdict.is_correct())
        }
        Some((MISSIONS, sub_matches)) => {
            let catalog = cmd::load_catalog(missions_path(sub_matches).as_deref())
                .context(ExecuteCommandSnafu)?;
            print!("{}", cmd::list_missions(&catalog));

            Ok(true)
        }
        Some((PLAY, sub_matches)) => {
            let id = sub_matches
                .get_one::<String>("ID")
                .map(String::as_str)
                .unwrap_or_default();
            let id = id
                .parse()
                .map_err(|_| Error::InvalidMissionId { id: id.to_string() })?;
            let query = sub_matches
                .get_one::<String>("QUERY")
                .map(String::as_str)
                .unwrap_or_default();

            let catalog = cmd::load_catalog(missions_path(sub_matches).as_deref())
                .context(ExecuteCommandSnafu)?;
            let outcome = cmd::play_mission(&catalog, id, query).context(ExecuteCommandSnafu)?;

            print!("{}", cmd::render_result_set(&outcome.player_result));
            println!();
            println!("{}", outcome.feedback());
            if let Some(hint) = outcome.hint() {
                println!("Hint: {}", hint);
            }

            Ok(outcome.is_correct())
        }
        _ => unreachable!(),
    }
}

fn path_arg(matches: &ArgMatches, name: &str) -> PathBuf {
    matches
        .get_one::<String>(name)
        .map(PathBuf::from)
        .unwrap_or_default()
}

fn missions_path(matches: &ArgMatches) -> Option<PathBuf> {
    matches
        .get_one::<String>("missions")
        .cloned()
        .or_else(|| env::var(SLEUTH_MISSIONS).ok())
        .map(PathBuf::from)
}
