use std::any::Any;
use std::env;
use std::path::PathBuf;

use clap::Arg;
use clap::ArgGroup;
use clap::ArgMatches;
use clap::Args;
use clap::Command;
use clap::FromArgMatches;
use clap::Parser;
use clap::Subcommand;
use clap::error::ErrorKind;

use crate::error::CliError;
use crate::fetch::client::ApiClient;
use crate::fetch::error::FetchError;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    #[command(flatten)]
    pub(crate) api: ApiArgs,

    /// Log debug output, including how every chart was resolved.
    #[arg(short, long, global = true)]
    pub(crate) verbose: bool,

    #[command(subcommand)]
    pub(crate) command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// List the workspaces of the analytics backend.
    Contexts,

    /// Open a session on a workspace and print the session id.
    Open {
        /// The id of the workspace.
        #[arg(short, long)]
        context: String,
    },

    /// Generate an HTML report of a session's dashboard.
    View(ViewArgs),

    /// Print how every chart of a dashboard payload is resolved.
    Resolve {
        /// Specify the JSON file that holds the dashboard payload.
        #[arg(short, long, value_parser(parse_file))]
        input: PathBuf,
    },

    /// Send a message to the assistant of a session and print the reply.
    Chat(ChatArgs),
}

#[derive(Args)]
pub(crate) struct ApiArgs {
    /// The base URL of the analytics backend, e.g. `http://localhost:8000`.
    #[arg(long, env = "OPSBOARD_API_BASE_URL", global = true)]
    pub(crate) api_base_url: Option<String>,

    /// The timeout of every backend request, in seconds.
    #[arg(long, env = "OPSBOARD_TIMEOUT_SECS", default_value_t = 30, global = true)]
    pub(crate) timeout_secs: u64,
}

impl ApiArgs {
    /// Creates a client for the configured backend.
    pub(crate) fn client(&self) -> Result<ApiClient, FetchError> {
        let Some(base_url) = self.api_base_url.as_deref() else {
            return Err(FetchError::InvalidBaseUrl(String::from(
                "no base URL given; use --api-base-url or OPSBOARD_API_BASE_URL",
            )));
        };

        ApiClient::new(base_url, self.timeout_secs)
    }
}

#[derive(Args)]
pub(crate) struct ViewArgs {
    #[command(flatten)]
    pub(crate) source: Source,

    /// Specify the path where the report will be created.
    /// If the output path is not specified then the current working
    /// directory is used.
    #[arg(short, long, value_parser(parse_path))]
    pub(crate) output_path: Option<PathBuf>,

    /// The title of the report page.
    #[arg(short, long)]
    pub(crate) title: Option<String>,

    /// Store the dashboard payload next to the report as `payload.json`.
    #[arg(long)]
    pub(crate) save_payload: bool,
}

/// Where the dashboard payload of a report comes from.
///
/// Exactly one of `--session`, `--context` and `--input` is accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Source {
    /// An open session.
    Session(String),
    /// A workspace to open a new session on.
    Context(String),
    /// A JSON file.
    Input(PathBuf),
}

impl Source {
    const GROUP: &'static str = "source";
    const SESSION: &'static str = "session";
    const CONTEXT: &'static str = "context";
    const INPUT: &'static str = "input";
}

impl FromArgMatches for Source {
    fn from_arg_matches(matches: &ArgMatches) -> Result<Self, clap::Error> {
        // Unknown ids read as absent.
        fn value<'a, T>(matches: &'a ArgMatches, id: &str) -> Option<&'a T>
        where
            T: Any + Clone + Send + Sync + 'static,
        {
            matches.try_get_one::<T>(id).ok().flatten()
        }

        if let Some(session_id) = value::<String>(matches, Self::SESSION) {
            return Ok(Source::Session(session_id.clone()));
        }

        if let Some(context_id) = value::<String>(matches, Self::CONTEXT) {
            return Ok(Source::Context(context_id.clone()));
        }

        match value::<PathBuf>(matches, Self::INPUT) {
            Some(input) => Ok(Source::Input(input.clone())),
            None => Err(clap::Error::raw(
                ErrorKind::MissingRequiredArgument,
                "one of --session, --context or --input is required\n",
            )),
        }
    }

    fn update_from_arg_matches(&mut self, matches: &ArgMatches) -> Result<(), clap::Error> {
        *self = Self::from_arg_matches(matches)?;
        Ok(())
    }
}

impl Args for Source {
    fn augment_args(cmd: Command) -> Command {
        cmd.arg(
            Arg::new(Self::SESSION)
                .short('s')
                .long(Self::SESSION)
                .value_name("SESSION")
                .help("Fetch the dashboard of an open session"),
        )
        .arg(
            Arg::new(Self::CONTEXT)
                .short('c')
                .long(Self::CONTEXT)
                .value_name("CONTEXT")
                .help("Open a new session on a workspace and fetch its dashboard"),
        )
        .arg(
            Arg::new(Self::INPUT)
                .short('i')
                .long(Self::INPUT)
                .value_name("INPUT")
                .value_parser(parse_file)
                .help("Read the dashboard payload from a JSON file instead of the backend"),
        )
        .group(
            ArgGroup::new(Self::GROUP)
                .required(true)
                .args([Self::SESSION, Self::CONTEXT, Self::INPUT]),
        )
    }

    fn augment_args_for_update(cmd: Command) -> Command {
        Self::augment_args(cmd)
    }
}

#[derive(Args)]
pub(crate) struct ChatArgs {
    /// The id of an open session.
    #[arg(short, long)]
    pub(crate) session: String,

    /// The message to send.
    pub(crate) message: String,
}

fn parse_path(path: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(path);

    if !path.exists() {
        return Err(format!("The `{}` path does not exist.", path.display()));
    }

    if !path.is_dir() {
        return Err(format!(
            "The `{}` path must point to a directory.",
            path.display()
        ));
    }

    Ok(path)
}

fn parse_file(path: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(path);

    if !path.is_file() {
        return Err(format!(
            "The `{}` path must point to an existing file.",
            path.display()
        ));
    }

    Ok(path)
}

pub(crate) trait PathExt {
    fn or_current_dir(self) -> Result<PathBuf, CliError>;
}

impl PathExt for Option<PathBuf> {
    fn or_current_dir(self) -> Result<PathBuf, CliError> {
        if let Some(path) = self {
            Ok(path)
        } else {
            env::current_dir().map_err(|e| CliError::Path(e.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use clap::CommandFactory;

    #[test]
    fn command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_chat() -> Result<(), clap::Error> {
        let cli = Cli::try_parse_from([
            "opsboard",
            "--api-base-url",
            "http://localhost:8000",
            "chat",
            "--session",
            "s-1",
            "Why is line 2 slow?",
        ])?;

        assert_eq!(cli.api.api_base_url.as_deref(), Some("http://localhost:8000"));
        assert!(!cli.verbose);

        let Commands::Chat(args) = cli.command else {
            panic!("expected the chat command");
        };
        assert_eq!(args.session, "s-1");
        assert_eq!(args.message, "Why is line 2 slow?");

        Ok(())
    }

    #[test]
    fn global_flags_follow_the_command() -> Result<(), clap::Error> {
        let cli = Cli::try_parse_from([
            "opsboard",
            "open",
            "--context",
            "7",
            "--timeout-secs",
            "5",
            "-v",
        ])?;

        assert_eq!(cli.api.timeout_secs, 5);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Open { ref context } if context == "7"));

        Ok(())
    }

    #[test]
    fn view_needs_exactly_one_source() {
        let missing = Cli::try_parse_from(["opsboard", "view"]);
        assert!(matches!(
            missing.map(|_| ()).map_err(|e| e.kind()),
            Err(ErrorKind::MissingRequiredArgument)
        ));

        let both = Cli::try_parse_from(["opsboard", "view", "--session", "s-1", "--context", "7"]);
        assert!(matches!(
            both.map(|_| ()).map_err(|e| e.kind()),
            Err(ErrorKind::ArgumentConflict)
        ));
    }

    #[test]
    fn view_source_from_flags() -> Result<(), clap::Error> {
        let source = |args: &[&str]| -> Result<Source, clap::Error> {
            let cli = Cli::try_parse_from(["opsboard", "view"].iter().chain(args))?;
            let Commands::View(args) = cli.command else {
                panic!("expected the view command");
            };
            Ok(args.source)
        };

        assert_eq!(source(&["-s", "s-1"])?, Source::Session(String::from("s-1")));
        assert_eq!(
            source(&["--context", "7", "--save-payload"])?,
            Source::Context(String::from("7"))
        );

        Ok(())
    }

    #[test]
    fn missing_source_is_a_usage_error() {
        let matches = ArgMatches::default();

        let error = Source::from_arg_matches(&matches).expect_err("no source given");
        assert_eq!(error.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn input_must_be_a_file() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let dir_path = dir.path().to_string_lossy().into_owned();

        assert!(parse_file(&dir_path).is_err());
        assert!(parse_path(&dir_path).is_ok());

        let file_path = dir.path().join("payload.json");
        std::fs::write(&file_path, "{}")?;

        assert_eq!(parse_file(&file_path.to_string_lossy())?, file_path);
        assert!(parse_path(&file_path.to_string_lossy()).is_err());

        Ok(())
    }

    #[test]
    fn client_needs_a_base_url() {
        let args = ApiArgs {
            api_base_url: None,
            timeout_secs: 30,
        };

        assert!(matches!(args.client(), Err(FetchError::InvalidBaseUrl(_))));
    }
}
