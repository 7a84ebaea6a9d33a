//! `pmb-cli`: admin command line for the PMB chatbot API.
//!
//! Signs in through the same session store the dashboard uses, keeps the
//! bearer token in a file, and prints every response as pretty JSON.

mod http;
mod token_file;

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use reqwest::Method;
use serde::Serialize;
use session::{RegistrationForm, SessionError, SessionStore};
use wire::endpoints;
use wire::error::{ADD_ADMIN_FAILED, DELETE_FAILED, REQUEST_FAILED, RETRAIN_FAILED, SAVE_INTENT_FAILED};
use wire::{
    AdminCreate, ApiError, AssignRequest, ChatHistory, ChatReply, ChatRequest, Intent, IntentPayload,
    IntentSummary, IntentUpdate, MessageResponse, NewDataCandidate, RetrainResult, TrainingRunDetail,
    TrainingRunSummary, User,
};

use crate::http::{Api, ReqwestAuthBackend};
use crate::token_file::FileTokenStore;

type CliSession = SessionStore<ReqwestAuthBackend, FileTokenStore>;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("not logged in; run `pmb-cli login` first")]
    NotLoggedIn,
    #[error("no config directory on this platform; pass --token-file or set PMB_TOKEN_FILE")]
    NoTokenPath,
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error("invalid JSON output: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

impl CliError {
    fn user_message(&self) -> String {
        match self {
            Self::Api(err) => err.user_message(),
            Self::Session(err) => err.user_message(),
            other => other.to_string(),
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "pmb-cli", about = "PMB chatbot admin CLI")]
struct Cli {
    #[arg(long, env = "PMB_API_URL", default_value = "http://localhost:8000/api")]
    base_url: String,

    /// Where the bearer token is kept between invocations.
    #[arg(long, env = "PMB_TOKEN_FILE")]
    token_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sign in and store the token.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "PMB_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Forget the stored token.
    Logout,
    /// Show the signed-in account.
    Whoami,
    /// Create a visitor account.
    Register(RegisterArgs),
    /// Send one message to the chatbot.
    Chat { message: String },
    /// One page (zero-based) of the chat log.
    History {
        #[arg(long, default_value_t = 0)]
        page: u64,
    },
    /// Logged questions not yet used for training.
    NewData,
    /// Attach a logged question to an intent as a new pattern.
    Assign {
        #[arg(long)]
        log_id: i64,
        #[arg(long)]
        intent_id: i64,
        #[arg(long)]
        pattern: String,
    },
    Intents(IntentsCommand),
    Training(TrainingCommand),
    Users(UsersCommand),
}

#[derive(Args, Debug)]
struct RegisterArgs {
    #[arg(long)]
    name: String,
    #[arg(long)]
    email: String,
    #[arg(long, env = "PMB_PASSWORD", hide_env_values = true)]
    password: String,
    /// Defaults to `--password`.
    #[arg(long)]
    confirm_password: Option<String>,
    #[arg(long)]
    whatsapp: Option<String>,
}

#[derive(Args, Debug)]
struct IntentsCommand {
    #[command(subcommand)]
    command: IntentsSubcommand,
}

#[derive(Subcommand, Debug)]
enum IntentsSubcommand {
    List,
    Get {
        intent_id: i64,
    },
    Create {
        #[arg(long)]
        tag: String,
        #[arg(long = "pattern")]
        patterns: Vec<String>,
        #[arg(long = "response")]
        responses: Vec<String>,
    },
    /// Replace the tag and/or whole lists; omitted fields are left alone.
    Update {
        intent_id: i64,
        #[arg(long)]
        tag: Option<String>,
        #[arg(long = "pattern")]
        patterns: Vec<String>,
        #[arg(long = "response")]
        responses: Vec<String>,
    },
    Delete {
        intent_id: i64,
    },
    Retrain {
        #[arg(long)]
        epochs: Option<u32>,
    },
}

#[derive(Args, Debug)]
struct TrainingCommand {
    #[command(subcommand)]
    command: TrainingSubcommand,
}

#[derive(Subcommand, Debug)]
enum TrainingSubcommand {
    List,
    Get { run_id: i64 },
    Delete { run_id: i64 },
}

#[derive(Args, Debug)]
struct UsersCommand {
    #[command(subcommand)]
    command: UsersSubcommand,
}

#[derive(Subcommand, Debug)]
enum UsersSubcommand {
    Admins,
    Regular,
    CreateAdmin {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long, env = "PMB_PASSWORD", hide_env_values = true)]
        password: String,
    },
    Delete {
        user_id: i64,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    if let Err(err) = dotenvy::dotenv() {
        if !err.not_found() {
            eprintln!("warning: .env not loaded: {err}");
        }
    }
    init_tracing();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "command failed");
            eprintln!("error: {}", err.user_message());
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    if let Err(err) = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init() {
        eprintln!("warning: logging not initialized: {err}");
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let token_path = match cli.token_file {
        Some(path) => path,
        None => token_file::default_path().ok_or(CliError::NoTokenPath)?,
    };
    let api = Api::new(cli.base_url);
    tracing::debug!(base = api.base(), token_file = %token_path.display(), "starting");
    let mut store = SessionStore::new(ReqwestAuthBackend::new(api.clone()), FileTokenStore::new(token_path));

    match cli.command {
        Command::Login { email, password } => {
            let user = store.login(&email, &password).await?;
            print_json(&user)
        }
        Command::Logout => {
            store.logout()?;
            println!("logged out");
            Ok(())
        }
        Command::Whoami => {
            let user = signed_in(&mut store).await?;
            print_json(&user)
        }
        Command::Register(args) => {
            let form = RegistrationForm {
                full_name: args.name,
                email: args.email,
                confirm_password: args.confirm_password.unwrap_or_else(|| args.password.clone()),
                password: args.password,
                whatsapp: args.whatsapp.unwrap_or_default(),
            };
            let user = store.register_form(&form).await?;
            print_json(&user)
        }
        Command::Chat { message } => {
            let request = ChatRequest { message };
            let reply: ChatReply = api.request(Method::POST, endpoints::CHAT, None, Some(&request), REQUEST_FAILED).await?;
            print_json(&reply)
        }
        Command::History { page } => {
            let limit = endpoints::HISTORY_PAGE_SIZE;
            let history: ChatHistory = api.get(&endpoints::chat_history(limit, page * u64::from(limit)), None).await?;
            print_json(&history)
        }
        Command::NewData => {
            let items: Vec<NewDataCandidate> = api.get(endpoints::CHAT_NEW_DATA, None).await?;
            print_json(&items)
        }
        Command::Assign { log_id, intent_id, pattern } => {
            let request = AssignRequest { log_id, intent_id, pattern_text: pattern };
            let ack: MessageResponse =
                api.request(Method::POST, endpoints::CHAT_ASSIGN, None, Some(&request), REQUEST_FAILED).await?;
            print_json(&ack)
        }
        Command::Intents(intents) => run_intents(&api, intents.command).await,
        Command::Training(training) => run_training(&api, training.command).await,
        Command::Users(users) => {
            let user = signed_in(&mut store).await?;
            tracing::debug!(user_id = user.id, "users command as");
            let token = store.token().ok_or(CliError::NotLoggedIn)?.to_owned();
            run_users(&api, &token, users.command).await
        }
    }
}

/// Resolve the stored token into the signed-in user.
async fn signed_in(store: &mut CliSession) -> Result<User, CliError> {
    store.initialize().await;
    store.user().cloned().ok_or(CliError::NotLoggedIn)
}

async fn run_intents(api: &Api, command: IntentsSubcommand) -> Result<(), CliError> {
    match command {
        IntentsSubcommand::List => {
            let list: Vec<IntentSummary> = api.get(endpoints::INTENTS, None).await?;
            print_json(&list)
        }
        IntentsSubcommand::Get { intent_id } => {
            let intent: Intent = api.get(&endpoints::intent(intent_id), None).await?;
            print_json(&intent)
        }
        IntentsSubcommand::Create { tag, patterns, responses } => {
            let payload = IntentPayload::from_form(&tag, &patterns.join("\n"), &responses.join("\n"));
            let intent: Intent =
                api.request(Method::POST, endpoints::INTENTS, None, Some(&payload), SAVE_INTENT_FAILED).await?;
            print_json(&intent)
        }
        IntentsSubcommand::Update { intent_id, tag, patterns, responses } => {
            let update = intent_update(tag, patterns, responses);
            let intent: Intent = api
                .request(Method::PUT, &endpoints::intent(intent_id), None, Some(&update), SAVE_INTENT_FAILED)
                .await?;
            print_json(&intent)
        }
        IntentsSubcommand::Delete { intent_id } => {
            let ack: MessageResponse =
                api.request(Method::DELETE, &endpoints::intent(intent_id), None, None::<&()>, DELETE_FAILED).await?;
            print_json(&ack)
        }
        IntentsSubcommand::Retrain { epochs } => {
            let result: RetrainResult =
                api.request(Method::POST, &endpoints::retrain(epochs), None, None::<&()>, RETRAIN_FAILED).await?;
            print_json(&result)
        }
    }
}

/// Empty repeated flags mean "leave that list alone".
fn intent_update(tag: Option<String>, patterns: Vec<String>, responses: Vec<String>) -> IntentUpdate {
    let list = |items: Vec<String>| {
        let kept: Vec<String> =
            items.iter().map(|item| item.trim()).filter(|item| !item.is_empty()).map(str::to_owned).collect();
        (!kept.is_empty()).then_some(kept)
    };
    IntentUpdate {
        tag: tag.map(|t| t.trim().to_owned()).filter(|t| !t.is_empty()),
        patterns: list(patterns),
        responses: list(responses),
    }
}

async fn run_training(api: &Api, command: TrainingSubcommand) -> Result<(), CliError> {
    match command {
        TrainingSubcommand::List => {
            let runs: Vec<TrainingRunSummary> = api.get(endpoints::TRAINING_HISTORY, None).await?;
            print_json(&runs)
        }
        TrainingSubcommand::Get { run_id } => {
            let run: TrainingRunDetail = api.get(&endpoints::training_run(run_id), None).await?;
            print_json(&run)
        }
        TrainingSubcommand::Delete { run_id } => {
            let ack: MessageResponse = api
                .request(Method::DELETE, &endpoints::training_run(run_id), None, None::<&()>, DELETE_FAILED)
                .await?;
            print_json(&ack)
        }
    }
}

async fn run_users(api: &Api, token: &str, command: UsersSubcommand) -> Result<(), CliError> {
    match command {
        UsersSubcommand::Admins => {
            let admins: Vec<User> = api.get(endpoints::USERS_ADMINS, Some(token)).await?;
            print_json(&admins)
        }
        UsersSubcommand::Regular => {
            let users: Vec<User> = api.get(endpoints::USERS_REGULAR, Some(token)).await?;
            print_json(&users)
        }
        UsersSubcommand::CreateAdmin { name, email, password } => {
            let request = session::admin_request(&AdminCreate { full_name: name, email, password })
                .map_err(SessionError::from)?;
            let admin: User = api
                .request(Method::POST, endpoints::USERS_CREATE_ADMIN, Some(token), Some(&request), ADD_ADMIN_FAILED)
                .await?;
            print_json(&admin)
        }
        UsersSubcommand::Delete { user_id } => {
            let ack: MessageResponse = api
                .request(Method::DELETE, &endpoints::user(user_id), Some(token), None::<&()>, DELETE_FAILED)
                .await?;
            print_json(&ack)
        }
    }
}

fn print_json(value: &impl Serialize) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
