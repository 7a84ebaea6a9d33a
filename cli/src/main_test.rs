use clap::CommandFactory;

use super::*;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("pmb-cli").chain(args.iter().copied())).unwrap()
}

#[test]
fn command_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn login_takes_email_and_password() {
    let cli = parse(&["login", "--email", "a@x.com", "--password", "secret1"]);
    assert!(matches!(cli.command, Command::Login { ref email, .. } if email == "a@x.com"));
}

#[test]
fn nested_subcommands_parse() {
    let cli = parse(&["intents", "create", "--tag", "biaya", "--pattern", "berapa?", "--pattern", "biaya?"]);
    match cli.command {
        Command::Intents(IntentsCommand { command: IntentsSubcommand::Create { tag, patterns, responses } }) => {
            assert_eq!(tag, "biaya");
            assert_eq!(patterns, ["berapa?", "biaya?"]);
            assert!(responses.is_empty());
        }
        other => panic!("unexpected command: {other:?}"),
    }

    let cli = parse(&["users", "delete", "7"]);
    assert!(matches!(cli.command, Command::Users(UsersCommand { command: UsersSubcommand::Delete { user_id: 7 } })));

    let cli = parse(&["training", "get", "3"]);
    assert!(matches!(
        cli.command,
        Command::Training(TrainingCommand { command: TrainingSubcommand::Get { run_id: 3 } })
    ));
}

#[test]
fn history_defaults_to_first_page() {
    let cli = parse(&["history"]);
    assert!(matches!(cli.command, Command::History { page: 0 }));
}

#[test]
fn explicit_token_file_overrides_default() {
    let cli = parse(&["--token-file", "/tmp/pmb-token", "logout"]);
    assert_eq!(cli.token_file, Some(PathBuf::from("/tmp/pmb-token")));
}

#[test]
fn intent_update_omits_untouched_fields() {
    let update = intent_update(None, Vec::new(), vec!["Halo!".to_owned(), "  ".to_owned()]);
    assert_eq!(update.tag, None);
    assert_eq!(update.patterns, None);
    assert_eq!(update.responses, Some(vec!["Halo!".to_owned()]));
}

#[test]
fn intent_update_trims_tag() {
    let update = intent_update(Some("  salam ".to_owned()), vec!["hai".to_owned()], Vec::new());
    assert_eq!(update.tag.as_deref(), Some("salam"));
    assert_eq!(update.patterns, Some(vec!["hai".to_owned()]));
}

#[test]
fn api_errors_surface_backend_detail() {
    let err = CliError::from(ApiError::Server { status: 401, detail: "Email atau password salah".to_owned() });
    assert_eq!(err.user_message(), "Email atau password salah");
    assert!(CliError::NotLoggedIn.user_message().contains("pmb-cli login"));
}
