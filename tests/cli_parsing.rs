use clap::Parser;
use toae_directory::cli::{Cli, Commands};

#[test]
fn test_parse_namespaces() {
    let cli = Cli::try_parse_from(["toae-directory", "namespaces"]).unwrap();
    assert!(!cli.json);
    assert!(matches!(cli.command, Commands::Namespaces(_)));
}

#[test]
fn test_parse_show_defaults_to_default_namespace() {
    let cli = Cli::try_parse_from(["toae-directory", "show"]).unwrap();

    match cli.command {
        Commands::Show(args) => {
            assert_eq!(args.namespace, "default");
            assert!(!args.global);
        }
        _ => panic!("Wrong top-level command"),
    }
}

#[test]
fn test_parse_show_namespace_with_json() {
    let cli = Cli::try_parse_from(["toae-directory", "show", "acme", "--json"]).unwrap();
    assert!(cli.json);

    match cli.command {
        Commands::Show(args) => assert_eq!(args.namespace, "acme"),
        _ => panic!("Wrong top-level command"),
    }
}

#[test]
fn test_parse_show_global() {
    let cli = Cli::try_parse_from(["toae-directory", "--json", "show", "--global"]).unwrap();

    match cli.command {
        Commands::Show(args) => assert!(args.global),
        _ => panic!("Wrong top-level command"),
    }
}

#[test]
fn test_show_global_conflicts_with_namespace() {
    let result = Cli::try_parse_from(["toae-directory", "show", "acme", "--global"]);
    assert!(result.is_err());
}

#[test]
fn test_parse_resolve_requires_identity() {
    assert!(Cli::try_parse_from(["toae-directory", "resolve"]).is_err());

    let cli = Cli::try_parse_from(["toae-directory", "resolve", "ops@example.com"]).unwrap();
    match cli.command {
        Commands::Resolve(args) => assert_eq!(args.identity, "ops@example.com"),
        _ => panic!("Wrong top-level command"),
    }
}

#[test]
fn test_parse_mode() {
    let cli = Cli::try_parse_from(["toae-directory", "mode"]).unwrap();
    assert!(matches!(cli.command, Commands::Mode(_)));
}

#[test]
fn test_cli_definition_is_consistent() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
}
