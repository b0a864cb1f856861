use super::*;
use clap::Parser;

#[test]
fn web_defaults_to_loopback_port() {
    let cli = Cli::try_parse_from(["catalogue", "web"]).expect("parse");
    match cli.command {
        Commands::Web(WebArgs { host, port }) => {
            assert_eq!(host, "127.0.0.1");
            assert_eq!(port, 8787);
        }
        _ => panic!("expected web command"),
    }
    assert!(cli.root.is_none());
}

#[test]
fn root_is_accepted_after_the_subcommand() {
    let cli = Cli::try_parse_from(["catalogue", "stats", "--root", "/srv/data"]).expect("parse");
    assert_eq!(cli.root, Some(PathBuf::from("/srv/data")));
    assert!(matches!(cli.command, Commands::Stats));
}

#[test]
fn thinker_parses_metadata_only_flag() {
    let cli = Cli::try_parse_from([
        "catalogue",
        "thinker",
        "First International",
        "Karl Marx",
        "--metadata-only",
    ])
    .expect("parse");
    match cli.command {
        Commands::Thinker(ThinkerArgs {
            category,
            name,
            metadata_only,
        }) => {
            assert_eq!(category, "First International");
            assert_eq!(name, "Karl Marx");
            assert!(metadata_only);
        }
        _ => panic!("expected thinker command"),
    }
}

#[test]
fn search_accepts_query_and_category() {
    let cli = Cli::try_parse_from(["catalogue", "search", "-q", "marx", "--category", "anarchists"])
        .expect("parse");
    match cli.command {
        Commands::Search(SearchArgs { query, category }) => {
            assert_eq!(query.as_deref(), Some("marx"));
            assert_eq!(category.as_deref(), Some("anarchists"));
        }
        _ => panic!("expected search command"),
    }
}

#[test]
fn subject_requires_three_positionals() {
    assert!(Cli::try_parse_from(["catalogue", "subject", "anarchists", "Bakunin"]).is_err());
    assert!(
        Cli::try_parse_from(["catalogue", "subject", "anarchists", "Bakunin", "Letters"]).is_ok()
    );
}
