use storefinder_locator::LocatorEvent;

use super::*;

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["storefinder"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
    assert!(cli.dataset.is_none());
}

#[test]
fn parses_states_command() {
    let cli = Cli::try_parse_from(["storefinder", "states"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Some(Commands::States)));
}

#[test]
fn cities_requires_a_state() {
    assert!(Cli::try_parse_from(["storefinder", "cities"]).is_err());

    let cli = Cli::try_parse_from(["storefinder", "cities", "Maharashtra"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Cities { ref state }) if state == "Maharashtra"
    ));
}

#[test]
fn stores_without_filters_keeps_defaults() {
    let cli = Cli::try_parse_from(["storefinder", "stores"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Stores {
            selection: SelectionArgs {
                state: None,
                city: None
            },
            json: false
        })
    ));
}

#[test]
fn stores_with_empty_state_means_all_states() {
    let cli = Cli::try_parse_from(["storefinder", "stores", "--state", "", "--json"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Stores {
            selection: SelectionArgs {
                state: Some(ref s),
                city: None
            },
            json: true
        }) if s.is_empty()
    ));
}

#[test]
fn dataset_flag_is_global() {
    let cli = Cli::try_parse_from([
        "storefinder",
        "frame",
        "--state",
        "Delhi",
        "--dataset",
        "/tmp/stores.json",
    ])
    .unwrap();
    assert_eq!(cli.dataset, Some(PathBuf::from("/tmp/stores.json")));
    assert!(matches!(cli.command, Some(Commands::Frame { .. })));
}

#[test]
fn browse_with_focus() {
    let cli = Cli::try_parse_from([
        "storefinder",
        "browse",
        "--state",
        "Maharashtra",
        "--city",
        "Pune",
        "--focus",
        "C",
    ])
    .unwrap();
    let Some(Commands::Browse { selection, focus }) = cli.command else {
        panic!("expected browse");
    };
    assert_eq!(focus.as_deref(), Some("C"));
    assert_eq!(
        browse::session_events(&selection, focus.as_deref()),
        [
            LocatorEvent::MapReady,
            LocatorEvent::SelectState("Maharashtra".to_string()),
            LocatorEvent::SelectCity("Pune".to_string()),
            LocatorEvent::MarkerClicked("C".to_string()),
        ]
    );
}

#[test]
fn browse_without_picks_only_signals_ready() {
    assert_eq!(
        browse::session_events(&SelectionArgs::default(), None),
        [LocatorEvent::MapReady]
    );
}

#[test]
fn truncate_long_names() {
    assert_eq!(listing::truncate("Pune", 10), "Pune");
    assert_eq!(listing::truncate("Connaught Place", 9), "Connaught...");
}
