use mdi_picker::catalog::{tokenize, LoadedCatalog};
use mdi_picker::loader::LoaderResponse;
use mdi_picker::{handle_event, initialize, Config, EmptyQueryMode, Event, Icon, PickerState};
use std::sync::Arc;

fn icon(id: &str, name: &str, aliases: &[&str], tags: &[&str]) -> Icon {
    Icon {
        id: id.to_string(),
        name: name.to_string(),
        codepoint: "F0001".to_string(),
        aliases: aliases.iter().map(|s| (*s).to_string()).collect(),
        tags: tags.iter().map(|s| (*s).to_string()).collect(),
        author: "Test".to_string(),
        version: "1.0.0".to_string(),
    }
}

fn sample_icons() -> Vec<Icon> {
    vec![
        icon("a", "account", &["user", "person"], &["Account / User"]),
        icon("b", "account-alert", &["user-alert"], &["Account / User", "Alert / Error"]),
        icon("c", "bell", &["notification"], &["Notification"]),
        icon("d", "bell-ring", &["notification-active"], &["Notification"]),
        icon("e", "alarm", &["clock"], &["Date / Time", "Alert / Error"]),
        icon("f", "home-account", &["house-user"], &["Home Automation"]),
    ]
}

fn picker(config: &Config, icons: Vec<Icon>) -> PickerState {
    let (mut state, _) = initialize(config);
    let loaded = Event::Loader(LoaderResponse::CatalogLoaded {
        catalog: Arc::new(LoadedCatalog::build(icons)),
    });
    handle_event(&mut state, &loaded).expect("load");
    state
}

fn search(state: &mut PickerState, query: &str) -> Vec<Icon> {
    let event = Event::Search {
        query: query.to_string(),
    };
    handle_event(state, &event).expect("search");
    state.results.clone()
}

fn ids(icons: &[Icon]) -> Vec<&str> {
    icons.iter().map(|i| i.id.as_str()).collect()
}

#[test]
fn every_result_has_a_token_starting_with_each_query_term() {
    let mut state = picker(&Config::default(), sample_icons());

    for query in ["acc", "ACC", "user", "bell r", "not", "alert", "h", "clock", "Time"] {
        let terms = tokenize(query);
        for found in search(&mut state, query) {
            let tokens: Vec<String> = std::iter::once(found.name.as_str())
                .chain(found.aliases.iter().map(String::as_str))
                .chain(found.tags.iter().map(String::as_str))
                .flat_map(tokenize)
                .collect();
            for term in &terms {
                assert!(
                    tokens.iter().any(|t| t.starts_with(term.as_str())),
                    "{} returned for {query:?} without a token starting with {term:?}",
                    found.id
                );
            }
        }
    }
}

#[test]
fn three_icon_catalog_examples() {
    let mut state = picker(
        &Config::default(),
        vec![
            icon("a", "account", &[], &[]),
            icon("b", "account-alert", &[], &[]),
            icon("c", "bell", &[], &[]),
        ],
    );

    let found = search(&mut state, "acc");
    let mut acc = ids(&found);
    acc.sort_unstable();
    assert_eq!(acc, vec!["a", "b"]);
    assert_eq!(ids(&search(&mut state, "bel")), vec!["c"]);
    assert!(search(&mut state, "zzz").is_empty());
}

#[test]
fn blank_query_returns_none_or_everything() {
    let icons = sample_icons();

    let mut none = picker(&Config::default(), icons.clone());
    assert!(search(&mut none, "").is_empty());
    assert!(search(&mut none, "   ").is_empty());

    let config = Config {
        empty_query: EmptyQueryMode::AllIcons,
        result_cap: None,
        ..Config::default()
    };
    let mut all = picker(&config, icons.clone());
    assert_eq!(search(&mut all, ""), icons);
    assert_eq!(search(&mut all, "\t"), icons);
}

#[test]
fn results_never_exceed_the_cap() {
    let many: Vec<Icon> = (0..250)
        .map(|i| icon(&format!("id-{i}"), &format!("alpha-{i}"), &[], &[]))
        .collect();

    let mut capped = picker(&Config::default(), many.clone());
    assert_eq!(search(&mut capped, "alpha").len(), 100);

    let config = Config {
        result_cap: Some(7),
        empty_query: EmptyQueryMode::AllIcons,
        ..Config::default()
    };
    let mut small = picker(&config, many.clone());
    assert_eq!(search(&mut small, "alp").len(), 7);
    assert_eq!(search(&mut small, "").len(), 250, "blank query is never partial");

    let uncapped = Config {
        result_cap: None,
        ..Config::default()
    };
    let mut all = picker(&uncapped, many);
    assert_eq!(search(&mut all, "alpha").len(), 250);
}

#[test]
fn selection_reads_back_the_selected_icon() {
    let mut state = picker(&Config::default(), sample_icons());
    let chosen = search(&mut state, "bell ring").remove(0);

    let select = Event::Select {
        icon: chosen.clone(),
    };
    handle_event(&mut state, &select).expect("select");

    assert_eq!(state.selected.as_ref().map(|i| i.id.as_str()), Some(chosen.id.as_str()));
    let view = state.compute_viewmodel();
    assert_eq!(view.trigger.selected_name.as_deref(), Some("bell-ring"));
    assert_eq!(view.trigger.selected_class.as_deref(), Some("mdi mdi-bell-ring"));
}

#[test]
fn search_before_load_returns_configured_default() {
    let (mut state, _) = initialize(&Config::default());
    assert!(search(&mut state, "acc").is_empty());

    let config = Config {
        empty_query: EmptyQueryMode::AllIcons,
        ..Config::default()
    };
    let (mut state, _) = initialize(&config);
    assert!(search(&mut state, "").is_empty());
    assert_eq!(
        state.compute_viewmodel().empty_state.map(|e| e.message),
        Some("Loading icons".to_string())
    );
}
