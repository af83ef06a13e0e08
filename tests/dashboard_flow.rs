//! End-to-end flows through the public event API: load, classify, search and
//! inspect profiles the way the plugin shim drives them.

use profiledeck::app::{LoadStatus, Section};
use profiledeck::ui::components::detail_bounds;
use profiledeck::ui::RosterLine;
use profiledeck::{handle_event, initialize, Action, AppState, Config, Event};

const BODY: &str = r#"{
    "results": [
        {"login":{"uuid":"u1"},"name":{"title":"Ms","first":"Ana","last":"Lopez"},
         "email":"ana@example.com","phone":"1","cell":"2","gender":"female",
         "dob":{"age":30},"location":{"street":{"number":1,"name":"Main"},
         "city":"Lyon","state":"Rhône","country":"France","postcode":69001},
         "picture":{"large":"https://example.com/a.jpg"},"nat":"FR"},
        {"login":{"uuid":"u2"},"name":{"title":"Mr","first":"Juan","last":"Perez"},
         "email":"juan@example.com","phone":"3","cell":"4","gender":"male",
         "dob":{"age":41},"location":{"street":{"number":2,"name":"Calle"},
         "city":"Madrid","state":"Madrid","country":"Spain","postcode":"28001"},
         "picture":{"large":"https://example.com/j.jpg"},"nat":"ES"},
        {"login":{"uuid":"u3"},"name":{"title":"Mrs","first":"Mia","last":"Chen"},
         "email":"mia@example.com","phone":"5","cell":"6","gender":"female",
         "dob":{"age":27},"location":{"street":{"number":3,"name":"Queen St"},
         "city":"Auckland","state":"Auckland","country":"New Zealand","postcode":"1010"},
         "picture":{"large":"https://example.com/m.jpg"}}
    ],
    "info": {"seed": "abc", "results": 3}
}"#;

fn send(state: &mut AppState, event: Event) -> (bool, Vec<Action>) {
    handle_event(state, &event).unwrap()
}

fn loaded() -> AppState {
    let mut state = initialize(&Config::default());
    send(&mut state, Event::PermissionGranted);
    send(
        &mut state,
        Event::ProfilesFetched {
            status: 200,
            body: BODY.as_bytes().to_vec(),
        },
    );
    send(&mut state, Event::Resize { rows: 30, cols: 100 });
    state
}

fn ids(state: &AppState, section: Section) -> Vec<&str> {
    state
        .views
        .section(section)
        .iter()
        .map(|p| p.id.as_str())
        .collect()
}

#[test]
fn startup_requests_configured_batch_once() {
    let mut map = std::collections::BTreeMap::new();
    map.insert("results".to_string(), "40".to_string());
    let mut state = initialize(&Config::from_zellij(&map));

    let vm = state.compute_viewmodel(24, 80);
    let empty = vm.empty_state.unwrap();
    assert_eq!(empty.message, "Loading users...");
    assert_eq!(empty.subtitle, "Requesting 40 profiles");

    let (_, actions) = send(&mut state, Event::PermissionGranted);
    let [Action::FetchProfiles { url }] = actions.as_slice() else {
        panic!("expected a single fetch, got {actions:?}");
    };
    assert!(url.contains("results=40"));

    let (_, again) = send(&mut state, Event::PermissionGranted);
    assert!(again.is_empty());
}

#[test]
fn loaded_profiles_land_in_regular_list_in_fetch_order() {
    let state = loaded();

    assert_eq!(ids(&state, Section::Regular), ["u1", "u2", "u3"]);
    assert!(state.views.favorites.is_empty());
    assert!(state.views.blocked.is_empty());
    assert_eq!(state.cursor.as_deref(), Some("u1"));
    assert!(matches!(state.store.status(), LoadStatus::Loaded { .. }));
}

#[test]
fn numeric_and_text_postcodes_both_decode() {
    let state = loaded();

    assert_eq!(state.store.get("u1").unwrap().address.postcode, "69001");
    assert_eq!(state.store.get("u2").unwrap().address.postcode, "28001");
    assert_eq!(state.store.get("u3").unwrap().nationality, None);
}

#[test]
fn favorite_toggle_moves_profile_between_lists() {
    let mut state = loaded();

    send(&mut state, Event::ToggleFavorite);
    assert_eq!(ids(&state, Section::Favorites), ["u1"]);
    assert_eq!(ids(&state, Section::Regular), ["u2", "u3"]);
    assert_eq!(state.cursor.as_deref(), Some("u1"));

    send(&mut state, Event::ToggleFavorite);
    assert!(state.views.favorites.is_empty());
    assert_eq!(ids(&state, Section::Regular), ["u1", "u2", "u3"]);
}

#[test]
fn blocking_drops_favorite_and_unblocking_does_not_restore_it() {
    let mut state = loaded();

    send(&mut state, Event::ToggleFavorite);
    send(&mut state, Event::Block);
    assert_eq!(ids(&state, Section::Blocked), ["u1"]);
    assert!(state.views.favorites.is_empty());
    assert!(!state.classification.is_favorite("u1"));

    let (render, _) = send(&mut state, Event::ToggleFavorite);
    assert!(!render);
    assert!(!state.classification.is_favorite("u1"));

    send(&mut state, Event::Unblock);
    assert!(state.views.blocked.is_empty());
    assert!(state.views.favorites.is_empty());
    assert_eq!(ids(&state, Section::Regular), ["u1", "u2", "u3"]);
}

#[test]
fn cursor_falls_back_when_its_profile_leaves_the_filter() {
    let mut state = loaded();
    send(&mut state, Event::KeyDown);
    assert_eq!(state.cursor.as_deref(), Some("u2"));

    send(&mut state, Event::SearchMode);
    for c in "mia".chars() {
        send(&mut state, Event::Char(c));
    }
    assert_eq!(ids(&state, Section::Regular), ["u3"]);
    assert_eq!(state.cursor.as_deref(), Some("u3"));
}

#[test]
fn search_filters_only_the_regular_list() {
    let mut state = loaded();
    send(&mut state, Event::ToggleFavorite);
    send(&mut state, Event::KeyDown);
    send(&mut state, Event::KeyDown);
    send(&mut state, Event::Block);
    assert_eq!(ids(&state, Section::Blocked), ["u3"]);

    send(&mut state, Event::SearchMode);
    for c in "JUAN".chars() {
        send(&mut state, Event::Char(c));
    }
    assert_eq!(ids(&state, Section::Regular), ["u2"]);
    assert_eq!(ids(&state, Section::Favorites), ["u1"]);
    assert_eq!(ids(&state, Section::Blocked), ["u3"]);

    send(&mut state, Event::Char('x'));
    assert!(state.views.regular.is_empty());
    let vm = state.compute_viewmodel(30, 100);
    assert!(vm
        .lines
        .iter()
        .any(|line| matches!(line, RosterLine::Notice(text) if text == "No users match that name")));

    send(&mut state, Event::ExitSearch);
    assert!(state.search_query.is_empty());
    assert_eq!(ids(&state, Section::Regular), ["u2"]);
}

#[test]
fn detail_overlay_opens_blocks_keys_and_dismisses() {
    let mut state = loaded();

    send(&mut state, Event::ShowDetails);
    assert_eq!(state.selection.current().map(|p| p.id.as_str()), Some("u1"));

    let (render, _) = send(&mut state, Event::KeyDown);
    assert!(!render);
    assert_eq!(state.cursor.as_deref(), Some("u1"));

    let card = state.compute_viewmodel(30, 100).detail.unwrap();
    assert_eq!(card.name, "Ms Ana Lopez");
    assert!(card.fields.iter().any(|(label, value)| *label == "Nationality" && value == "FR"));

    send(&mut state, Event::Dismiss);
    assert!(!state.selection.is_active());

    send(&mut state, Event::KeyDown);
    send(&mut state, Event::ShowDetails);
    assert_eq!(state.selection.current().map(|p| p.id.as_str()), Some("u2"));
}

#[test]
fn clicks_close_the_overlay_only_outside_the_box() {
    let mut state = loaded();
    send(&mut state, Event::ShowDetails);

    let bounds = detail_bounds(30, 100);
    let (render, _) = send(
        &mut state,
        Event::Click {
            row: bounds.top + 1,
            col: bounds.left + 1,
        },
    );
    assert!(!render);
    assert!(state.selection.is_active());

    send(&mut state, Event::Click { row: 1, col: 1 });
    assert!(!state.selection.is_active());
}

#[test]
fn failed_fetch_resolves_to_empty_dashboard() {
    for (status, body) in [(503, b"unavailable".to_vec()), (200, b"{not json".to_vec())] {
        let mut state = initialize(&Config::default());
        send(&mut state, Event::PermissionGranted);
        let (render, _) = send(&mut state, Event::ProfilesFetched { status, body });

        assert!(render);
        assert!(matches!(state.store.status(), LoadStatus::Failed { .. }));
        assert!(state.views.is_empty());
        assert_eq!(state.cursor, None);
        assert!(state.compute_viewmodel(24, 80).empty_state.is_none());
    }
}

#[test]
fn second_fetch_completion_is_ignored() {
    let mut state = loaded();
    send(&mut state, Event::ToggleFavorite);

    let (render, _) = send(
        &mut state,
        Event::ProfilesFetched {
            status: 200,
            body: br#"{"results":[]}"#.to_vec(),
        },
    );
    assert!(!render);
    assert_eq!(state.store.profiles().len(), 3);
    assert_eq!(ids(&state, Section::Favorites), ["u1"]);
}

#[test]
fn close_focus_hides_plugin_even_with_overlay_open() {
    let mut state = loaded();
    send(&mut state, Event::ShowDetails);

    let (_, actions) = send(&mut state, Event::CloseFocus);
    assert_eq!(actions, vec![Action::CloseFocus]);
}
