//! Property-based tests for the list state and response decoding.
//!
//! Rows must appear in exactly the order the API returned them, and the
//! cursor must stay inside the collection whatever the user presses.

use crossterm::event::{KeyCode, KeyEvent};
use proptest::prelude::*;
use userdeck::client::decode_users;
use userdeck::tui::{ListNavigation, LoadState, UserListState};
use userdeck::UserRecord;

fn record(id: u64, name: &str) -> UserRecord {
    UserRecord {
        id,
        first_name: name.to_string(),
        last_name: format!("L{id}"),
        email: format!("{id}@example.com"),
        username: format!("u{id}"),
        gender: "Female".to_string(),
        date_of_birth: "2001-02-03".to_string(),
        phone_number: id.to_string(),
        avatar: format!("https://a.example/{id}.png"),
    }
}

fn records() -> impl Strategy<Value = Vec<UserRecord>> {
    prop::collection::vec((any::<u64>(), "\\PC{0,12}"), 0..40).prop_map(|rows| {
        rows.into_iter()
            .map(|(id, name)| record(id, &name))
            .collect()
    })
}

fn nav_key() -> impl Strategy<Value = KeyCode> {
    prop_oneof![
        Just(KeyCode::Up),
        Just(KeyCode::Down),
        Just(KeyCode::PageUp),
        Just(KeyCode::PageDown),
        Just(KeyCode::Home),
        Just(KeyCode::End),
        Just(KeyCode::Char('j')),
        Just(KeyCode::Char('k')),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn settled_rows_keep_response_order(users in records()) {
        let mut list = UserListState::new("error");
        let ticket = list.load_users();
        list.settle(ticket.generation, Ok(users.clone()));

        prop_assert_eq!(list.visible_items(), users.as_slice());
        prop_assert_eq!(list.load_state(), &LoadState::Loaded(users));
    }

    #[test]
    fn decoded_rows_keep_body_order(users in records()) {
        let body = serde_json::to_string(&users).unwrap();
        let decoded = decode_users(&body).unwrap();
        let ids: Vec<u64> = decoded.iter().map(|u| u.id).collect();
        let expected: Vec<u64> = users.iter().map(|u| u.id).collect();
        prop_assert_eq!(ids, expected);
    }

    #[test]
    fn cursor_stays_in_bounds(
        users in records(),
        keys in prop::collection::vec(nav_key(), 0..60),
    ) {
        let mut list = UserListState::new("error");
        let ticket = list.load_users();
        list.settle(ticket.generation, Ok(users.clone()));

        for code in keys {
            list.handle_key(KeyEvent::from(code));
            if users.is_empty() {
                prop_assert_eq!(list.selected(), 0);
            } else {
                prop_assert!(list.selected() < users.len());
            }
        }
    }
}
