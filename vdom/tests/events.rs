use std::sync::{Arc, Mutex};

use vdom::{Element, Event, EventKind, Key, Modifiers};

// ============================================================================
// Dispatch
// ============================================================================

#[test]
fn test_dispatch_runs_only_matching_kind() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let (a, b) = (log.clone(), log.clone());
    let el = Element::button()
        .on(EventKind::Click, move |_| a.lock().unwrap().push("click"))
        .on(EventKind::Focus, move |_| b.lock().unwrap().push("focus"));

    el.dispatch(Event::click());
    assert_eq!(*log.lock().unwrap(), vec!["click"]);
}

#[test]
fn test_dispatch_runs_handlers_in_binding_order() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let (a, b) = (log.clone(), log.clone());
    let el = Element::li()
        .on(EventKind::Click, move |_| a.lock().unwrap().push(1))
        .on(EventKind::Click, move |_| b.lock().unwrap().push(2));

    el.dispatch(Event::click());
    assert_eq!(*log.lock().unwrap(), vec![1, 2]);
}

#[test]
fn test_prevent_default_is_reported() {
    let el = Element::button().on(EventKind::MouseDown, |cx| cx.prevent_default());
    assert!(el.dispatch(Event::mouse_down()).default_prevented());
    assert!(!el.dispatch(Event::click()).default_prevented());
}

#[test]
fn test_dispatch_does_not_bubble() {
    let hit = Arc::new(Mutex::new(false));
    let flag = hit.clone();
    let parent = Element::button()
        .on(EventKind::Click, move |_| *flag.lock().unwrap() = true)
        .child(Element::span());

    parent.children_slice()[0].dispatch(Event::click());
    assert!(!*hit.lock().unwrap());
}

#[test]
fn test_input_value_reaches_handler() {
    let seen = Arc::new(Mutex::new(String::new()));
    let sink = seen.clone();
    let el = Element::input().on(EventKind::Input, move |cx| {
        *sink.lock().unwrap() = cx.value().unwrap_or_default().to_string();
    });

    el.dispatch(Event::input("abc"));
    assert_eq!(*seen.lock().unwrap(), "abc");
}

// ============================================================================
// Keys
// ============================================================================

#[test]
fn test_key_codes_map_once() {
    assert_eq!(Key::from_key_code(40), Key::Down);
    assert_eq!(Key::from_key_code(38), Key::Up);
    assert_eq!(Key::from_key_code(13), Key::Enter);
    assert_eq!(Key::from_key_code(27), Key::Escape);
    assert_eq!(Key::from_key_code(65), Key::Char('a'));
    assert_eq!(Key::from_key_code(113), Key::F(2));
    assert_eq!(Key::from_key_code(250), Key::Unidentified);
}

#[test]
fn test_crossterm_key_event_converts() {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    let ev: Event = KeyEvent::new(KeyCode::Down, KeyModifiers::SHIFT).into();
    assert_eq!(
        ev,
        Event::Key {
            key: Key::Down,
            modifiers: Modifiers::shift(),
        }
    );
    assert_eq!(ev.kind(), EventKind::KeyDown);

    let mods: Modifiers = (KeyModifiers::CONTROL | KeyModifiers::ALT).into();
    assert!(mods.ctrl && mods.alt && !mods.shift);
    assert!(!mods.is_empty());
    assert!(Modifiers::from(KeyModifiers::NONE).is_empty());
}
