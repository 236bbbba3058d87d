//! End-to-end navigation through the reducer, as the TUI drives it.

use numera::core::action::{Action, Effect, update};
use numera::core::engine::{EngineError, Outcome};
use numera::core::nav::{NavAction, NavigationState, Page, transition};
use numera::core::state::App;
use numera::core::topic::TopicId;

fn navigate(app: &mut App, action: NavAction) -> Effect {
    update(app, Action::Navigate(action))
}

#[test]
fn every_topic_can_be_selected_from_the_menu() {
    for topic in TopicId::ALL {
        let next = transition(NavigationState::Menu, NavAction::SelectTopic(topic));
        assert_eq!(next, NavigationState::Definition(topic));
        assert_eq!(next.selected_topic(), Some(topic));
    }
}

#[test]
fn home_from_any_topic_page_clears_the_topic() {
    for topic in TopicId::ALL {
        for state in [
            NavigationState::Definition(topic),
            NavigationState::Execute(topic),
            NavigationState::Code(topic),
        ] {
            let next = transition(state, NavAction::Home);
            assert_eq!(next, NavigationState::Menu);
            assert_eq!(next.selected_topic(), None);
        }
    }
}

#[test]
fn full_session_through_every_page() {
    let mut app = App::new();
    assert_eq!(navigate(&mut app, NavAction::SelectTopic(TopicId::GcdLcm)), Effect::PageChanged);
    assert_eq!(navigate(&mut app, NavAction::ViewCode), Effect::PageChanged);
    assert_eq!(app.nav.page(), Page::Code);

    // Code → Execute is not a listed transition
    assert_eq!(navigate(&mut app, NavAction::Execute), Effect::None);
    assert_eq!(app.nav, NavigationState::Code(TopicId::GcdLcm));

    navigate(&mut app, NavAction::Home);
    navigate(&mut app, NavAction::SelectTopic(TopicId::GcdLcm));
    navigate(&mut app, NavAction::Execute);

    update(&mut app, Action::Submit("12, 18, 30".into()));
    assert_eq!(
        app.result,
        Some(Ok(Outcome::GcdLcm {
            operation: app.operation,
            values: vec![12, 18, 30],
            result: 6,
        }))
    );

    update(&mut app, Action::Submit("12".into()));
    assert!(matches!(
        app.result,
        Some(Err(EngineError::InvalidDomain { .. }))
    ));

    assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
}

#[test]
fn factorial_bound_surfaces_as_recursion_error() {
    let mut app = App::new();
    navigate(&mut app, NavAction::SelectTopic(TopicId::Recursion));
    navigate(&mut app, NavAction::Execute);

    update(&mut app, Action::Submit("20".into()));
    assert!(matches!(app.result, Some(Ok(Outcome::Factorial { n: 20, .. }))));

    update(&mut app, Action::Submit("21".into()));
    assert_eq!(
        app.result,
        Some(Err(EngineError::RecursionDepthExceeded {
            requested: 21,
            max: 20
        }))
    );
}
