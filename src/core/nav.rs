//! # Navigation
//!
//! The page state machine. Every user choice becomes a `NavAction`, and
//! `transition()` maps the current state plus an action to the next state.
//! No side effects here; the TUI owns the state value and swaps it.
//!
//! ```text
//!            SelectTopic(t)            Execute
//!     Menu ─────────────────► Definition ───────► Execute
//!      ▲                        │    │               │
//!      │          Home          │    │ ViewCode      │ Home
//!      ├────────────────────────┘    ▼               │
//!      │◄──────────────────────── Code               │
//!      │           Home                              │
//!      └─────────────────────────────────────────────┘
//! ```
//!
//! Actions that are not listed for the current page leave the state as it is.

use log::debug;

use crate::core::topic::TopicId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Menu,
    Definition,
    Execute,
    Code,
}

impl Page {
    pub fn label(self) -> &'static str {
        match self {
            Page::Menu => "Menu",
            Page::Definition => "Definition",
            Page::Execute => "Execute",
            Page::Code => "Code",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    SelectTopic(TopicId),
    Execute,
    ViewCode,
    Home,
}

/// Where the user is. The topic is carried by the non-menu variants, so a
/// topic without a page (or a page without a topic) cannot be built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavigationState {
    #[default]
    Menu,
    Definition(TopicId),
    Execute(TopicId),
    Code(TopicId),
}

impl NavigationState {
    pub fn page(self) -> Page {
        match self {
            NavigationState::Menu => Page::Menu,
            NavigationState::Definition(_) => Page::Definition,
            NavigationState::Execute(_) => Page::Execute,
            NavigationState::Code(_) => Page::Code,
        }
    }

    /// `None` exactly when the page is the menu.
    pub fn selected_topic(self) -> Option<TopicId> {
        match self {
            NavigationState::Menu => None,
            NavigationState::Definition(t)
            | NavigationState::Execute(t)
            | NavigationState::Code(t) => Some(t),
        }
    }
}

/// Apply a navigation action.
pub fn transition(state: NavigationState, action: NavAction) -> NavigationState {
    use NavigationState::{Code, Definition, Execute, Menu};

    let next = match (state, action) {
        (Menu, NavAction::SelectTopic(topic)) => Definition(topic),
        (Definition(topic), NavAction::Execute) => Execute(topic),
        (Definition(topic), NavAction::ViewCode) => Code(topic),
        (Definition(_) | Execute(_) | Code(_), NavAction::Home) => Menu,
        (current, _) => {
            debug!("Ignoring {:?} on page {:?}", action, current.page());
            current
        }
    };

    if next != state {
        debug!("Navigation: {:?} --{:?}--> {:?}", state, action, next);
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_menu_without_topic() {
        let state = NavigationState::default();
        assert_eq!(state.page(), Page::Menu);
        assert_eq!(state.selected_topic(), None);
    }

    #[test]
    fn test_select_topic_opens_definition() {
        for topic in TopicId::ALL {
            let state = transition(NavigationState::Menu, NavAction::SelectTopic(topic));
            assert_eq!(state.page(), Page::Definition);
            assert_eq!(state.selected_topic(), Some(topic));
        }
    }

    #[test]
    fn test_definition_branches_to_execute_and_code() {
        let def = NavigationState::Definition(TopicId::Primes);
        assert_eq!(
            transition(def, NavAction::Execute),
            NavigationState::Execute(TopicId::Primes)
        );
        assert_eq!(
            transition(def, NavAction::ViewCode),
            NavigationState::Code(TopicId::Primes)
        );
    }

    #[test]
    fn test_home_clears_topic_from_every_page() {
        let pages = [
            NavigationState::Definition(TopicId::GcdLcm),
            NavigationState::Execute(TopicId::GcdLcm),
            NavigationState::Code(TopicId::GcdLcm),
        ];
        for state in pages {
            let next = transition(state, NavAction::Home);
            assert_eq!(next.page(), Page::Menu);
            assert_eq!(next.selected_topic(), None);
        }
    }

    #[test]
    fn test_unlisted_actions_are_no_ops() {
        assert_eq!(
            transition(NavigationState::Menu, NavAction::Execute),
            NavigationState::Menu
        );
        assert_eq!(
            transition(NavigationState::Menu, NavAction::Home),
            NavigationState::Menu
        );
        let exec = NavigationState::Execute(TopicId::Recursion);
        assert_eq!(transition(exec, NavAction::ViewCode), exec);
        assert_eq!(
            transition(exec, NavAction::SelectTopic(TopicId::Primes)),
            exec
        );
        let code = NavigationState::Code(TopicId::Divisibility);
        assert_eq!(transition(code, NavAction::Execute), code);
    }
}
