//! Mobile navigation: hamburger toggle plus an off-canvas link panel that
//! closes itself when a link is chosen.

use yew::prelude::*;

/// A navigation entry in the mobile panel.
#[derive(Clone, PartialEq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

/// Open/closed state. Both the hamburger and the panel derive their
/// `active` class from this one flag, so the two can never desync.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    pub fn closed() -> Self {
        Self { open: false }
    }
}

#[derive(Properties, PartialEq)]
pub struct MobileMenuProps {
    pub links: Vec<NavLink>,
}

/// Hamburger + panel. A menu without links renders nothing, mirroring the
/// original guard for pages without mobile navigation.
#[function_component(MobileMenu)]
pub fn mobile_menu(props: &MobileMenuProps) -> Html {
    let state = use_state(MenuState::default);

    if props.links.is_empty() {
        return html! {};
    }

    let on_toggle = {
        let state = state.clone();
        Callback::from(move |_| state.set(state.toggled()))
    };
    let on_link = {
        let state = state.clone();
        Callback::from(move |_| state.set(MenuState::closed()))
    };

    let active = state.is_open().then_some("active");

    html! {
        <nav class="mobile-nav">
            <button
                id="navHamburger"
                class={classes!("nav-hamburger", active)}
                aria-expanded={state.is_open().to_string()}
                onclick={on_toggle}
            >
                <span class="hamburger-bar" />
                <span class="hamburger-bar" />
                <span class="hamburger-bar" />
            </button>
            <div id="navMobileMenu" class={classes!("nav-mobile-menu", active)}>
                { props.links.iter().map(|link| {
                    html! {
                        <a href={link.href} onclick={on_link.clone()}>{ link.label }</a>
                    }
                }).collect::<Html>() }
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::MenuState;

    #[test]
    fn even_toggle_count_restores_original_state() {
        let mut state = MenuState::default();
        for _ in 0..4 {
            state = state.toggled();
        }
        assert!(!state.is_open());
    }

    #[test]
    fn odd_toggle_count_flips_state() {
        let mut state = MenuState::default();
        for _ in 0..3 {
            state = state.toggled();
        }
        assert!(state.is_open());
    }

    // What the panel's link handler does to whatever state came before.
    fn link_click(_prior: MenuState) -> MenuState {
        MenuState::closed()
    }

    #[test]
    fn link_click_closes_regardless_of_prior_state() {
        let open = MenuState::default().toggled();
        assert!(open.is_open());
        assert!(!link_click(open).is_open());

        let closed = MenuState::default();
        assert!(!link_click(closed).is_open());
    }
}
