//! Mobile navigation drawer state.
//!
//! The drawer is the site's only piece of interactive state: a panel of nav
//! links that slides in from the right on narrow viewports. It has two
//! states and four transitions:
//!
//! ```text
//!            toggle
//!   Closed ─────────▶ Open
//!     ▲                │
//!     └────────────────┘
//!   toggle | select link | click backdrop
//! ```
//!
//! Every transition is infallible. [`Drawer`] owns the value; the shell
//! renders from it, so a freshly mounted shell (and therefore every page
//! load) starts closed.
//!
//! The generator only ever mounts a drawer and reads it: the shell renders
//! from [`Drawer::mount`], so pages ship closed. Transitions happen in the
//! browser. The page carries the machine as a CSS checkbox drawer: the
//! hamburger and the backdrop are `<label>`s for one checkbox, and
//! `static/drawer.js` clears the checkbox when a drawer link or the CTA is
//! activated, then mirrors the state into `aria-label` and `data-state`.
//! [`Drawer::toggle`], [`Drawer::select_link`] and [`Drawer::click_backdrop`]
//! are the reference that script and stylesheet follow; nothing in the
//! generator calls them.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawerState {
    #[default]
    Closed,
    Open,
}

/// The drawer state machine, scoped to one navigation shell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Drawer {
    state: DrawerState,
}

impl Drawer {
    /// A freshly mounted drawer: closed.
    pub fn mount() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DrawerState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == DrawerState::Open
    }

    /// Hamburger button: flip between open and closed.
    pub fn toggle(&mut self) {
        self.state = match self.state {
            DrawerState::Closed => DrawerState::Open,
            DrawerState::Open => DrawerState::Closed,
        };
    }

    /// A nav link or the CTA was chosen. Returns the destination so callers
    /// navigate with the drawer already closed.
    pub fn select_link<'a>(&mut self, href: &'a str) -> &'a str {
        self.state = DrawerState::Closed;
        href
    }

    /// Click on the dimmed backdrop. No-op while closed.
    pub fn click_backdrop(&mut self) {
        if self.state == DrawerState::Open {
            self.state = DrawerState::Closed;
        }
    }

    /// Accessible label for the hamburger button.
    pub fn toggle_label(&self) -> &'static str {
        if self.is_open() {
            "Close menu"
        } else {
            "Open menu"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mounts_closed() {
        let drawer = Drawer::mount();
        assert_eq!(drawer.state(), DrawerState::Closed);
        assert!(!drawer.is_open());
    }

    #[test]
    fn toggle_flips_state() {
        let mut drawer = Drawer::mount();
        drawer.toggle();
        assert_eq!(drawer.state(), DrawerState::Open);
        drawer.toggle();
        assert_eq!(drawer.state(), DrawerState::Closed);
    }

    #[test]
    fn open_iff_odd_number_of_toggles() {
        for n in 0..16 {
            let mut drawer = Drawer::mount();
            for _ in 0..n {
                drawer.toggle();
            }
            assert_eq!(drawer.is_open(), n % 2 == 1, "after {n} toggles");
        }
    }

    #[test]
    fn select_link_closes_open_drawer() {
        let mut drawer = Drawer::mount();
        drawer.toggle();
        let target = drawer.select_link("/about/");
        assert_eq!(target, "/about/");
        assert!(!drawer.is_open());
    }

    #[test]
    fn select_link_while_closed_stays_closed() {
        let mut drawer = Drawer::mount();
        drawer.select_link("/contact/");
        assert!(!drawer.is_open());
    }

    #[test]
    fn backdrop_closes_open_drawer() {
        let mut drawer = Drawer::mount();
        drawer.toggle();
        drawer.click_backdrop();
        assert_eq!(drawer.state(), DrawerState::Closed);
    }

    #[test]
    fn backdrop_is_noop_when_closed() {
        let mut drawer = Drawer::mount();
        let before = drawer;
        drawer.click_backdrop();
        assert_eq!(drawer, before);
    }

    #[test]
    fn toggle_label_tracks_state() {
        let mut drawer = Drawer::mount();
        assert_eq!(drawer.toggle_label(), "Open menu");
        drawer.toggle();
        assert_eq!(drawer.toggle_label(), "Close menu");
    }
}
