//! Open/closed state of the collapsible navigation on narrow viewports.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MobileMenu {
    is_mobile: bool,
    open: bool,
}

impl MobileMenu {
    pub fn new(is_mobile: bool) -> Self {
        Self {
            is_mobile,
            open: false,
        }
    }

    pub fn is_mobile(&self) -> bool {
        self.is_mobile
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Viewport crossed the breakpoint. Leaving mobile closes the menu.
    pub fn set_mobile(&mut self, matches: bool) {
        self.is_mobile = matches;
        if !matches {
            self.open = false;
        }
    }

    pub fn toggle(&mut self) {
        if self.is_mobile {
            self.open = !self.open;
        }
    }

    pub fn nav_link_clicked(&mut self) {
        if self.is_mobile {
            self.open = false;
        }
    }

    pub fn outside_click(&mut self) {
        if self.is_mobile && self.open {
            self.open = false;
        }
    }

    pub fn nav_visible(&self) -> bool {
        !self.is_mobile || self.open
    }

    pub fn toggle_visible(&self) -> bool {
        self.is_mobile
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_desktop_always_shows_nav() {
        let mut menu = MobileMenu::new(false);
        menu.toggle();
        assert!(!menu.is_open());
        assert!(menu.nav_visible());
        assert!(!menu.toggle_visible());
    }

    #[test]
    fn test_mobile_toggle_and_link_click() {
        let mut menu = MobileMenu::new(true);
        assert!(!menu.nav_visible());

        menu.toggle();
        assert!(menu.nav_visible());

        menu.nav_link_clicked();
        assert!(!menu.is_open());
    }

    #[test]
    fn test_outside_click_closes_open_menu() {
        let mut menu = MobileMenu::new(true);
        menu.outside_click();
        assert!(!menu.is_open());

        menu.toggle();
        menu.outside_click();
        assert!(!menu.is_open());
    }

    #[test]
    fn test_leaving_mobile_closes_menu() {
        let mut menu = MobileMenu::new(true);
        menu.toggle();
        menu.set_mobile(false);
        assert!(!menu.is_open());
        assert!(menu.nav_visible());

        menu.set_mobile(true);
        assert!(!menu.nav_visible());
    }
}
