//! Light/dark theme, applied as the `dark-mode` class on `<body>`.

const DARK_CLASS: &str = "dark-mode";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// Icon shown on the header toggle.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Theme::Light => "🌙",
            Theme::Dark => "☀️",
        }
    }

    pub fn toggle_title(self) -> &'static str {
        match self {
            Theme::Light => "Switch to Dark Mode",
            Theme::Dark => "Switch to Light Mode",
        }
    }

    pub fn apply(self) {
        let Some(body) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.body())
        else {
            return;
        };
        let classes = body.class_list();
        let result = if self.is_dark() {
            classes.add_1(DARK_CLASS)
        } else {
            classes.remove_1(DARK_CLASS)
        };
        if let Err(err) = result {
            gloo_console::error!("Could not switch theme:", err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_light_and_toggles_back_and_forth() {
        let theme = Theme::default();
        assert!(!theme.is_dark());
        assert_eq!(theme.toggled(), Theme::Dark);
        assert_eq!(theme.toggled().toggled(), Theme::Light);
    }

    #[test]
    fn toggle_offers_the_other_theme() {
        assert_eq!(Theme::Light.toggle_title(), "Switch to Dark Mode");
        assert_eq!(Theme::Dark.toggle_title(), "Switch to Light Mode");
        assert_ne!(Theme::Light.toggle_icon(), Theme::Dark.toggle_icon());
    }
}
