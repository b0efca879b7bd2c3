use std::fmt;

use log::debug;
use web_sys::window;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Default,
    FitShare,
    NeedShare,
}

impl Theme {
    pub fn from_path(path: &str) -> Self {
        let page = path
            .rsplit('/')
            .next()
            .unwrap_or("")
            .trim_end_matches(".html");

        if path.contains("fitshare") || page == "fitshare" {
            Theme::FitShare
        } else if path.contains("needshare") || page == "needshare" {
            Theme::NeedShare
        } else {
            Theme::Default
        }
    }

    pub fn from_nav_label(label: &str) -> Option<Self> {
        if label.contains("FitShare") {
            Some(Theme::FitShare)
        } else if label.contains("NeedShare") {
            Some(Theme::NeedShare)
        } else if label.contains("Home") {
            Some(Theme::Default)
        } else {
            None
        }
    }

    pub fn is_active_label(&self, label: &str) -> bool {
        Theme::from_nav_label(label) == Some(*self)
    }

    /// Value of the `data-theme` attribute on the document element.
    pub fn attr(&self) -> &'static str {
        match self {
            Theme::Default => "default",
            Theme::FitShare => "fitshare",
            Theme::NeedShare => "needshare",
        }
    }

    pub fn page_href(&self) -> &'static str {
        match self {
            Theme::Default => "index.html",
            Theme::FitShare => "fitshare.html",
            Theme::NeedShare => "needshare.html",
        }
    }

    pub fn current() -> Self {
        window()
            .and_then(|w| w.location().pathname().ok())
            .map(|path| Theme::from_path(&path))
            .unwrap_or_default()
    }

    pub fn apply(&self) {
        let Some(root) = window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            debug!("No document element to apply theme to");
            return;
        };
        let _ = root.set_attribute("data-theme", self.attr());
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Theme::Default => "Home",
            Theme::FitShare => "FitShare",
            Theme::NeedShare => "NeedShare",
        };
        f.write_str(name)
    }
}
