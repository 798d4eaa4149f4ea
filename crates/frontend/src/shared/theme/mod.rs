//! Theme management for the portfolio.
//!
//! Dark/light theme with the preference persisted in localStorage.
//! This is the only value the site ever stores in the browser.

use crate::shared::icons::icon;
use leptos::prelude::*;
use web_sys::window;

/// Available themes.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Returns the theme name as a string (used for `data-theme` and localStorage).
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Parse theme from string. Unknown values fall back to dark.
    pub fn from_str(s: &str) -> Self {
        match s {
            "light" => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Icon for the toggle button: offers the opposite theme.
    pub fn toggle_icon(&self) -> &'static str {
        match self {
            Theme::Dark => "sun",
            Theme::Light => "moon",
        }
    }
}

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Load theme from localStorage.
fn load_theme_from_storage(key: &str) -> Theme {
    get_local_storage()
        .and_then(|storage| storage.get_item(key).ok().flatten())
        .map(|s| Theme::from_str(&s))
        .unwrap_or_default()
}

/// Save theme to localStorage.
fn save_theme_to_storage(key: &str, theme: Theme) {
    if let Some(storage) = get_local_storage() {
        if storage.set_item(key, theme.as_str()).is_err() {
            log::warn!("theme: failed to persist '{}'", theme.as_str());
        }
    }
}

/// Set `data-theme` on the root element; stylesheets key off it.
fn apply_theme(theme: Theme) {
    if let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let _ = root.set_attribute("data-theme", theme.as_str());
    }
}

/// Theme context type.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    /// Current theme signal.
    pub theme: RwSignal<Theme>,
    storage_key: StoredValue<String>,
}

impl ThemeContext {
    /// Set the theme and persist to storage.
    pub fn set_theme(&self, theme: Theme) {
        self.theme.set(theme);
        self.storage_key
            .with_value(|key| save_theme_to_storage(key, theme));
        apply_theme(theme);
    }

    pub fn toggle(&self) {
        self.set_theme(self.theme.get_untracked().toggled());
    }
}

/// Provides theme context to children components.
#[component]
pub fn ThemeProvider(
    /// localStorage key for the preference
    #[prop(into)]
    storage_key: String,
    children: Children,
) -> impl IntoView {
    let initial_theme = load_theme_from_storage(&storage_key);
    apply_theme(initial_theme);

    provide_context(ThemeContext {
        theme: RwSignal::new(initial_theme),
        storage_key: StoredValue::new(storage_key),
    });

    children()
}

/// Hook to use the theme context.
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext not found. Wrap your app with ThemeProvider.")
}

/// Sun/moon button in the navbar.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_theme();

    view! {
        <button
            id="themeToggle"
            class="theme-toggle"
            title="Toggle theme"
            aria-label="Toggle theme"
            on:click=move |_| ctx.toggle()
        >
            {move || icon(ctx.theme.get().toggle_icon())}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_parse_and_toggle() {
        assert_eq!(Theme::from_str("light"), Theme::Light);
        assert_eq!(Theme::from_str("dark"), Theme::Dark);
        assert_eq!(Theme::from_str("forest"), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled().as_str(), "dark");
    }

    #[test]
    fn test_toggle_icon() {
        assert_eq!(Theme::Dark.toggle_icon(), "sun");
        assert_eq!(Theme::Light.toggle_icon(), "moon");
    }
}
