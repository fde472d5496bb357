//! Light/dark toggle button.

#[cfg(test)]
#[path = "theme_toggle_test.rs"]
mod theme_toggle_test;

use leptos::prelude::*;

use crate::state::preference::ThemePreference;
use crate::state::theme::Theme;
use crate::util::global::with_preference;

/// Glyph shown on the button: the theme a click switches to.
pub fn toggle_label(theme: Theme) -> &'static str {
    if theme.is_dark() { "☀" } else { "☾" }
}

/// Button that flips the session-wide theme.
///
/// In the browser the label follows the preference through a subscription
/// owned by the component, so changes made elsewhere (e.g.
/// `initializeTheme()`) show up too.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = RwSignal::new(with_preference(ThemePreference::get_current));

    #[cfg(feature = "hydrate")]
    {
        let subscription = with_preference(|pref| pref.subscribe(move |next| theme.set(next)));
        // Disposed, and therefore unsubscribed, with the component's owner.
        let _subscription = StoredValue::new_local(subscription);
    }

    let on_click = move |_| match with_preference(ThemePreference::toggle) {
        Ok(next) => theme.set(next),
        Err(err) => {
            log::warn!("theme toggle failed: {err}");
            theme.set(with_preference(ThemePreference::get_current));
        }
    };

    view! {
        <button class="theme-toggle" on:click=on_click title="Toggle theme">
            {move || toggle_label(theme.get())}
        </button>
    }
}
