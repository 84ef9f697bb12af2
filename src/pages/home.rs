//! Landing page container.
//!
//! Owns the cross-cutting view state (dark mode, font size, login flag)
//! and wires read signals plus callbacks down to the section components.

use leptos::prelude::*;

use crate::components::faq::Faq;
use crate::components::features::Features;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::icon_button::{IconButton, IconButtonSize, IconButtonVariant};
use crate::components::icons::ArrowUp;
use crate::components::navbar::Navbar;
use crate::components::pricing::Pricing;
use crate::components::reviews::Reviews;
use crate::components::training::Training;
use crate::components::use_cases::UseCases;
use crate::state::ThemeState;

fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

#[component]
pub fn Home() -> impl IntoView {
    let theme = ThemeState::new();
    let (logged_in, set_logged_in) = signal(false);

    // The page container applies the document-level theme after every
    // state update; reapplying the same theme is a no-op.
    Effect::new(move || theme.apply());

    let on_login = Callback::new(move |_: ()| {
        set_logged_in.set(true);
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href("/dashboard");
        }
    });

    let dark_mode = theme.dark_mode;

    view! {
        <div class=move || {
            if dark_mode.get() {
                "min-h-screen transition-all duration-500 bg-gray-900 text-white"
            } else {
                "min-h-screen transition-all duration-500 bg-gradient-to-br from-blue-50 via-white to-purple-50"
            }
        }>
            // Decorative background blobs
            <div class="fixed inset-0 overflow-hidden pointer-events-none">
                <div class="absolute -top-40 -right-40 w-80 h-80 bg-gradient-to-br from-blue-400/20 to-purple-600/20 rounded-full blur-3xl"></div>
                <div class="absolute -bottom-40 -left-40 w-80 h-80 bg-gradient-to-tr from-pink-400/20 to-blue-600/20 rounded-full blur-3xl"></div>
            </div>

            <Navbar dark_mode=dark_mode logged_in=logged_in on_login=on_login />

            <Hero dark_mode=dark_mode />
            <Features dark_mode=dark_mode />
            <UseCases dark_mode=dark_mode />
            <Training dark_mode=dark_mode />
            <Pricing dark_mode=dark_mode />
            <Reviews dark_mode=dark_mode />
            <Faq dark_mode=dark_mode />

            <Footer />

            // Cookie consent banner
            <div class="fixed bottom-0 left-0 right-0 bg-gray-900 text-white p-4 text-sm z-50">
                <div class="max-w-7xl mx-auto flex flex-col sm:flex-row items-center justify-between">
                    <p class="mb-2 sm:mb-0">
                        "We use cookies and similar technologies to improve your experience, "
                        "analyze site usage, and assist in our marketing efforts. By using our "
                        "site, you consent to the placement of cookies. "
                        <a href="#" class="text-blue-400 hover:text-blue-300 underline">
                            "Privacy Policy"
                        </a>
                    </p>
                </div>
            </div>

            // Floating chat widget preview
            <div class="fixed bottom-20 right-6 z-50">
                <div class="bg-white rounded-full shadow-lg p-4 border border-gray-200 hover:scale-110 transition-transform duration-300">
                    <div class="w-12 h-12 bg-gradient-to-br from-blue-500 to-purple-600 rounded-full flex items-center justify-center shadow-lg">
                        <span class="text-white font-bold text-lg">"B"</span>
                    </div>
                </div>
                <div class="absolute bottom-16 right-0 bg-white rounded-lg shadow-lg p-3 border border-gray-200 max-w-xs">
                    <p class="text-gray-900 text-sm">
                        "Welcome! How can I help you today? \u{1F60A}"
                    </p>
                </div>
            </div>

            // Scroll to top
            <IconButton
                size=IconButtonSize::Lg
                class="fixed bottom-6 left-6 bg-gray-700 hover:bg-gray-600 text-white rounded-full z-50"
                on_click=Callback::new(move |_| scroll_to_top())
            >
                <ArrowUp class="w-6 h-6" />
            </IconButton>

            // Right utility rail: theme toggles
            <div class="fixed right-0 top-1/2 -translate-y-1/2 bg-gray-800 text-white p-2 rounded-l-lg space-y-2 z-40">
                <IconButton
                    variant=IconButtonVariant::Secondary
                    on_click=Callback::new(move |_| theme.toggle_dark_mode())
                >
                    <span class="text-xs">
                        {move || if dark_mode.get() { "\u{2600}\u{FE0F}" } else { "\u{1F319}" }}
                    </span>
                </IconButton>
                <IconButton
                    variant=IconButtonVariant::Secondary
                    on_click=Callback::new(move |_| theme.cycle_font_size())
                >
                    <span class="text-xs">"Aa"</span>
                </IconButton>
            </div>
        </div>
    }
}
