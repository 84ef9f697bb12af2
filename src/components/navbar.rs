use leptos::prelude::*;
use leptos_router::components::A;

use super::icons::Menu;
use crate::data;

/// Smooth-scrolls the page to a section anchor, if it exists.
fn scroll_to_section(id: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Some(element) = document.get_element_by_id(id) {
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

#[component]
pub fn Navbar(
    #[prop(into)] dark_mode: Signal<bool>,
    #[prop(into)] logged_in: Signal<bool>,
    #[prop(into)] on_login: Callback<()>,
) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    let header_class = move || {
        if dark_mode.get() {
            "relative z-50 transition-all duration-500 bg-gray-900/95 backdrop-blur-md"
        } else {
            "relative z-50 transition-all duration-500 bg-white/95 backdrop-blur-md shadow-lg"
        }
    };

    let link_class = move || {
        if dark_mode.get() {
            "font-medium transition-all duration-300 hover:scale-105 text-white hover:text-blue-400"
        } else {
            "font-medium transition-all duration-300 hover:scale-105 text-gray-700 hover:text-blue-600"
        }
    };

    view! {
        <header class=header_class>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    // Logo
                    <A href="/" attr:class="flex items-center space-x-2">
                        <div class="w-8 h-8 bg-gradient-to-br from-blue-500 to-purple-600 rounded-lg flex items-center justify-center shadow-lg">
                            <span class="text-white font-bold text-sm">"B"</span>
                        </div>
                        <span class="text-xl font-bold bg-gradient-to-r from-blue-600 to-purple-600 bg-clip-text text-transparent">
                            "BotForge"
                        </span>
                        <span class="text-xs text-gray-400">"\u{2122}"</span>
                    </A>

                    // Desktop navigation
                    <nav class="hidden md:flex items-center space-x-8">
                        {data::nav_sections().into_iter().map(|section| {
                            view! {
                                <button
                                    on:click=move |_| scroll_to_section(section.id)
                                    class=link_class
                                >
                                    {section.label}
                                </button>
                            }
                        }).collect_view()}
                        <button on:click=move |_| on_login.run(()) class=link_class>
                            {move || if logged_in.get() { "Dashboard" } else { "Login" }}
                        </button>
                    </nav>

                    // Desktop call to action
                    <div class="hidden md:block">
                        <A
                            href="/dashboard"
                            attr:class="px-6 py-2 font-semibold rounded-lg transition-all duration-300 hover:scale-105 bg-gradient-to-r from-blue-600 to-purple-600 hover:from-blue-700 hover:to-purple-700 text-white shadow-lg"
                        >
                            "Sign Up Free"
                        </A>
                    </div>

                    // Mobile menu toggle
                    <button
                        class=move || {
                            if dark_mode.get() {
                                "md:hidden transition-colors text-white"
                            } else {
                                "md:hidden transition-colors text-gray-700"
                            }
                        }
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        <Menu class="w-6 h-6" />
                    </button>
                </div>

                // Mobile menu
                <Show when=move || menu_open.get()>
                    <div class=move || {
                        if dark_mode.get() {
                            "md:hidden border-t transition-all duration-300 bg-gray-800 border-gray-700"
                        } else {
                            "md:hidden border-t transition-all duration-300 bg-white border-gray-200"
                        }
                    }>
                        <div class="px-2 pt-2 pb-3 space-y-1">
                            {data::nav_sections().into_iter().map(|section| {
                                view! {
                                    <button
                                        on:click=move |_| {
                                            scroll_to_section(section.id);
                                            set_menu_open.set(false);
                                        }
                                        class=move || {
                                            if dark_mode.get() {
                                                "block w-full text-left px-3 py-2 transition-colors text-white hover:text-blue-400"
                                            } else {
                                                "block w-full text-left px-3 py-2 transition-colors text-gray-700 hover:text-blue-600"
                                            }
                                        }
                                    >
                                        {section.label}
                                    </button>
                                }
                            }).collect_view()}
                            <button
                                on:click=move |_| {
                                    set_menu_open.set(false);
                                    on_login.run(());
                                }
                                class=move || {
                                    if dark_mode.get() {
                                        "block w-full text-left px-3 py-2 transition-colors text-white hover:text-blue-400"
                                    } else {
                                        "block w-full text-left px-3 py-2 transition-colors text-gray-700 hover:text-blue-600"
                                    }
                                }
                            >
                                {move || if logged_in.get() { "Dashboard" } else { "Login" }}
                            </button>
                        </div>
                    </div>
                </Show>
            </div>
        </header>
    }
}
