pub mod components;
pub mod data;
pub mod pages;
pub mod state;

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::use_location;
use leptos_router::path;
use pages::dashboard::Dashboard;
use pages::home::Home;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="BotForge \u{2014} AI Chatbots That Know Your Business" />
        <Router>
            <ScrollToTop />
            <Routes fallback=|| "Page not found.">
                <Route path=path!("/") view=Home />
                <Route path=path!("/dashboard") view=Dashboard />
            </Routes>
        </Router>
    }
}

#[component]
fn ScrollToTop() -> impl IntoView {
    let location = use_location();

    Effect::new(move || {
        let _ = location.pathname.get();
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    });

    ()
}
