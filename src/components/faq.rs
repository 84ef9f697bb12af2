use leptos::prelude::*;

use super::card::Card;
use crate::data;
use crate::state::toggle_expanded;

#[component]
pub fn Faq(#[prop(into)] dark_mode: Signal<bool>) -> impl IntoView {
    // First question starts expanded; at most one is open at a time.
    let (open_index, set_open_index) = signal(Some(0usize));

    view! {
        <section
            id="faq"
            class=move || {
                if dark_mode.get() {
                    "relative z-10 py-20 transition-all duration-500 bg-gray-900"
                } else {
                    "relative z-10 py-20 transition-all duration-500 bg-white"
                }
            }
        >
            <div class="max-w-4xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center mb-16">
                    <p class="text-blue-600 text-sm font-semibold uppercase tracking-wide mb-4">
                        "FAQ"
                    </p>
                    <h2 class=move || {
                        if dark_mode.get() {
                            "text-4xl sm:text-5xl font-bold mb-6 transition-colors text-white"
                        } else {
                            "text-4xl sm:text-5xl font-bold mb-6 transition-colors text-gray-900"
                        }
                    }>
                        "Frequently Asked Questions"
                    </h2>
                </div>

                <div class="space-y-4">
                    {data::faq_items().into_iter().enumerate().map(|(index, item)| {
                        let is_open = move || open_index.get() == Some(index);
                        view! {
                            <Card dark=dark_mode hover=false>
                                <button
                                    class="w-full flex items-center justify-between px-6 py-5 text-left"
                                    on:click=move |_| {
                                        set_open_index.update(|open| *open = toggle_expanded(*open, index));
                                    }
                                >
                                    <span class=move || {
                                        if dark_mode.get() {
                                            "font-semibold transition-colors text-white"
                                        } else {
                                            "font-semibold transition-colors text-gray-900"
                                        }
                                    }>
                                        {item.question}
                                    </span>
                                    <span class="text-blue-600 text-xl font-bold ml-4 shrink-0">
                                        {move || if is_open() { "\u{2212}" } else { "+" }}
                                    </span>
                                </button>

                                <Show when=is_open>
                                    <p class=move || {
                                        if dark_mode.get() {
                                            "px-6 pb-5 leading-relaxed transition-colors text-gray-300"
                                        } else {
                                            "px-6 pb-5 leading-relaxed transition-colors text-gray-600"
                                        }
                                    }>
                                        {item.answer}
                                    </p>
                                </Show>
                            </Card>
                        }
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}
