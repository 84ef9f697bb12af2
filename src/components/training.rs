use leptos::prelude::*;

use crate::data;

#[component]
pub fn Training(#[prop(into)] dark_mode: Signal<bool>) -> impl IntoView {
    view! {
        <section
            id="training"
            class=move || {
                if dark_mode.get() {
                    "relative z-10 py-20 transition-all duration-500 bg-gray-800"
                } else {
                    "relative z-10 py-20 transition-all duration-500 bg-gray-50"
                }
            }
        >
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center mb-16">
                    <p class="text-blue-600 text-sm font-semibold uppercase tracking-wide mb-4">
                        "Training"
                    </p>
                    <h2 class=move || {
                        if dark_mode.get() {
                            "text-4xl sm:text-5xl font-bold mb-6 transition-colors text-white"
                        } else {
                            "text-4xl sm:text-5xl font-bold mb-6 transition-colors text-gray-900"
                        }
                    }>
                        "Learn BotForge At Your Own Pace"
                    </h2>
                    <p class=move || {
                        if dark_mode.get() {
                            "text-lg max-w-2xl mx-auto transition-colors text-gray-300"
                        } else {
                            "text-lg max-w-2xl mx-auto transition-colors text-gray-600"
                        }
                    }>
                        "Guides and walkthroughs for every step, from your first bot to advanced integrations."
                    </p>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                    {data::training_topics().into_iter().map(|topic| {
                        view! {
                            <div class=move || {
                                if dark_mode.get() {
                                    "p-6 rounded-xl shadow-lg border transition-all duration-500 hover:shadow-xl hover:scale-105 cursor-pointer bg-gray-700 border-gray-600"
                                } else {
                                    "p-6 rounded-xl shadow-lg border transition-all duration-500 hover:shadow-xl hover:scale-105 cursor-pointer bg-white border-gray-100"
                                }
                            }>
                                <div class="text-3xl mb-4">{topic.icon}</div>
                                <h3 class=move || {
                                    if dark_mode.get() {
                                        "text-lg font-bold mb-2 transition-colors text-white"
                                    } else {
                                        "text-lg font-bold mb-2 transition-colors text-gray-900"
                                    }
                                }>
                                    {topic.title}
                                </h3>
                                <p class=move || {
                                    if dark_mode.get() {
                                        "text-sm transition-colors text-gray-300"
                                    } else {
                                        "text-sm transition-colors text-gray-600"
                                    }
                                }>
                                    {topic.desc}
                                </p>
                            </div>
                        }
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}
