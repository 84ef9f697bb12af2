use leptos::prelude::*;

use crate::data;

#[component]
pub fn UseCases(#[prop(into)] dark_mode: Signal<bool>) -> impl IntoView {
    view! {
        <section
            id="use-cases"
            class=move || {
                if dark_mode.get() {
                    "relative z-10 py-20 transition-all duration-500 bg-gray-900"
                } else {
                    "relative z-10 py-20 transition-all duration-500 bg-white"
                }
            }
        >
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center mb-16">
                    <p class="text-blue-600 text-sm font-semibold uppercase tracking-wide mb-4">
                        "Use Cases"
                    </p>
                    <h2 class=move || {
                        if dark_mode.get() {
                            "text-4xl sm:text-5xl font-bold mb-6 transition-colors text-white"
                        } else {
                            "text-4xl sm:text-5xl font-bold mb-6 transition-colors text-gray-900"
                        }
                    }>
                        "One Assistant, Many Jobs"
                    </h2>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {data::use_cases().into_iter().map(|case| {
                        let icon_class = format!(
                            "w-14 h-14 rounded-full bg-gradient-to-br {} flex items-center justify-center mb-4 text-2xl shadow-lg",
                            case.color,
                        );
                        view! {
                            <div class=move || {
                                if dark_mode.get() {
                                    "p-6 rounded-xl shadow-lg border transition-all duration-500 hover:shadow-xl hover:scale-105 bg-gray-800 border-gray-700"
                                } else {
                                    "p-6 rounded-xl shadow-lg border transition-all duration-500 hover:shadow-xl hover:scale-105 bg-white border-gray-100"
                                }
                            }>
                                <div class=icon_class>{case.icon}</div>
                                <h3 class=move || {
                                    if dark_mode.get() {
                                        "text-lg font-bold mb-2 transition-colors text-white"
                                    } else {
                                        "text-lg font-bold mb-2 transition-colors text-gray-900"
                                    }
                                }>
                                    {case.title}
                                </h3>
                                <p class=move || {
                                    if dark_mode.get() {
                                        "text-sm leading-relaxed transition-colors text-gray-300"
                                    } else {
                                        "text-sm leading-relaxed transition-colors text-gray-600"
                                    }
                                }>
                                    {case.desc}
                                </p>
                            </div>
                        }
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}
