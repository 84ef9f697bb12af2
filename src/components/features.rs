use leptos::prelude::*;

use crate::data;

#[component]
pub fn Features(#[prop(into)] dark_mode: Signal<bool>) -> impl IntoView {
    let feats = data::features();

    view! {
        <section
            id="features"
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
                        "Features"
                    </p>
                    <h2 class=move || {
                        if dark_mode.get() {
                            "text-4xl sm:text-5xl font-bold mb-6 transition-colors text-white"
                        } else {
                            "text-4xl sm:text-5xl font-bold mb-6 transition-colors text-gray-900"
                        }
                    }>
                        "Everything You Need To Build Great Chatbots"
                    </h2>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                    {feats.into_iter().map(|feat| {
                        let icon_class = format!(
                            "w-16 h-16 rounded-xl bg-gradient-to-br {} flex items-center justify-center mb-6 shadow-lg",
                            feat.gradient,
                        );
                        view! {
                            <div class=move || {
                                if dark_mode.get() {
                                    "p-8 rounded-xl shadow-lg border transition-all duration-500 hover:shadow-xl hover:scale-105 bg-gray-700 border-gray-600"
                                } else {
                                    "p-8 rounded-xl shadow-lg border transition-all duration-500 hover:shadow-xl hover:scale-105 bg-white border-gray-100"
                                }
                            }>
                                <div class=icon_class>{(feat.icon)()}</div>
                                <h3 class=move || {
                                    if dark_mode.get() {
                                        "text-xl font-bold mb-3 transition-colors text-white"
                                    } else {
                                        "text-xl font-bold mb-3 transition-colors text-gray-900"
                                    }
                                }>
                                    {feat.title}
                                </h3>
                                <p class=move || {
                                    if dark_mode.get() {
                                        "leading-relaxed transition-colors text-gray-300"
                                    } else {
                                        "leading-relaxed transition-colors text-gray-600"
                                    }
                                }>
                                    {feat.desc}
                                </p>
                            </div>
                        }
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}
