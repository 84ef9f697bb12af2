use leptos::prelude::*;

use super::icons::Star;
use crate::data;

#[component]
pub fn Reviews(#[prop(into)] dark_mode: Signal<bool>) -> impl IntoView {
    view! {
        <section
            id="reviews"
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
                        "Reviews"
                    </p>
                    <h2 class=move || {
                        if dark_mode.get() {
                            "text-4xl sm:text-5xl font-bold mb-6 transition-colors text-white"
                        } else {
                            "text-4xl sm:text-5xl font-bold mb-6 transition-colors text-gray-900"
                        }
                    }>
                        "Teams Ship Faster With BotForge"
                    </h2>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {data::reviews().into_iter().map(|review| {
                        view! {
                            <div class=move || {
                                if dark_mode.get() {
                                    "p-6 rounded-xl shadow-lg border transition-all duration-500 hover:shadow-xl bg-gray-700 border-gray-600"
                                } else {
                                    "p-6 rounded-xl shadow-lg border transition-all duration-500 hover:shadow-xl bg-white border-gray-100"
                                }
                            }>
                                <div class="flex mb-4">
                                    {(0..review.rating).map(|_| {
                                        view! { <Star class="w-5 h-5 text-yellow-400" /> }
                                    }).collect_view()}
                                </div>

                                <p class=move || {
                                    if dark_mode.get() {
                                        "mb-6 leading-relaxed transition-colors text-gray-300"
                                    } else {
                                        "mb-6 leading-relaxed transition-colors text-gray-600"
                                    }
                                }>
                                    "\u{201C}" {review.content} "\u{201D}"
                                </p>

                                <div class="flex items-center space-x-3">
                                    <div class="w-10 h-10 bg-gradient-to-br from-blue-500 to-purple-600 rounded-full flex items-center justify-center">
                                        <span class="text-white text-sm font-bold">{review.avatar}</span>
                                    </div>
                                    <div>
                                        <p class=move || {
                                            if dark_mode.get() {
                                                "font-semibold transition-colors text-white"
                                            } else {
                                                "font-semibold transition-colors text-gray-900"
                                            }
                                        }>
                                            {review.name}
                                        </p>
                                        <p class="text-sm text-gray-400">{review.role}</p>
                                    </div>
                                </div>
                            </div>
                        }
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}
