use leptos::prelude::*;
use leptos_router::components::A;

use super::badge::{Badge, BadgeColor};
use super::icons::Check;
use crate::data;

#[component]
pub fn Pricing(#[prop(into)] dark_mode: Signal<bool>) -> impl IntoView {
    view! {
        <section
            id="pricing"
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
                        "Pricing"
                    </p>
                    <h2 class=move || {
                        if dark_mode.get() {
                            "text-4xl sm:text-5xl font-bold mb-6 transition-colors text-white"
                        } else {
                            "text-4xl sm:text-5xl font-bold mb-6 transition-colors text-gray-900"
                        }
                    }>
                        "Simple, Transparent Pricing"
                    </h2>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-3 gap-8 items-stretch">
                    {data::pricing_plans().into_iter().map(|plan| {
                        let card_class = move || {
                            let highlight = if plan.popular {
                                "border-2 border-blue-500 scale-105"
                            } else {
                                "border"
                            };
                            if dark_mode.get() {
                                format!("relative flex flex-col p-8 rounded-2xl shadow-lg transition-all duration-500 bg-gray-800 border-gray-700 {highlight}")
                            } else {
                                format!("relative flex flex-col p-8 rounded-2xl shadow-lg transition-all duration-500 bg-white border-gray-100 {highlight}")
                            }
                        };
                        view! {
                            <div class=card_class>
                                <Show when=move || plan.popular>
                                    <div class="absolute -top-4 left-1/2 -translate-x-1/2">
                                        <Badge color=BadgeColor::Gradient>"Most Popular"</Badge>
                                    </div>
                                </Show>

                                <h3 class=move || {
                                    if dark_mode.get() {
                                        "text-xl font-bold mb-1 transition-colors text-white"
                                    } else {
                                        "text-xl font-bold mb-1 transition-colors text-gray-900"
                                    }
                                }>
                                    {plan.name}
                                </h3>
                                <p class=move || {
                                    if dark_mode.get() {
                                        "text-sm mb-6 transition-colors text-gray-400"
                                    } else {
                                        "text-sm mb-6 transition-colors text-gray-500"
                                    }
                                }>
                                    {plan.desc}
                                </p>

                                <div class="mb-6">
                                    <span class=move || {
                                        if dark_mode.get() {
                                            "text-4xl font-bold transition-colors text-white"
                                        } else {
                                            "text-4xl font-bold transition-colors text-gray-900"
                                        }
                                    }>
                                        {plan.price}
                                    </span>
                                    <span class="text-sm text-gray-400 ml-1">{plan.period}</span>
                                </div>

                                <ul class="space-y-3 mb-8 flex-1">
                                    {plan.features.iter().map(|feature| {
                                        view! {
                                            <li class=move || {
                                                if dark_mode.get() {
                                                    "flex items-center text-sm transition-colors text-gray-300"
                                                } else {
                                                    "flex items-center text-sm transition-colors text-gray-600"
                                                }
                                            }>
                                                <Check class="w-4 h-4 text-green-500 mr-2 shrink-0" />
                                                {*feature}
                                            </li>
                                        }
                                    }).collect_view()}
                                </ul>

                                <A
                                    href="/dashboard"
                                    attr:class=move || {
                                        if plan.popular {
                                            "block text-center px-6 py-3 font-semibold rounded-lg transition-all duration-300 hover:scale-105 bg-gradient-to-r from-blue-600 to-purple-600 hover:from-blue-700 hover:to-purple-700 text-white shadow-lg"
                                        } else {
                                            "block text-center px-6 py-3 font-semibold rounded-lg transition-all duration-300 hover:scale-105 border-2 border-blue-600 text-blue-600 hover:bg-blue-600 hover:text-white"
                                        }
                                    }
                                >
                                    {plan.cta}
                                </A>
                            </div>
                        }
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}
