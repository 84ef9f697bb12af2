use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Hero(#[prop(into)] dark_mode: Signal<bool>) -> impl IntoView {
    let heading_class = move || {
        if dark_mode.get() {
            "text-4xl sm:text-5xl lg:text-6xl font-bold leading-tight mb-6 transition-colors text-white"
        } else {
            "text-4xl sm:text-5xl lg:text-6xl font-bold leading-tight mb-6 transition-colors text-gray-900"
        }
    };

    let sub_class = move || {
        if dark_mode.get() {
            "text-lg sm:text-xl mb-8 leading-relaxed transition-colors text-gray-300"
        } else {
            "text-lg sm:text-xl mb-8 leading-relaxed transition-colors text-gray-600"
        }
    };

    let muted_class = move || {
        if dark_mode.get() {
            "text-sm transition-colors text-gray-400"
        } else {
            "text-sm transition-colors text-gray-500"
        }
    };

    view! {
        <main
            id="hero"
            class=move || {
                if dark_mode.get() {
                    "relative z-10 transition-all duration-500 bg-gray-900"
                } else {
                    "relative z-10 transition-all duration-500 bg-white"
                }
            }
        >
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-16 lg:py-24">
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-12 items-center">
                    // Left column: copy
                    <div class="text-left">
                        <p class="text-blue-600 text-sm font-semibold uppercase tracking-wide mb-4">
                            "Security - Reliability - Innovation"
                        </p>

                        <h1 class=heading_class>
                            "AI Chatbots That Know Your Business, Ready To Help Customers 24/7"
                        </h1>

                        <p class=sub_class>
                            "Train a chatbot agent in minutes using your documents or website. "
                            "Automatically handle customer questions, capture leads, and support "
                            "visitors across your site and social platforms."
                        </p>

                        <div class="mb-8">
                            <A
                                href="/dashboard"
                                attr:class="inline-block px-8 py-4 text-lg font-semibold rounded-lg transition-all duration-300 hover:scale-105 bg-gradient-to-r from-yellow-400 to-orange-500 hover:from-yellow-500 hover:to-orange-600 text-gray-900 shadow-xl"
                            >
                                "Sign Up Free"
                            </A>
                            <p class=muted_class>"No credit card required"</p>
                        </div>

                        <p class=muted_class>"Loved by 10,000+ Users"</p>
                    </div>

                    // Right column: documents-to-chatbot mockup
                    <div class="flex justify-center lg:justify-end">
                        <div class="w-full max-w-md">
                            <div class=move || {
                                if dark_mode.get() {
                                    "rounded-2xl shadow-2xl p-8 border transition-all duration-500 bg-gray-800 border-gray-700"
                                } else {
                                    "rounded-2xl shadow-2xl p-8 border transition-all duration-500 bg-white border-gray-200"
                                }
                            }>
                                // Input sources feeding the bot
                                <div class="flex justify-center mb-8">
                                    <div class="flex items-center space-x-4">
                                        <SourceDoc label="PDF" tint="bg-red-100 text-red-600" />
                                        <SourceDoc label="DOC" tint="bg-blue-100 text-blue-600" />
                                        <SourceDoc label="WEB" tint="bg-green-100 text-green-600" />
                                    </div>
                                </div>

                                // Chat preview
                                <div class=move || {
                                    if dark_mode.get() {
                                        "max-w-md mx-auto rounded-2xl p-6 border transition-all duration-500 bg-gray-700 border-gray-600"
                                    } else {
                                        "max-w-md mx-auto rounded-2xl p-6 border transition-all duration-500 bg-gray-50 border-gray-200"
                                    }
                                }>
                                    <div class="flex items-center justify-center mb-4">
                                        <div class="w-12 h-12 bg-gradient-to-br from-blue-500 to-purple-600 rounded-full flex items-center justify-center shadow-lg">
                                            <span class="text-white font-bold text-lg">"B"</span>
                                        </div>
                                    </div>

                                    <div class="space-y-4">
                                        <div class="flex justify-start">
                                            <div class="bg-gradient-to-r from-blue-500 to-purple-600 text-white px-4 py-2 rounded-2xl rounded-bl-md max-w-xs shadow-lg">
                                                "Hello! How can I assist you today?"
                                            </div>
                                        </div>
                                        <div class="flex justify-end">
                                            <div class=move || {
                                                if dark_mode.get() {
                                                    "bg-gray-600 text-white px-4 py-2 rounded-2xl rounded-br-md max-w-xs shadow"
                                                } else {
                                                    "bg-white text-gray-900 px-4 py-2 rounded-2xl rounded-br-md max-w-xs shadow border border-gray-200"
                                                }
                                            }>
                                                "What are your opening hours?"
                                            </div>
                                        </div>
                                    </div>
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </main>
    }
}

#[component]
fn SourceDoc(label: &'static str, tint: &'static str) -> impl IntoView {
    let badge_class = format!("w-12 h-16 rounded flex items-center justify-center {tint}");

    view! {
        <div class="flex flex-col items-center group">
            <div class="w-16 h-20 bg-white border-2 border-gray-300 rounded-lg shadow-md flex items-center justify-center group-hover:scale-110 transition-transform duration-300">
                <div class=badge_class>
                    <span class="font-bold text-xs">{label}</span>
                </div>
            </div>
            <div class="w-4 h-0.5 bg-gradient-to-r from-blue-400 to-purple-500 mt-2"></div>
        </div>
    }
}
