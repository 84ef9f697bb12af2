use leptos::prelude::*;

use crate::data;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="relative z-10 bg-gradient-to-br from-blue-950 to-purple-900 text-white">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-12">
                <div class="grid grid-cols-1 md:grid-cols-5 gap-8">
                    {data::footer_columns().into_iter().map(|column| {
                        view! {
                            <div>
                                <h3 class="font-bold text-sm mb-4">{column.heading}</h3>
                                <ul class="space-y-2 text-sm">
                                    {column.links.iter().map(|link| {
                                        view! {
                                            <li>
                                                <a href="#" class="hover:text-blue-400 transition-colors">
                                                    {*link}
                                                </a>
                                            </li>
                                        }
                                    }).collect_view()}
                                </ul>
                            </div>
                        }
                    }).collect_view()}
                </div>

                <div class="mt-8 flex justify-center space-x-4">
                    {data::social_icons().into_iter().map(|icon| {
                        view! {
                            <a
                                href="#"
                                class="w-10 h-10 bg-blue-900 rounded-full flex items-center justify-center hover:bg-blue-800 transition-all duration-300 hover:scale-110"
                            >
                                <span class="text-white font-bold">{icon}</span>
                            </a>
                        }
                    }).collect_view()}
                </div>

                <div class="mt-8 text-center text-sm text-gray-400">
                    <p>"\u{00A9} 2026 BotForge. All rights reserved."</p>
                </div>
            </div>
        </footer>
    }
}
