//! Dashboard page container.
//!
//! Owns the bot collection, search query, and modal visibility; children
//! get read access and emit events back up through callbacks.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::badge::Badge;
use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::card::Card;
use crate::components::create_bot_modal::CreateBotModal;
use crate::components::icon_button::{IconButton, IconButtonVariant};
use crate::components::icons::Bell;
use crate::data;
use crate::state::{thousands, Bot, DashboardState};

#[component]
pub fn Dashboard() -> impl IntoView {
    let state = DashboardState::new();

    let on_create = Callback::new(move |(name, is_public): (String, bool)| {
        state.create_bot(&name, is_public);
    });

    view! {
        <div class="min-h-screen bg-gray-50 flex">
            // Left icon rail
            <div class="w-16 bg-blue-900 flex flex-col items-center py-6 space-y-6">
                <div class="w-10 h-10 bg-blue-500 rounded-full flex items-center justify-center cursor-pointer hover:bg-blue-400 transition-colors">
                    <span class="text-white text-lg">"\u{1F916}"</span>
                </div>

                <div class="relative">
                    <div class="w-10 h-10 bg-gray-300 rounded-full flex items-center justify-center cursor-pointer hover:bg-gray-200 transition-colors">
                        <div class="w-8 h-8 bg-gradient-to-br from-blue-500 to-purple-600 rounded-full flex items-center justify-center">
                            <span class="text-white text-sm font-bold">"P"</span>
                        </div>
                    </div>
                    <div class="absolute -bottom-1 -right-1 w-4 h-4 bg-green-500 rounded-full border-2 border-blue-900"></div>
                </div>

                // "+" affordance opens the create modal
                <div
                    class="w-10 h-10 bg-blue-700 rounded-full flex items-center justify-center cursor-pointer hover:bg-blue-600 transition-colors"
                    on:click=move |_| state.open_create_modal()
                >
                    <span class="text-white text-xl">"+"</span>
                </div>
            </div>

            // Main column
            <div class="flex-1 flex flex-col">
                // Top bar
                <div class="bg-white border-b border-gray-200 px-6 py-4 flex justify-between items-center">
                    <div class="flex items-center space-x-4">
                        <A
                            href="/"
                            attr:class="text-blue-600 hover:text-blue-700 text-sm font-medium"
                        >
                            "\u{2190} Back to Home"
                        </A>
                        <h1 class="text-2xl font-bold text-gray-900">"My Bots List"</h1>
                    </div>

                    <div class="flex items-center space-x-4">
                        <IconButton variant=IconButtonVariant::Ghost>
                            <Bell class="w-5 h-5 text-gray-600" />
                        </IconButton>

                        <div class="flex items-center space-x-2 cursor-pointer">
                            <div class="w-8 h-8 bg-gradient-to-br from-blue-500 to-purple-600 rounded-full flex items-center justify-center">
                                <span class="text-white text-sm font-bold">"P"</span>
                            </div>
                            <span class="text-gray-600">"\u{25BC}"</span>
                        </div>
                    </div>
                </div>

                // Content area
                <div class="flex-1 p-6 overflow-y-auto">
                    // Stats cards
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-4 mb-8">
                        <StatCard
                            label="Total Bots"
                            value=Signal::derive(move || state.stats().total_bots.to_string())
                            value_class="text-3xl font-bold text-gray-900"
                            icon="\u{1F916}"
                            icon_bg="bg-blue-100"
                        />
                        <StatCard
                            label="Active Bots"
                            value=Signal::derive(move || state.stats().active_bots.to_string())
                            value_class="text-3xl font-bold text-green-600"
                            icon="\u{2705}"
                            icon_bg="bg-green-100"
                        />
                        <StatCard
                            label="Total Messages"
                            value=Signal::derive(move || thousands(state.stats().total_messages))
                            value_class="text-3xl font-bold text-purple-600"
                            icon="\u{1F4AC}"
                            icon_bg="bg-purple-100"
                        />
                        <StatCard
                            label="Current Plan"
                            value=Signal::derive(|| data::current_plan().to_string())
                            value_class="text-3xl font-bold bg-gradient-to-r from-blue-600 to-purple-600 bg-clip-text text-transparent"
                            icon="\u{2B50}"
                            icon_bg="bg-yellow-100"
                        />
                    </div>

                    // Search
                    <div class="mb-6">
                        <input
                            type="text"
                            placeholder="Search for bots..."
                            class="w-full max-w-md px-4 py-3 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-500 focus:border-transparent"
                            prop:value=move || state.search_query.get()
                            on:input=move |ev| state.set_search_query(event_target_value(&ev))
                        />
                    </div>

                    <div class="mb-4">
                        <h2 class="text-xl font-bold text-gray-900 mb-4">"Your AI Chatbots"</h2>

                        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                            // Create-new card
                            <Card
                                class="p-6 border-2 border-dashed border-gray-300 hover:border-blue-500 transition-colors cursor-pointer"
                                on_click=Callback::new(move |_| state.open_create_modal())
                            >
                                <div class="flex flex-col items-center justify-center text-center h-full">
                                    <div class="w-16 h-16 bg-blue-100 rounded-full flex items-center justify-center mb-4">
                                        <span class="text-blue-600 text-3xl">"+"</span>
                                    </div>
                                    <h3 class="text-lg font-semibold text-gray-900">"Create New Bot"</h3>
                                    <p class="text-sm text-gray-600 mt-2">
                                        "Start building your AI chatbot"
                                    </p>
                                </div>
                            </Card>

                            <For
                                each=move || state.filtered_bots()
                                key=|bot| bot.id
                                children=move |bot| view! { <BotCard bot=bot /> }
                            />
                        </div>
                    </div>
                </div>
            </div>

            // Feedback tab rail
            <div class="w-12 bg-blue-900 flex items-center justify-center">
                <div class="-rotate-90 text-white font-medium text-sm cursor-pointer hover:text-blue-200 transition-colors">
                    "Feedback"
                </div>
            </div>

            <CreateBotModal
                open=state.create_modal_open
                on_close=Callback::new(move |_| state.close_create_modal())
                on_create=on_create
            />
        </div>
    }
}

#[component]
fn StatCard(
    label: &'static str,
    #[prop(into)] value: Signal<String>,
    value_class: &'static str,
    icon: &'static str,
    icon_bg: &'static str,
) -> impl IntoView {
    let icon_class = format!("w-12 h-12 {icon_bg} rounded-full flex items-center justify-center");

    view! {
        <Card class="p-6" hover=false>
            <div class="flex items-center justify-between">
                <div>
                    <p class="text-sm text-gray-600 mb-1">{label}</p>
                    <h3 class=value_class>{move || value.get()}</h3>
                </div>
                <div class=icon_class>
                    <span class="text-2xl">{icon}</span>
                </div>
            </div>
        </Card>
    }
}

#[component]
fn BotCard(bot: Bot) -> impl IntoView {
    let status = bot.status;
    let is_public = bot.is_public;
    let messages = thousands(u64::from(bot.messages));
    let status_dot = if status.is_active() {
        "inline-block w-2 h-2 rounded-full bg-green-500"
    } else {
        "inline-block w-2 h-2 rounded-full bg-gray-400"
    };

    view! {
        <Card class="p-6 cursor-pointer hover:border-blue-400">
            <div class="flex flex-col h-full">
                <div class="flex items-start justify-between mb-4">
                    <div class="flex items-center space-x-3">
                        <div class="w-12 h-12 bg-gradient-to-br from-blue-500 to-purple-600 rounded-lg flex items-center justify-center">
                            <span class="text-white text-xl">"\u{1F916}"</span>
                        </div>
                        <div>
                            <h3 class="font-semibold text-gray-900 text-lg">{bot.name}</h3>
                            <div class="flex items-center space-x-2 mt-1">
                                <span class=status_dot></span>
                                <span class="text-xs text-gray-600">{status.label()}</span>
                            </div>
                        </div>
                    </div>
                    <Show when=move || is_public>
                        <Badge>"Public"</Badge>
                    </Show>
                </div>

                <div class="flex-1">
                    <div class="space-y-2 text-sm text-gray-600">
                        <div class="flex items-center justify-between">
                            <span>"Messages:"</span>
                            <span class="font-semibold text-gray-900">{messages}</span>
                        </div>
                        <div class="flex items-center justify-between">
                            <span>"Last Active:"</span>
                            <span class="font-semibold text-gray-900">{bot.last_active}</span>
                        </div>
                    </div>
                </div>

                <div class="mt-4 pt-4 border-t border-gray-200 flex space-x-2">
                    <Button
                        variant=ButtonVariant::Primary
                        size=ButtonSize::Sm
                        class="flex-1 text-sm"
                    >
                        "Configure"
                    </Button>
                    <Button
                        variant=ButtonVariant::Secondary
                        size=ButtonSize::Sm
                        class="flex-1 text-sm"
                    >
                        "View Stats"
                    </Button>
                </div>
            </div>
        </Card>
    }
}
