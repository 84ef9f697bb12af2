//! Create-bot dialog.
//!
//! Two states: closed and open-editing. Submission is guarded by a
//! non-empty trimmed name; cancel and backdrop clicks discard any entered
//! text. Exactly one create event is emitted per successful submit.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use super::button::{Button, ButtonVariant};
use super::icon_button::{IconButton, IconButtonVariant};
use super::icons::Close;
use crate::state::submittable_name;

#[component]
pub fn CreateBotModal(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_create: Callback<(String, bool)>,
) -> impl IntoView {
    let (bot_name, set_bot_name) = signal(String::new());
    let (is_public, set_is_public) = signal(false);

    let close = move || {
        set_bot_name.set(String::new());
        set_is_public.set(false);
        on_close.run(());
    };

    let try_submit = move || {
        let name = bot_name.get();
        if let Some(trimmed) = submittable_name(&name) {
            on_create.run((trimmed.to_string(), is_public.get()));
            close();
        }
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        try_submit();
    };

    view! {
        <Show when=move || open.get()>
            <div class="fixed inset-0 z-50 flex items-center justify-center">
                // Backdrop
                <div
                    class="absolute inset-0 bg-black/50 backdrop-blur-sm"
                    on:click=move |_| close()
                ></div>

                // Dialog panel
                <div class="relative bg-white rounded-2xl shadow-2xl max-w-md w-full mx-4 p-6">
                    <div class="flex items-center justify-between mb-6">
                        <h2 class="text-2xl font-bold text-gray-900">"Create New Bot"</h2>
                        <IconButton
                            variant=IconButtonVariant::Ghost
                            class="text-gray-400 hover:text-gray-600"
                            on_click=Callback::new(move |_| close())
                        >
                            <Close class="w-6 h-6" />
                        </IconButton>
                    </div>

                    <form class="space-y-6" on:submit=on_submit>
                        <p class="text-gray-600 text-sm">
                            "Give your chatbot a name to easily identify it"
                        </p>

                        <input
                            type="text"
                            placeholder="Enter your new bot name"
                            autofocus=true
                            class="w-full px-4 py-3 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-500 focus:border-transparent text-gray-900 placeholder-gray-400"
                            prop:value=move || bot_name.get()
                            on:input=move |ev| set_bot_name.set(event_target_value(&ev))
                        />

                        // Public/private toggle
                        <div class="flex items-center space-x-3">
                            <button
                                type="button"
                                on:click=move |_| set_is_public.update(|v| *v = !*v)
                                class=move || {
                                    if is_public.get() {
                                        "relative inline-flex h-6 w-11 items-center rounded-full transition-colors focus:outline-none focus:ring-2 focus:ring-blue-500 focus:ring-offset-2 bg-blue-600"
                                    } else {
                                        "relative inline-flex h-6 w-11 items-center rounded-full transition-colors focus:outline-none focus:ring-2 focus:ring-blue-500 focus:ring-offset-2 bg-gray-200"
                                    }
                                }
                            >
                                <span class=move || {
                                    if is_public.get() {
                                        "inline-block h-4 w-4 transform rounded-full bg-white transition-transform translate-x-6"
                                    } else {
                                        "inline-block h-4 w-4 transform rounded-full bg-white transition-transform translate-x-1"
                                    }
                                }></span>
                            </button>
                            <span class="text-sm text-gray-600">
                                "Make it public (You can change this later)"
                            </span>
                        </div>

                        <div class="flex space-x-3 pt-4">
                            <Button
                                variant=ButtonVariant::Secondary
                                class="flex-1"
                                on_click=Callback::new(move |_| close())
                            >
                                "Close"
                            </Button>
                            <Button
                                variant=ButtonVariant::Gradient
                                class="flex-1"
                                disabled=Signal::derive(move || {
                                    submittable_name(&bot_name.get()).is_none()
                                })
                                on_click=Callback::new(move |_| try_submit())
                            >
                                "Let's Go!"
                            </Button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
