use leptos::ev::MouseEvent;
use leptos::prelude::*;

#[component]
pub fn Card(
    children: Children,
    #[prop(optional, into)] class: String,
    #[prop(default = true)] hover: bool,
    #[prop(default = Signal::from(false), into)] dark: Signal<bool>,
    #[prop(optional, into)] on_click: Option<Callback<MouseEvent>>,
) -> impl IntoView {
    let full_class = move || {
        let hover_class = if hover { "hover:shadow-xl hover:scale-105" } else { "" };
        let palette = if dark.get() {
            "bg-gray-700 border-gray-600"
        } else {
            "bg-white border-gray-100"
        };
        format!(
            "rounded-xl shadow-lg border transition-all duration-500 {hover_class} {palette} {class}"
        )
    };

    view! {
        <div
            class=full_class
            on:click=move |ev| {
                if let Some(cb) = on_click {
                    cb.run(ev);
                }
            }
        >
            {children()}
        </div>
    }
}
