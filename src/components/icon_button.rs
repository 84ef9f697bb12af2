use leptos::ev::MouseEvent;
use leptos::prelude::*;

#[derive(Clone, Copy, Default)]
pub enum IconButtonVariant {
    Primary,
    #[default]
    Secondary,
    Ghost,
}

impl IconButtonVariant {
    fn class(self) -> &'static str {
        match self {
            IconButtonVariant::Primary => "bg-blue-600 hover:bg-blue-700 text-white",
            IconButtonVariant::Secondary => "bg-gray-700 hover:bg-gray-600 text-white",
            IconButtonVariant::Ghost => {
                "bg-transparent hover:bg-gray-100 text-gray-600 hover:text-gray-900"
            }
        }
    }
}

#[derive(Clone, Copy, Default)]
pub enum IconButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl IconButtonSize {
    fn class(self) -> &'static str {
        match self {
            IconButtonSize::Sm => "w-6 h-6",
            IconButtonSize::Md => "w-8 h-8",
            IconButtonSize::Lg => "w-12 h-12",
        }
    }
}

#[component]
pub fn IconButton(
    children: Children,
    #[prop(optional)] variant: IconButtonVariant,
    #[prop(optional)] size: IconButtonSize,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] on_click: Option<Callback<MouseEvent>>,
) -> impl IntoView {
    let full_class = format!(
        "rounded flex items-center justify-center transition-all duration-300 \
         hover:scale-110 focus:outline-none {} {} {class}",
        variant.class(),
        size.class(),
    );

    view! {
        <button
            type="button"
            class=full_class
            on:click=move |ev| {
                if let Some(cb) = on_click {
                    cb.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
