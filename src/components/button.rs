use leptos::ev::MouseEvent;
use leptos::prelude::*;

#[derive(Clone, Copy, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
    Gradient,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "bg-blue-600 hover:bg-blue-700 text-white focus:ring-blue-500",
            ButtonVariant::Secondary => "bg-gray-200 hover:bg-gray-300 text-gray-900 focus:ring-gray-500",
            ButtonVariant::Outline => {
                "border-2 border-blue-600 text-blue-600 hover:bg-blue-600 hover:text-white focus:ring-blue-500"
            }
            ButtonVariant::Gradient => {
                "bg-gradient-to-r from-blue-600 to-purple-600 hover:from-blue-700 hover:to-purple-700 text-white focus:ring-blue-500 shadow-lg"
            }
        }
    }
}

#[derive(Clone, Copy, Default)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ButtonSize {
    fn class(self) -> &'static str {
        match self {
            ButtonSize::Sm => "px-4 py-2 text-sm",
            ButtonSize::Md => "px-6 py-2 text-base",
            ButtonSize::Lg => "px-8 py-4 text-lg",
        }
    }
}

#[component]
pub fn Button(
    children: Children,
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional, into)] class: String,
    #[prop(default = Signal::from(false), into)] disabled: Signal<bool>,
    #[prop(optional, into)] on_click: Option<Callback<MouseEvent>>,
) -> impl IntoView {
    let base = format!(
        "font-semibold rounded-lg transition-all duration-300 hover:scale-105 \
         focus:outline-none focus:ring-2 focus:ring-offset-2 {} {} {class}",
        variant.class(),
        size.class(),
    );

    let full_class = move || {
        if disabled.get() {
            format!("{base} opacity-50 cursor-not-allowed hover:scale-100")
        } else {
            base.clone()
        }
    };

    view! {
        <button
            type="button"
            class=full_class
            disabled=move || disabled.get()
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
