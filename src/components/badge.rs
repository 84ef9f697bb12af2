use leptos::prelude::*;

#[derive(Clone, Copy, Default)]
pub enum BadgeColor {
    #[default]
    Blue,
    Green,
    Gradient,
}

impl BadgeColor {
    fn class(self) -> &'static str {
        match self {
            BadgeColor::Blue => "px-2 py-1 text-xs rounded-full bg-blue-100 text-blue-600",
            BadgeColor::Green => "px-2 py-1 text-xs rounded-full bg-green-100 text-green-600",
            BadgeColor::Gradient => {
                "px-4 py-1 text-sm font-semibold rounded-full bg-gradient-to-r from-blue-600 to-purple-600 text-white shadow-lg"
            }
        }
    }
}

#[component]
pub fn Badge(
    children: Children,
    #[prop(optional)] color: BadgeColor,
) -> impl IntoView {
    view! {
        <span class=color.class()>
            {children()}
        </span>
    }
}
