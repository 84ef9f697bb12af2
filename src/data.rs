//! Static content for the landing page and the dashboard samples.

use leptos::prelude::*;

use crate::components::icons::{ChatBubbles, Persona, Rows};
use crate::state::{Bot, BotId, BotStatus};

/// Section anchors targeted by the navbar, in page order. The ids are the
/// contract between the nav controls and the section layout.
#[derive(Clone, Copy)]
pub struct NavSection {
    pub id: &'static str,
    pub label: &'static str,
}

pub fn nav_sections() -> Vec<NavSection> {
    vec![
        NavSection { id: "features", label: "Features" },
        NavSection { id: "use-cases", label: "Use Cases" },
        NavSection { id: "pricing", label: "Pricing" },
        NavSection { id: "training", label: "Training" },
        NavSection { id: "reviews", label: "Reviews" },
        NavSection { id: "faq", label: "FAQ" },
    ]
}

pub struct Feature {
    pub icon: fn() -> AnyView,
    pub title: &'static str,
    pub desc: &'static str,
    pub gradient: &'static str,
}

pub fn features() -> Vec<Feature> {
    vec![
        Feature {
            icon: || view! { <ChatBubbles class="w-8 h-8 text-white" /> }.into_any(),
            title: "Chat History",
            desc: "Take a look at each and every conversation that's taken place within any of your chatbots.",
            gradient: "from-pink-400 to-pink-600",
        },
        Feature {
            icon: || view! { <Persona class="w-8 h-8 text-white" /> }.into_any(),
            title: "Bot Personas",
            desc: "Change the bot prompt to change the character and purpose of the chatbot for your needs.",
            gradient: "from-purple-400 to-purple-600",
        },
        Feature {
            icon: || view! { <Rows class="w-8 h-8 text-white" /> }.into_any(),
            title: "Choose Your AI",
            desc: "Select from OpenAI, Anthropic, or Google's language models, depending on your requirements.",
            gradient: "from-blue-400 to-blue-600",
        },
    ]
}

pub struct UseCase {
    pub icon: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
    pub color: &'static str,
}

pub fn use_cases() -> Vec<UseCase> {
    vec![
        UseCase {
            icon: "\u{1F3A7}",
            title: "Customer Support",
            desc: "Provide 24/7 customer support with instant responses to common questions and issues.",
            color: "from-blue-500 to-blue-600",
        },
        UseCase {
            icon: "\u{1F3AF}",
            title: "Lead Generation",
            desc: "Capture and qualify leads automatically through intelligent conversations.",
            color: "from-green-500 to-green-600",
        },
        UseCase {
            icon: "\u{1F6D2}",
            title: "E-commerce Assistant",
            desc: "Help customers find products, answer questions, and guide them through purchases.",
            color: "from-purple-500 to-purple-600",
        },
        UseCase {
            icon: "\u{270D}\u{FE0F}",
            title: "Content Creation",
            desc: "Generate content ideas, write copy, and assist with creative projects.",
            color: "from-orange-500 to-orange-600",
        },
        UseCase {
            icon: "\u{1F393}",
            title: "Training & Onboarding",
            desc: "Train new employees and onboard customers with interactive learning experiences.",
            color: "from-pink-500 to-pink-600",
        },
        UseCase {
            icon: "\u{1F4CB}",
            title: "Data Collection",
            desc: "Gather feedback, conduct surveys, and collect valuable user insights.",
            color: "from-indigo-500 to-indigo-600",
        },
    ]
}

pub struct TrainingTopic {
    pub icon: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
}

pub fn training_topics() -> Vec<TrainingTopic> {
    vec![
        TrainingTopic {
            icon: "\u{1F680}",
            title: "Getting Started",
            desc: "Learn the basics of creating your first chatbot",
        },
        TrainingTopic {
            icon: "\u{2699}\u{FE0F}",
            title: "Advanced Features",
            desc: "Explore advanced chatbot capabilities and integrations",
        },
        TrainingTopic {
            icon: "\u{1F50C}",
            title: "API Integration",
            desc: "Connect your chatbot to external services and APIs",
        },
        TrainingTopic {
            icon: "\u{1F4CA}",
            title: "Analytics & Insights",
            desc: "Track performance and optimize your chatbot",
        },
        TrainingTopic {
            icon: "\u{1F3A8}",
            title: "Customization",
            desc: "Personalize your chatbot's appearance and behavior",
        },
        TrainingTopic {
            icon: "\u{1F527}",
            title: "Troubleshooting",
            desc: "Common issues and how to resolve them",
        },
    ]
}

pub struct PricingPlan {
    pub name: &'static str,
    pub price: &'static str,
    pub period: &'static str,
    pub desc: &'static str,
    pub features: &'static [&'static str],
    pub cta: &'static str,
    pub popular: bool,
    pub color: &'static str,
}

pub fn pricing_plans() -> Vec<PricingPlan> {
    vec![
        PricingPlan {
            name: "Free",
            price: "$0",
            period: "forever",
            desc: "Perfect for getting started",
            features: &[
                "1 chatbot",
                "50 messages per month",
                "Basic templates",
                "Email support",
                "Standard integrations",
            ],
            cta: "Get Started Free",
            popular: false,
            color: "from-gray-500 to-gray-600",
        },
        PricingPlan {
            name: "Pro",
            price: "$29",
            period: "per month",
            desc: "For growing businesses",
            features: &[
                "5 chatbots",
                "1,000 messages per month",
                "Advanced templates",
                "Priority support",
                "All integrations",
                "Analytics dashboard",
                "Custom branding",
            ],
            cta: "Start Pro Trial",
            popular: true,
            color: "from-blue-500 to-blue-600",
        },
        PricingPlan {
            name: "Enterprise",
            price: "Custom",
            period: "pricing",
            desc: "For large organizations",
            features: &[
                "Unlimited chatbots",
                "Unlimited messages",
                "Custom templates",
                "Dedicated support",
                "Custom integrations",
                "Advanced analytics",
                "White-label solution",
                "SLA guarantee",
            ],
            cta: "Contact Sales",
            popular: false,
            color: "from-purple-500 to-purple-600",
        },
    ]
}

pub struct Review {
    pub name: &'static str,
    pub role: &'static str,
    pub content: &'static str,
    pub rating: usize,
    pub avatar: &'static str,
}

pub fn reviews() -> Vec<Review> {
    vec![
        Review {
            name: "Sarah Johnson",
            role: "CEO, TechStart Inc.",
            content: "BotForge has revolutionized our customer support. Response times dropped by 80% and customer satisfaction increased significantly.",
            rating: 5,
            avatar: "SJ",
        },
        Review {
            name: "Michael Chen",
            role: "Marketing Director, GrowthCo",
            content: "The lead generation capabilities are incredible. We've seen a 300% increase in qualified leads since implementing BotForge.",
            rating: 5,
            avatar: "MC",
        },
        Review {
            name: "Emily Rodriguez",
            role: "Founder, E-commerce Plus",
            content: "Setting up our first chatbot was so easy. The templates and customization options made it perfect for our brand.",
            rating: 5,
            avatar: "ER",
        },
        Review {
            name: "David Thompson",
            role: "Operations Manager, ServicePro",
            content: "The analytics dashboard gives us insights we never had before. We can now optimize our customer interactions in real-time.",
            rating: 5,
            avatar: "DT",
        },
        Review {
            name: "Lisa Wang",
            role: "Head of Sales, InnovateCorp",
            content: "Integration was seamless with our existing tools. The team was up and running within hours, not days.",
            rating: 5,
            avatar: "LW",
        },
        Review {
            name: "James Wilson",
            role: "CTO, StartupHub",
            content: "The API is robust and well-documented. We've built custom integrations that work flawlessly with BotForge.",
            rating: 5,
            avatar: "JW",
        },
    ]
}

pub struct FaqItem {
    pub question: &'static str,
    pub answer: &'static str,
}

pub fn faq_items() -> Vec<FaqItem> {
    vec![
        FaqItem {
            question: "How quickly can I set up my first chatbot?",
            answer: "You can create your first chatbot in under 5 minutes using our intuitive drag-and-drop interface. Simply choose a template, customize the responses, and deploy to your website or messaging platforms.",
        },
        FaqItem {
            question: "What platforms can I integrate with?",
            answer: "BotForge integrates with over 50 platforms including WhatsApp, Facebook Messenger, Slack, Discord, Telegram, and most websites. We also provide APIs for custom integrations.",
        },
        FaqItem {
            question: "Is there a limit to the number of conversations?",
            answer: "Our Free plan includes 50 messages per month. Pro plans start with 1,000 messages per month, and Enterprise plans offer unlimited messages. You can always purchase additional message credits as needed.",
        },
        FaqItem {
            question: "Can I customize the chatbot's appearance?",
            answer: "Yes! You can fully customize your chatbot's appearance including colors, fonts, positioning, and branding. Pro and Enterprise plans include advanced customization options and white-label solutions.",
        },
        FaqItem {
            question: "How does the AI training work?",
            answer: "You can train your chatbot by uploading documents, providing website URLs, or manually adding Q&A pairs. Our AI automatically processes this information to provide accurate responses to your customers.",
        },
        FaqItem {
            question: "What kind of analytics do you provide?",
            answer: "We provide comprehensive analytics including conversation volume, response accuracy, user satisfaction scores, popular questions, and conversion tracking. Advanced analytics are available in Pro and Enterprise plans.",
        },
        FaqItem {
            question: "Is my data secure?",
            answer: "Absolutely. We use enterprise-grade security with end-to-end encryption, SOC 2 compliance, and GDPR compliance. Your data is never shared with third parties and is stored in secure, encrypted databases.",
        },
        FaqItem {
            question: "Do you offer customer support?",
            answer: "Yes! Free plan users get email support, Pro users get priority support, and Enterprise customers get dedicated support with guaranteed response times and phone support.",
        },
    ]
}

pub struct FooterColumn {
    pub heading: &'static str,
    pub links: &'static [&'static str],
}

pub fn footer_columns() -> Vec<FooterColumn> {
    vec![
        FooterColumn {
            heading: "PRODUCT",
            links: &[
                "Home",
                "Training",
                "Blog",
                "BotForge Reviews",
                "Case Studies",
                "BotForge Agency Program",
            ],
        },
        FooterColumn {
            heading: "INFORMATION",
            links: &[
                "About us",
                "Terms",
                "Privacy",
                "Data Processing Agreement",
                "Refund Policy",
            ],
        },
        FooterColumn {
            heading: "RESOURCES",
            links: &["Affiliate Program", "Chatbots By Industry", "AI Glossary"],
        },
        FooterColumn {
            heading: "INTEGRATIONS",
            links: &[
                "Facebook Messenger",
                "Slack",
                "WhatsApp",
                "Instagram",
                "Telegram",
                "WordPress",
            ],
        },
        FooterColumn {
            heading: "CONTACT",
            links: &["Contact Us", "Support", "Login"],
        },
    ]
}

pub fn social_icons() -> Vec<&'static str> {
    vec!["f", "X", "\u{1F4F7}", "in", "\u{25B6}"]
}

/// Plan shown in the dashboard "Current Plan" card.
pub fn current_plan() -> &'static str {
    "Pro"
}

/// Seed records for the dashboard list. Real data will come from a backend
/// eventually; until then the list lives only in page state.
pub fn sample_bots() -> Vec<Bot> {
    vec![
        Bot {
            id: BotId(1),
            name: "Rhode Island Helper".to_string(),
            status: BotStatus::Active,
            messages: 1234,
            last_active: "2 hours ago".to_string(),
            is_public: true,
        },
        Bot {
            id: BotId(2),
            name: "Neighborhood Assistant".to_string(),
            status: BotStatus::Active,
            messages: 856,
            last_active: "5 hours ago".to_string(),
            is_public: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_sections_cover_the_page_anchors() {
        let ids: Vec<_> = nav_sections().iter().map(|s| s.id).collect();
        assert_eq!(
            ids,
            vec!["features", "use-cases", "pricing", "training", "reviews", "faq"]
        );
    }

    #[test]
    fn test_exactly_one_plan_is_highlighted() {
        let plans = pricing_plans();
        assert_eq!(plans.len(), 3);
        assert_eq!(plans.iter().filter(|p| p.popular).count(), 1);
    }

    #[test]
    fn test_sample_bot_ids_are_unique() {
        let bots = sample_bots();
        let mut ids: Vec<_> = bots.iter().map(|b| b.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), bots.len());
    }
}
