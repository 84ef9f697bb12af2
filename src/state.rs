//! Page view-state containers and the pure logic behind them.
//!
//! Each page owns exactly one state container of reactive signals. Child
//! components receive read-only signals plus callbacks and emit events
//! upward; they never mutate page state directly. Document-level side
//! effects (theme class, root font size) are applied only through
//! [`ThemeState::apply`], which is idempotent.

use leptos::prelude::*;
use std::fmt;
use wasm_bindgen::JsCast;

use crate::data;

// ─────────────────────────────────────────────────────────
// Bot records
// ─────────────────────────────────────────────────────────

/// Opaque bot identifier, unique for the lifetime of a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BotId(pub u64);

impl fmt::Display for BotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotStatus {
    Active,
    Inactive,
}

impl BotStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        }
    }

    pub fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }
}

/// A chatbot entry shown in the dashboard list.
///
/// Records are append-only: created through [`DashboardState::create_bot`],
/// never edited or deleted afterwards, and gone on page reload.
#[derive(Debug, Clone, PartialEq)]
pub struct Bot {
    pub id: BotId,
    pub name: String,
    pub status: BotStatus,
    pub messages: u32,
    pub last_active: String,
    pub is_public: bool,
}

/// Visible subset of `bots` for a search query: case-insensitive substring
/// match on the name, original order preserved, source untouched.
pub fn filter_bots(bots: &[Bot], query: &str) -> Vec<Bot> {
    let needle = query.to_lowercase();
    bots.iter()
        .filter(|bot| bot.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Submit guard for the create-bot form: the trimmed name, if non-empty.
pub fn submittable_name(name: &str) -> Option<&str> {
    let trimmed = name.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Accordion transition: clicking the expanded item collapses it, clicking
/// any other item moves the expansion there. At most one item is open.
pub fn toggle_expanded(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

/// Renders a count with thousands separators ("1234" -> "1,234").
pub fn thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

// ─────────────────────────────────────────────────────────
// Dashboard state
// ─────────────────────────────────────────────────────────

/// Aggregates shown in the dashboard stat cards, derived from the bot
/// collection on every render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_bots: usize,
    pub active_bots: usize,
    pub total_messages: u64,
}

impl DashboardStats {
    pub fn from_bots(bots: &[Bot]) -> Self {
        Self {
            total_bots: bots.len(),
            active_bots: bots.iter().filter(|b| b.status.is_active()).count(),
            total_messages: bots.iter().map(|b| u64::from(b.messages)).sum(),
        }
    }
}

/// View-state container for the dashboard page.
#[derive(Clone, Copy)]
pub struct DashboardState {
    pub bots: RwSignal<Vec<Bot>>,
    pub search_query: RwSignal<String>,
    pub create_modal_open: RwSignal<bool>,
    next_id: RwSignal<u64>,
}

impl DashboardState {
    /// Seeds the collection with the sample bots. Ids continue after the
    /// highest seeded id so they stay unique for the collection lifetime.
    pub fn new() -> Self {
        let bots = data::sample_bots();
        let next_id = bots.iter().map(|b| b.id.0).max().map_or(1, |max| max + 1);

        Self {
            bots: RwSignal::new(bots),
            search_query: RwSignal::new(String::new()),
            create_modal_open: RwSignal::new(false),
            next_id: RwSignal::new(next_id),
        }
    }

    pub fn set_search_query(&self, text: String) {
        self.search_query.set(text);
    }

    pub fn open_create_modal(&self) {
        self.create_modal_open.set(true);
    }

    pub fn close_create_modal(&self) {
        self.create_modal_open.set(false);
    }

    /// Constructs a new bot and appends it to the collection. Always
    /// succeeds; existing records are never touched, so display order is
    /// creation order.
    pub fn create_bot(&self, name: &str, is_public: bool) -> BotId {
        let id = BotId(self.next_id.get_untracked());
        self.next_id.update(|n| *n += 1);

        log::info!("creating bot {name:?} (public: {is_public})");

        self.bots.update(|bots| {
            bots.push(Bot {
                id,
                name: name.to_string(),
                status: BotStatus::Active,
                messages: 0,
                last_active: "Just now".to_string(),
                is_public,
            });
        });

        id
    }

    pub fn filtered_bots(&self) -> Vec<Bot> {
        filter_bots(&self.bots.get(), &self.search_query.get())
    }

    pub fn stats(&self) -> DashboardStats {
        DashboardStats::from_bots(&self.bots.get())
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────
// Landing page theme state
// ─────────────────────────────────────────────────────────

/// Font sizes cycled by the utility rail toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontSize {
    Small,
    #[default]
    Normal,
    Large,
}

impl FontSize {
    /// Advances circularly: normal -> large -> small -> normal.
    pub fn next(self) -> Self {
        match self {
            Self::Normal => Self::Large,
            Self::Large => Self::Small,
            Self::Small => Self::Normal,
        }
    }

    /// Root font size applied to the document for this setting.
    pub fn css_value(self) -> &'static str {
        match self {
            Self::Small => "14px",
            Self::Normal => "16px",
            Self::Large => "18px",
        }
    }
}

/// Theme state owned by the landing page container.
#[derive(Clone, Copy)]
pub struct ThemeState {
    pub dark_mode: RwSignal<bool>,
    pub font_size: RwSignal<FontSize>,
}

impl ThemeState {
    pub fn new() -> Self {
        Self {
            dark_mode: RwSignal::new(false),
            font_size: RwSignal::new(FontSize::default()),
        }
    }

    pub fn toggle_dark_mode(&self) {
        self.dark_mode.update(|v| *v = !*v);
        log::debug!("dark mode: {}", self.dark_mode.get_untracked());
    }

    pub fn cycle_font_size(&self) {
        self.font_size.update(|size| *size = size.next());
        log::debug!("font size: {:?}", self.font_size.get_untracked());
    }

    /// Applies the theme to the document: toggles the `dark` class on the
    /// root element and sets its inline font size. Reapplying the same
    /// theme is a no-op. Run from the page container's effect only.
    pub fn apply(&self) {
        apply_document_theme(self.dark_mode.get(), self.font_size.get());
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new()
    }
}

fn apply_document_theme(dark: bool, size: FontSize) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };

    let classes = root.class_list();
    let _ = if dark {
        classes.add_1("dark")
    } else {
        classes.remove_1("dark")
    };

    if let Some(html) = root.dyn_ref::<web_sys::HtmlElement>() {
        let _ = html.style().set_property("font-size", size.css_value());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bot(id: u64, name: &str) -> Bot {
        Bot {
            id: BotId(id),
            name: name.to_string(),
            status: BotStatus::Active,
            messages: 0,
            last_active: "Just now".to_string(),
            is_public: false,
        }
    }

    // ─────────────────────────────────────────────────────────
    // Bot list filter
    // ─────────────────────────────────────────────────────────

    #[test]
    fn test_filter_matches_case_insensitively() {
        let bots = vec![bot(1, "Rhode Island Helper"), bot(2, "Neighborhood Assistant")];

        let hits = filter_bots(&bots, "HELPER");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Rhode Island Helper");
    }

    #[test]
    fn test_filter_preserves_insertion_order() {
        let bots = vec![bot(1, "Sales Bot"), bot(2, "Support Desk"), bot(3, "Sales Helper")];

        let hits = filter_bots(&bots, "sales");
        let ids: Vec<_> = hits.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![BotId(1), BotId(3)]);
    }

    #[test]
    fn test_filter_empty_query_is_identity() {
        let bots = vec![bot(1, "A"), bot(2, "B")];
        assert_eq!(filter_bots(&bots, ""), bots);
    }

    #[test]
    fn test_filter_without_matches_is_empty() {
        let bots = vec![bot(1, "Support Bot")];
        assert!(filter_bots(&bots, "billing").is_empty());
        assert!(filter_bots(&[], "anything").is_empty());
    }

    #[test]
    fn test_filter_does_not_mutate_source() {
        let bots = vec![bot(1, "Support Bot")];
        let before = bots.clone();
        let _ = filter_bots(&bots, "sup");
        assert_eq!(bots, before);
    }

    // ─────────────────────────────────────────────────────────
    // Create-bot flow
    // ─────────────────────────────────────────────────────────

    #[test]
    fn test_create_bot_appends_with_creation_defaults() {
        let state = DashboardState::new();
        let before = state.bots.get_untracked();

        state.create_bot("Support Bot", true);

        let after = state.bots.get_untracked();
        assert_eq!(after.len(), before.len() + 1);
        // Prior collection is a strict prefix of the new one.
        assert_eq!(&after[..before.len()], &before[..]);

        let created = after.last().unwrap();
        assert_eq!(created.name, "Support Bot");
        assert_eq!(created.status, BotStatus::Active);
        assert_eq!(created.messages, 0);
        assert_eq!(created.last_active, "Just now");
        assert!(created.is_public);
        assert!(before.iter().all(|b| b.id != created.id));
    }

    #[test]
    fn test_create_bot_ids_stay_unique() {
        let state = DashboardState::new();
        state.create_bot("One", false);
        state.create_bot("Two", true);
        state.create_bot("Three", false);

        let bots = state.bots.get_untracked();
        let mut ids: Vec<_> = bots.iter().map(|b| b.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), bots.len());
    }

    #[test]
    fn test_ids_continue_after_seeded_samples() {
        let state = DashboardState::new();
        let id = state.create_bot("Fresh", false);
        let max_seeded = data::sample_bots().iter().map(|b| b.id).max().unwrap();
        assert!(id > max_seeded);
    }

    #[test]
    fn test_whitespace_name_is_not_submittable() {
        assert_eq!(submittable_name("   "), None);
        assert_eq!(submittable_name(""), None);
        assert_eq!(submittable_name("  Support Bot "), Some("Support Bot"));
    }

    #[test]
    fn test_search_narrows_the_visible_list() {
        let state = DashboardState::new();
        state.create_bot("Billing Bot", false);

        state.set_search_query("billing".to_string());
        let visible = state.filtered_bots();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Billing Bot");

        state.set_search_query(String::new());
        assert_eq!(state.filtered_bots(), state.bots.get_untracked());
    }

    // ─────────────────────────────────────────────────────────
    // Dashboard stats
    // ─────────────────────────────────────────────────────────

    #[test]
    fn test_stats_derive_from_collection() {
        let mut inactive = bot(3, "Archived");
        inactive.status = BotStatus::Inactive;
        inactive.messages = 10;
        let mut busy = bot(1, "Busy");
        busy.messages = 1234;

        let stats = DashboardStats::from_bots(&[busy, bot(2, "Quiet"), inactive]);
        assert_eq!(stats.total_bots, 3);
        assert_eq!(stats.active_bots, 2);
        assert_eq!(stats.total_messages, 1244);
    }

    #[test]
    fn test_thousands_separators() {
        assert_eq!(thousands(0), "0");
        assert_eq!(thousands(999), "999");
        assert_eq!(thousands(1234), "1,234");
        assert_eq!(thousands(1_234_567), "1,234,567");
    }

    // ─────────────────────────────────────────────────────────
    // Toggles
    // ─────────────────────────────────────────────────────────

    #[test]
    fn test_font_size_cycles_with_period_three() {
        assert_eq!(FontSize::Normal.next(), FontSize::Large);
        assert_eq!(FontSize::Large.next(), FontSize::Small);
        assert_eq!(FontSize::Normal.next().next().next(), FontSize::Normal);
    }

    #[test]
    fn test_dark_mode_toggle_is_an_involution() {
        let theme = ThemeState::new();
        let initial = theme.dark_mode.get_untracked();

        theme.toggle_dark_mode();
        assert_ne!(theme.dark_mode.get_untracked(), initial);
        theme.toggle_dark_mode();
        assert_eq!(theme.dark_mode.get_untracked(), initial);
    }

    #[test]
    fn test_accordion_keeps_at_most_one_item_open() {
        // First item open by default; clicking another moves the expansion.
        assert_eq!(toggle_expanded(Some(0), 2), Some(2));
        // Clicking the open item collapses it.
        assert_eq!(toggle_expanded(Some(2), 2), None);
        // Clicking with nothing open expands.
        assert_eq!(toggle_expanded(None, 1), Some(1));
    }
}
