//! Stat Card Component
//!
//! Headline value with its change label and trend arrow.

use leptos::*;

use dinedash::analytics::StatCard;
use dinedash::model::ChangeDirection;

pub fn trend(direction: ChangeDirection) -> (&'static str, &'static str) {
    match direction {
        ChangeDirection::Up => ("↑", "text-green-500"),
        ChangeDirection::Down => ("↓", "text-red-500"),
        ChangeDirection::Flat => ("→", "text-[var(--muted-foreground)]"),
    }
}

#[component]
pub fn StatCardView(card: StatCard) -> impl IntoView {
    let (arrow, color) = trend(card.direction);

    view! {
        <div
            class="bg-[var(--paper)] rounded-xl p-5 shadow-sm border-l-4"
            style=format!("border-left-color: {}", card.color)
        >
            <div class="text-sm text-[var(--muted-foreground)]">{card.title}</div>
            <div class="text-3xl font-bold mt-2">{card.value}</div>
            <div class=format!("text-sm mt-2 {}", color)>
                {arrow}
                " "
                {card.change}
                <span class="text-[var(--muted-foreground)]">" from last month"</span>
            </div>
        </div>
    }
}
