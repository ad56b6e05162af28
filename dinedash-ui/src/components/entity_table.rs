//! Entity Table Component
//!
//! A table over any schema-backed entity, with row actions and a pager.

use leptos::*;

use dinedash::view::PAGE_SIZE_OPTIONS;
use dinedash::{Editable, Page};

/// One table column; `key` is passed to the cell renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub key: &'static str,
    pub label: &'static str,
}

impl Column {
    pub const fn new(key: &'static str, label: &'static str) -> Self {
        Self { key, label }
    }
}

/// Plain text cell from the entity's schema fields
pub fn text_cell<T: Editable>(item: &T, key: &'static str) -> View {
    item.read_field(key).unwrap_or_default().into_view()
}

/// Table with edit/delete (and optional details) actions per row
#[component]
pub fn EntityTable<T>(
    columns: &'static [Column],
    #[prop(into)]
    rows: Signal<Vec<T>>,
    /// Renders one cell
    render: fn(&T, &'static str) -> View,
    #[prop(into)]
    on_edit: Callback<u32>,
    #[prop(into)]
    on_delete: Callback<u32>,
    #[prop(optional, into)]
    on_show: Option<Callback<u32>>,
) -> impl IntoView
where
    T: Editable + 'static,
{
    let empty_message = format!("No {} records match the current filters", T::LABEL.to_lowercase());

    view! {
        <div class="overflow-x-auto">
            <table class="w-full text-sm">
                <thead>
                    <tr class="text-left text-[var(--muted-foreground)] border-b border-gray-200 dark:border-gray-800">
                        {columns
                            .iter()
                            .map(|column| view! { <th class="px-4 py-3 font-medium">{column.label}</th> })
                            .collect_view()}
                        <th class="px-4 py-3 font-medium text-right">"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let rows = rows.get();
                        if rows.is_empty() {
                            return view! {
                                <tr>
                                    <td
                                        colspan=(columns.len() + 1).to_string()
                                        class="px-4 py-8 text-center text-[var(--muted-foreground)]"
                                    >
                                        {empty_message.clone()}
                                    </td>
                                </tr>
                            }
                            .into_view();
                        }

                        rows.iter()
                            .map(|row| {
                                let id = *row.id();
                                view! {
                                    <tr class="border-b border-gray-100 dark:border-gray-800 hover:bg-gray-50 dark:hover:bg-gray-900">
                                        {columns
                                            .iter()
                                            .map(|column| view! { <td class="px-4 py-3">{render(row, column.key)}</td> })
                                            .collect_view()}
                                        <td class="px-4 py-3 text-right space-x-2 whitespace-nowrap">
                                            {on_show.map(|show| view! {
                                                <button
                                                    on:click=move |_| show.call(id)
                                                    class="text-[var(--secondary)] hover:underline"
                                                >
                                                    "View"
                                                </button>
                                            })}
                                            <button
                                                on:click=move |_| on_edit.call(id)
                                                class="text-[var(--primary)] hover:underline"
                                            >
                                                "Edit"
                                            </button>
                                            <button
                                                on:click=move |_| on_delete.call(id)
                                                class="text-[var(--error)] hover:underline"
                                            >
                                                "Delete"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </div>
    }
}

/// What the pager needs from a page, without borrowing its rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagerState {
    pub label: String,
    pub page_size: usize,
    pub has_prev: bool,
    pub has_next: bool,
}

impl PagerState {
    pub fn of<T>(page: &Page<T>) -> Self {
        Self {
            label: page.label(),
            page_size: page.page_size,
            has_prev: page.page > 0,
            has_next: page.page + 1 < page.page_count,
        }
    }
}

/// "Rows per page" selector with previous/next buttons
#[component]
pub fn Pager(
    #[prop(into)]
    state: Signal<PagerState>,
    #[prop(into)]
    on_prev: Callback<()>,
    #[prop(into)]
    on_next: Callback<()>,
    #[prop(into)]
    on_page_size: Callback<usize>,
) -> impl IntoView {
    view! {
        <div class="flex items-center justify-end space-x-6 px-4 py-3 text-sm text-[var(--muted-foreground)]">
            <label class="flex items-center space-x-2">
                <span>"Rows per page:"</span>
                <select
                    on:change=move |ev| {
                        if let Ok(size) = event_target_value(&ev).parse() {
                            on_page_size.call(size);
                        }
                    }
                    class="bg-transparent border border-gray-300 dark:border-gray-700 rounded px-2 py-1"
                >
                    {PAGE_SIZE_OPTIONS
                        .iter()
                        .map(|size| {
                            let size = *size;
                            view! {
                                <option
                                    value=size.to_string()
                                    selected=move || state.get().page_size == size
                                >
                                    {size}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </label>

            <span>{move || state.get().label}</span>

            <div class="space-x-1">
                <button
                    on:click=move |_| on_prev.call(())
                    disabled=move || !state.get().has_prev
                    class="px-2 py-1 rounded disabled:opacity-40 hover:bg-gray-100 dark:hover:bg-gray-800"
                >
                    "‹"
                </button>
                <button
                    on:click=move |_| on_next.call(())
                    disabled=move || !state.get().has_next
                    class="px-2 py-1 rounded disabled:opacity-40 hover:bg-gray-100 dark:hover:bg-gray-800"
                >
                    "›"
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dinedash::Pagination;

    #[test]
    fn test_pager_state_edges() {
        let items: Vec<u32> = (0..12).collect();
        let mut pagination = Pagination::new(5);

        let first = PagerState::of(&pagination.paginate(&items));
        assert!(!first.has_prev);
        assert!(first.has_next);
        assert_eq!(first.label, "1–5 of 12");

        pagination.set_page(2, items.len());
        let last = PagerState::of(&pagination.paginate(&items));
        assert!(last.has_prev);
        assert!(!last.has_next);
        assert_eq!(last.label, "11–12 of 12");
    }

    #[test]
    fn test_pager_state_empty() {
        let items: Vec<u32> = Vec::new();
        let state = PagerState::of(&Pagination::new(10).paginate(&items));
        assert!(!state.has_prev);
        assert!(!state.has_next);
        assert_eq!(state.label, "0–0 of 0");
    }
}
