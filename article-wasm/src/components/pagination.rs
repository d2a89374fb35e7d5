use leptos::prelude::*;

use crate::pagination::{PageSlot, page_window};

/// Кнопки страниц вокруг текущей. При нуле или одной странице
/// не рендерится ничего.
#[component]
pub(crate) fn Pagination(
    current_page: u32,
    total_pages: u32,
    on_select: Callback<u32>,
) -> impl IntoView {
    if total_pages <= 1 {
        return ().into_any();
    }

    let current = current_page.clamp(1, total_pages);
    let slots = page_window(current, total_pages);

    view! {
        <nav class="pagination">
            <Show when=move || current > 1>
                <button
                    class="pagination-btn"
                    on:click=move |_| on_select.run(current - 1)
                >
                    "‹"
                </button>
            </Show>
            {slots
                .into_iter()
                .map(|slot| match slot {
                    PageSlot::Page(page) => {
                        let active = page == current;
                        view! {
                            <button
                                class="pagination-btn"
                                class:active=active
                                disabled=active
                                on:click=move |_| on_select.run(page)
                            >
                                {page}
                            </button>
                        }
                        .into_any()
                    }
                    PageSlot::Ellipsis => {
                        view! { <span class="pagination-dots">"..."</span> }.into_any()
                    }
                })
                .collect::<Vec<_>>()}
            <Show when=move || current < total_pages>
                <button
                    class="pagination-btn"
                    on:click=move |_| on_select.run(current + 1)
                >
                    "›"
                </button>
            </Show>
        </nav>
    }
    .into_any()
}
