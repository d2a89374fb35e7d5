/// Размер страницы списка статей в UI.
pub(crate) const PAGE_SIZE: u32 = 6;

/// Сколько последовательных номеров страниц показывать вокруг текущей.
const VISIBLE_PAGES: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PageSlot {
    Page(u32),
    Ellipsis,
}

pub(crate) fn total_pages(total: u64, page_size: u32) -> u32 {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(u64::from(page_size)) as u32
}

/// Окно номеров страниц вокруг `current`: до пяти подряд, плюс первая и
/// последняя страница как якоря с многоточием на разрыве. Номера никогда
/// не выходят за `[1, total_pages]`, даже если `current` запределен.
pub(crate) fn page_window(current: u32, total_pages: u32) -> Vec<PageSlot> {
    if total_pages == 0 {
        return Vec::new();
    }

    let current = current.clamp(1, total_pages);
    let mut start = current.saturating_sub(VISIBLE_PAGES / 2).max(1);
    let end = (start + VISIBLE_PAGES - 1).min(total_pages);
    if end - start + 1 < VISIBLE_PAGES {
        start = end.saturating_sub(VISIBLE_PAGES - 1).max(1);
    }

    let mut slots = Vec::new();
    if start > 1 {
        slots.push(PageSlot::Page(1));
        if start > 2 {
            slots.push(PageSlot::Ellipsis);
        }
    }
    for page in start..=end {
        slots.push(PageSlot::Page(page));
    }
    if end < total_pages {
        if end < total_pages - 1 {
            slots.push(PageSlot::Ellipsis);
        }
        slots.push(PageSlot::Page(total_pages));
    }

    slots
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages(slots: &[PageSlot]) -> Vec<u32> {
        slots
            .iter()
            .filter_map(|slot| match slot {
                PageSlot::Page(page) => Some(*page),
                PageSlot::Ellipsis => None,
            })
            .collect()
    }

    #[test]
    fn total_pages_is_ceiling_division() {
        assert_eq!(total_pages(0, 6), 0);
        assert_eq!(total_pages(1, 6), 1);
        assert_eq!(total_pages(6, 6), 1);
        assert_eq!(total_pages(7, 6), 2);
        assert_eq!(total_pages(12, 6), 2);
        assert_eq!(total_pages(13, 6), 3);
    }

    #[test]
    fn total_pages_handles_zero_page_size() {
        assert_eq!(total_pages(100, 0), 0);
    }

    #[test]
    fn empty_result_renders_no_slots() {
        assert!(page_window(1, 0).is_empty());
    }

    #[test]
    fn thirteen_articles_give_three_pages_around_page_two() {
        let slots = page_window(2, total_pages(13, 6));
        assert_eq!(pages(&slots), vec![1, 2, 3]);
    }

    #[test]
    fn window_is_contiguous_for_small_totals() {
        assert_eq!(pages(&page_window(1, 1)), vec![1]);
        assert_eq!(pages(&page_window(3, 5)), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn leading_anchor_and_ellipsis_appear_for_late_pages() {
        let slots = page_window(10, 10);
        assert_eq!(
            slots,
            vec![
                PageSlot::Page(1),
                PageSlot::Ellipsis,
                PageSlot::Page(6),
                PageSlot::Page(7),
                PageSlot::Page(8),
                PageSlot::Page(9),
                PageSlot::Page(10),
            ]
        );
    }

    #[test]
    fn both_anchors_appear_for_middle_pages() {
        let slots = page_window(5, 10);
        assert_eq!(
            slots,
            vec![
                PageSlot::Page(1),
                PageSlot::Ellipsis,
                PageSlot::Page(3),
                PageSlot::Page(4),
                PageSlot::Page(5),
                PageSlot::Page(6),
                PageSlot::Page(7),
                PageSlot::Ellipsis,
                PageSlot::Page(10),
            ]
        );
    }

    #[test]
    fn trailing_anchor_appears_for_early_pages() {
        let slots = page_window(1, 10);
        assert_eq!(pages(&slots), vec![1, 2, 3, 4, 5, 10]);
    }

    #[test]
    fn out_of_range_current_stays_within_bounds() {
        let slots = page_window(99, 3);
        assert_eq!(pages(&slots), vec![1, 2, 3]);
    }

    #[test]
    fn window_never_emits_pages_outside_bounds() {
        for total in 0..=20u64 {
            let t = total_pages(total, 6);
            for current in 1..=25u32 {
                for page in pages(&page_window(current, t)) {
                    assert!(
                        (1..=t).contains(&page),
                        "page {page} outside [1, {t}] for current={current}, total={total}"
                    );
                }
            }
        }
    }
}
