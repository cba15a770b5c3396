//! Page navigation control.
//!
//! Every link the control renders targets a page inside `[1, total_pages]`;
//! the Previous/Next buttons on the first/last page render disabled instead.

use super::html::escape;

/// Number of page buttons shown before the window collapses with ellipses
const MAX_PAGES_SHOWN: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(u32),
    Ellipsis,
}

/// Clamps a requested page into `[1, total_pages]`
pub fn clamp_page(page: u32, total_pages: u32) -> u32 {
    page.clamp(1, total_pages.max(1))
}

/// Page buttons to show for `current` out of `total_pages`
pub fn page_items(current: u32, total_pages: u32) -> Vec<PageItem> {
    let total = total_pages.max(1);
    let current = clamp_page(current, total);

    if total <= MAX_PAGES_SHOWN {
        return (1..=total).map(PageItem::Page).collect();
    }

    let mut items = Vec::with_capacity(7);
    if current <= 3 {
        items.extend((1..=3).map(PageItem::Page));
        items.push(PageItem::Ellipsis);
        items.push(PageItem::Page(total));
    } else if current >= total - 2 {
        items.push(PageItem::Page(1));
        items.push(PageItem::Ellipsis);
        items.extend((total - 2..=total).map(PageItem::Page));
    } else {
        items.push(PageItem::Page(1));
        items.push(PageItem::Ellipsis);
        items.extend((current - 1..=current + 1).map(PageItem::Page));
        items.push(PageItem::Ellipsis);
        items.push(PageItem::Page(total));
    }
    items
}

fn nav_button(label: &str, target: Option<(u32, String)>) -> String {
    match target {
        Some((page, link)) => format!(
            r#"<a class="page-nav px-4 py-2 rounded text-blue-600" href="{}" data-page="{}">{}</a>"#,
            escape(&link),
            page,
            label
        ),
        None => format!(
            r#"<span class="page-nav disabled px-4 py-2 rounded text-gray-400" aria-disabled="true">{}</span>"#,
            label
        ),
    }
}

/// Renders the control. `link` maps a page number to the URL that shows it.
/// Renders nothing when everything fits on one page.
pub fn pagination(current: u32, total_pages: u32, link: impl Fn(u32) -> String) -> String {
    let total = total_pages.max(1);
    if total <= 1 {
        return String::new();
    }
    let current = clamp_page(current, total);

    let previous = (current > 1).then(|| (current - 1, link(current - 1)));
    let next = (current < total).then(|| (current + 1, link(current + 1)));

    let mut html = String::from(
        r#"<nav class="pagination flex justify-center items-center space-x-2 py-4">"#,
    );
    html.push_str(&nav_button("Previous", previous));

    for item in page_items(current, total) {
        match item {
            PageItem::Ellipsis => html.push_str(r#"<span class="ellipsis px-2">...</span>"#),
            PageItem::Page(page) if page == current => html.push_str(&format!(
                r#"<span class="page current w-10 h-10 rounded-full bg-blue-600 text-white" aria-current="page">{}</span>"#,
                page
            )),
            PageItem::Page(page) => html.push_str(&format!(
                r#"<a class="page w-10 h-10 rounded-full text-blue-600" href="{}" data-page="{}">{}</a>"#,
                escape(&link(page)),
                page,
                page
            )),
        }
    }

    html.push_str(&nav_button("Next", next));
    html.push_str("</nav>");
    html
}
