//! Search box and recommendation method selector.

use crate::models::RecommendationMethod;

use super::html::escape;

/// Search form that navigates to the search results page
pub fn search_bar(query: &str) -> String {
    format!(
        r#"<form class="search-bar flex w-full max-w-md" action="/search" method="get"><input type="text" name="q" value="{}" placeholder="Search for movies..." class="flex-grow py-2 px-4 border border-gray-300 rounded-l-md" required><button type="submit" class="bg-blue-600 text-white py-2 px-6 rounded-r-md">Search</button></form>"#,
        escape(query)
    )
}

/// Search-as-you-type box of the home screen.
///
/// Without script it still submits `search` to the home page; with the live
/// session attached every keystroke is forwarded and debounced server-side.
pub fn live_search_input(value: &str) -> String {
    format!(
        r#"<form class="mb-4" action="/" method="get"><input id="live-search" type="text" name="search" value="{}" placeholder="Search for movies..." autocomplete="off" class="w-full px-4 py-2 border border-gray-300 rounded-lg"></form>"#,
        escape(value)
    )
}

/// Hybrid / Content-based / Collaborative buttons; `link` maps a method to its URL
pub fn method_selector(
    active: RecommendationMethod,
    link: impl Fn(RecommendationMethod) -> String,
) -> String {
    let buttons: String = RecommendationMethod::ALL
        .iter()
        .map(|method| {
            let state = if *method == active {
                r#" active bg-blue-600 text-white" aria-current="true"#
            } else {
                " bg-gray-100 text-gray-700"
            };
            format!(
                r#"<a class="method px-4 py-2 rounded-md text-sm{}" href="{}" title="{}" data-method="{}">{}</a>"#,
                state,
                escape(&link(*method)),
                escape(method.description()),
                method.as_str(),
                method.label()
            )
        })
        .collect();

    format!(
        r#"<div class="method-selector flex flex-col space-y-2"><p class="text-sm font-medium text-gray-700">Recommendation Method:</p><div class="flex space-x-2">{}</div></div>"#,
        buttons
    )
}
