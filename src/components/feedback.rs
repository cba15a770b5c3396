//! Loading, error and empty-state indicators shared by every screen.

use super::html::escape;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SpinnerSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl SpinnerSize {
    fn class(&self) -> &'static str {
        match self {
            SpinnerSize::Small => "w-6 h-6",
            SpinnerSize::Medium => "w-10 h-10",
            SpinnerSize::Large => "w-16 h-16",
        }
    }
}

pub fn spinner(size: SpinnerSize) -> String {
    format!(
        r#"<div class="spinner flex justify-center items-center my-8" aria-busy="true"><div class="{} border-4 border-gray-200 border-t-blue-600 rounded-full animate-spin"></div></div>"#,
        size.class()
    )
}

/// Generic error banner; `message` is shown verbatim after the "Error!" heading
pub fn error_banner(message: &str) -> String {
    format!(
        r#"<div class="error-banner bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded" role="alert"><strong class="font-bold">Error!</strong> <span>{}</span></div>"#,
        escape(message)
    )
}

pub fn empty_state(message: &str) -> String {
    format!(
        r#"<div class="empty-state text-center py-12"><p class="text-gray-500">{}</p></div>"#,
        escape(message)
    )
}
