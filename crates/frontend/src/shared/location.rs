//! Текущий адрес браузера

use web_sys::window;

/// `pathname` + `search` текущей страницы, пустая строка вне браузера
pub fn current_href() -> String {
    let Some(w) = window() else {
        return String::new();
    };
    format!(
        "{}{}",
        w.location().pathname().unwrap_or_default(),
        w.location().search().unwrap_or_default()
    )
}
