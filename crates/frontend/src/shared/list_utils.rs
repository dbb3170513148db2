//! List helpers: search highlighting and the debounced search box

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Delay between the last keystroke and the query update
pub const SEARCH_DEBOUNCE_MS: i32 = 300;

/// Split `text` into `(segment, is_match)` parts for a case-insensitive query
///
/// Matching runs on the per-character lowercase expansion of `text`, so every
/// span starts and ends on a character boundary of the original text. A match
/// that would cover only part of one character's expansion is not marked.
pub fn highlight_segments(text: &str, query: &str) -> Vec<(String, bool)> {
    let needle: Vec<char> = query.chars().flat_map(char::to_lowercase).collect();
    if needle.is_empty() {
        return vec![(text.to_string(), false)];
    }

    // (byte start, byte end, lowercase char, first char of its source char)
    let mut folded: Vec<(usize, usize, char, bool)> = Vec::with_capacity(text.len());
    for (start, ch) in text.char_indices() {
        let end = start + ch.len_utf8();
        for (k, lower) in ch.to_lowercase().enumerate() {
            folded.push((start, end, lower, k == 0));
        }
    }

    let mut parts = Vec::new();
    let mut last = 0;
    let mut i = 0;
    while i + needle.len() <= folded.len() {
        let window = &folded[i..i + needle.len()];
        let starts_on_char = window[0].3;
        let ends_on_char = folded.get(i + needle.len()).map_or(true, |next| next.3);
        let same = window.iter().zip(&needle).all(|(f, n)| f.2 == *n);
        if !(starts_on_char && ends_on_char && same) {
            i += 1;
            continue;
        }
        let start = window[0].0;
        let end = window[needle.len() - 1].1;
        if start > last {
            parts.push((text[last..start].to_string(), false));
        }
        parts.push((text[start..end].to_string(), true));
        last = end;
        i += needle.len();
    }

    if parts.is_empty() {
        return vec![(text.to_string(), false)];
    }
    if last < text.len() {
        parts.push((text[last..].to_string(), false));
    }
    parts
}

/// Text with query matches wrapped in `<mark>`
pub fn highlight_matches(text: &str, query: &str) -> AnyView {
    let parts: Vec<AnyView> = highlight_segments(text, query)
        .into_iter()
        .map(|(segment, is_match)| {
            if is_match {
                view! { <mark class="search-highlight">{segment}</mark> }.into_any()
            } else {
                view! { <span>{segment}</span> }.into_any()
            }
        })
        .collect();
    view! { <>{parts}</> }.into_any()
}

/// Search box with 300 ms debounce and a clear button
#[component]
pub fn SearchInput(
    /// Applied query (after debounce)
    #[prop(into)]
    value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    let input_value = RwSignal::new(value.get_untracked());
    let pending_timeout = StoredValue::new(None::<i32>);

    let cancel_pending = move || {
        if let Some(handle) = pending_timeout.get_value() {
            if let Some(window) = web_sys::window() {
                window.clear_timeout_with_handle(handle);
            }
            pending_timeout.set_value(None);
        }
    };

    let handle_input = move |new_value: String| {
        input_value.set(new_value.clone());
        cancel_pending();

        let Some(window) = web_sys::window() else {
            on_change.run(new_value);
            return;
        };
        let callback = Closure::once_into_js(move || {
            pending_timeout.set_value(None);
            on_change.run(new_value);
        });
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref::<js_sys::Function>(),
            SEARCH_DEBOUNCE_MS,
        ) {
            Ok(handle) => pending_timeout.set_value(Some(handle)),
            Err(e) => log::warn!("search debounce timer failed: {:?}", e),
        }
    };

    let clear = move |_| {
        cancel_pending();
        input_value.set(String::new());
        on_change.run(String::new());
    };

    on_cleanup(cancel_pending);

    let is_active = move || !value.get().is_empty();

    view! {
        <div class="search-input">
            <span class="search-input__icon">{crate::shared::icons::icon("search")}</span>
            <input
                type="text"
                class=move || if is_active() { "search-input__field search-input__field--active" } else { "search-input__field" }
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" title="Clear" on:click=clear>
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segments_mark_every_match() {
        let parts = highlight_segments("Abc and abc", "ABC");
        assert_eq!(
            parts,
            vec![
                ("Abc".to_string(), true),
                (" and ".to_string(), false),
                ("abc".to_string(), true),
            ]
        );
    }

    #[test]
    fn test_empty_or_missing_query_is_one_plain_segment() {
        assert_eq!(highlight_segments("Welder", ""), vec![("Welder".to_string(), false)]);
        assert_eq!(highlight_segments("Welder", "xyz"), vec![("Welder".to_string(), false)]);
    }

    #[test]
    fn test_whitespace_is_part_of_the_query() {
        assert_eq!(
            highlight_segments("Senior Welder", "Welder "),
            vec![("Senior Welder".to_string(), false)]
        );
        let parts = highlight_segments("Senior Welder", "r w");
        assert_eq!(parts[1], ("r W".to_string(), true));
    }

    #[test]
    fn test_lowercase_length_changes_keep_char_boundaries() {
        // U+0130 lowercases to two chars, U+212A (Kelvin) to ASCII 'k'
        let parts = highlight_segments("\u{130}\u{130}\u{212A}", "k");
        assert_eq!(
            parts,
            vec![
                ("\u{130}\u{130}".to_string(), false),
                ("\u{212A}".to_string(), true),
            ]
        );
        assert_eq!(
            highlight_segments("\u{130}stanbul", "i"),
            vec![("\u{130}stanbul".to_string(), false)]
        );
        assert_eq!(highlight_segments("\u{130}x", "\u{130}")[0], ("\u{130}".to_string(), true));
    }
}
