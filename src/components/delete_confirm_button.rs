//! Delete Confirm Button Component
//!
//! Deleting a row also removes everything nested under it, so the prompt
//! states how many rows go.

use leptos::prelude::*;

/// Prompt shown once Delete is clicked
pub fn confirm_prompt(rows: usize) -> String {
    match rows {
        0 | 1 => "Delete this row?".to_string(),
        n => format!("Delete {} rows?", n),
    }
}

/// Inline delete with a row-count confirmation
///
/// # Arguments
/// * `rows` - size of the subtree removed, the row itself included
/// * `on_confirm` - runs after the user confirms
#[component]
pub fn DeleteConfirmButton(rows: usize, #[prop(into)] on_confirm: Callback<()>) -> impl IntoView {
    let (armed, set_armed) = signal(false);
    let prompt = confirm_prompt(rows);

    move || {
        if armed.get() {
            view! {
                <span class="delete-confirm">
                    <span class="delete-confirm-text">{prompt.clone()}</span>
                    <button
                        class="btn confirm-btn"
                        on:click=move |_| {
                            set_armed.set(false);
                            on_confirm.run(());
                        }
                    >
                        "✓"
                    </button>
                    <button class="btn cancel-btn" on:click=move |_| set_armed.set(false)>
                        "✗"
                    </button>
                </span>
            }
            .into_any()
        } else {
            view! {
                <button class="btn btn-delete" on:click=move |_| set_armed.set(true)>
                    "Delete"
                </button>
            }
            .into_any()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirm_prompt_counts_subtree() {
        assert_eq!(confirm_prompt(1), "Delete this row?");
        assert_eq!(confirm_prompt(4), "Delete 4 rows?");
    }
}
