use leptos::ev;
use leptos::prelude::*;

/// Trims the raw form fields. A blank title rejects the submission; a blank
/// description becomes `None`.
pub fn form_values(title: &str, description: &str) -> Option<(String, Option<String>)> {
    let title = title.trim();
    if title.is_empty() {
        return None;
    }
    let description = description.trim();
    let description = (!description.is_empty()).then(|| description.to_string());
    Some((title.to_string(), description))
}

// Shared by the per-column add form and the inline card editor
#[component]
pub fn TaskForm(
    #[prop(optional, into)] initial_title: String,
    #[prop(optional, into)] initial_description: String,
    #[prop(default = "ADD")] submit_label: &'static str,
    on_submit: Callback<(String, Option<String>)>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let (title, set_title) = signal(initial_title);
    let (description, set_description) = signal(initial_description);

    let handle_submit = move |ev: ev::SubmitEvent| {
        // Prevent the default form submission behavior (page reload)
        ev.prevent_default();

        let Some(values) = form_values(&title.get_untracked(), &description.get_untracked()) else {
            return;
        };
        on_submit.run(values);

        // Reset form fields to empty state after successful submission
        set_title.set(String::new());
        set_description.set(String::new());
    };

    view! {
        <form class="task-form" on:submit=handle_submit>
            <div class="form-group">
                <label>"TITLE"</label>
                <input
                    type="text"
                    placeholder="Task title..."
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                    prop:value=move || title.get()
                    required
                />
            </div>
            <div class="form-group">
                <label>"DESCRIPTION"</label>
                <textarea
                    placeholder="Task description..."
                    rows="3"
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                    prop:value=move || description.get()
                ></textarea>
            </div>
            <div class="form-actions">
                <button type="button" class="btn-secondary" on:click=move |_| on_cancel.run(())>"CANCEL"</button>
                <button type="submit" class="btn-primary">{submit_label}</button>
            </div>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("  Plan sprint ", " ", Some(("Plan sprint".to_string(), None)))]
    #[case("Plan", " agenda\n", Some(("Plan".to_string(), Some("agenda".to_string()))))]
    #[case("   ", "ignored", None)]
    #[case("", "", None)]
    fn form_values_trim_and_require_title(
        #[case] title: &str,
        #[case] description: &str,
        #[case] expected: Option<(String, Option<String>)>,
    ) {
        assert_eq!(form_values(title, description), expected);
    }
}
