use coverletter_core::{AppViewModel, FormField};

const PLACEHOLDER: &str = "Your cover letter will appear here after generation.";
const LOADING: &str = "AI is crafting your perfect letter...";
const PREVIEW_CHARS: usize = 60;

/// Renders the view model as terminal lines.
pub fn render(view: &AppViewModel) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("== 1. Input Sources & Constraints ==".to_string());
    for field in FormField::ALL {
        lines.push(format!(
            "  {:<21} {}",
            field.name(),
            field_summary(field, &view.inputs.value(field))
        ));
    }
    let availability = if view.can_generate {
        ""
    } else {
        " (unavailable)"
    };
    lines.push(format!("  [{}]{}", view.generate_label, availability));

    lines.push("== 2. Generated Output ==".to_string());
    if let Some(error) = &view.error {
        lines.push("Error:".to_string());
        lines.extend(error.lines().map(|line| format!("  {line}")));
    }
    if view.loading {
        lines.push(format!("  {LOADING}"));
    }
    if let Some(letter) = &view.cover_letter {
        lines.push(format!("  [{}]", view.copy_ack.unwrap_or("Copy Letter")));
        lines.extend(letter.lines().map(ToOwned::to_owned));
    }
    if view.show_placeholder {
        lines.push(format!("  {PLACEHOLDER}"));
    }

    lines
}

fn field_summary(field: FormField, value: &str) -> String {
    if value.is_empty() {
        return "(empty)".to_string();
    }
    match field {
        FormField::JobDescriptionText => {
            let chars = value.chars().count();
            let first_line = value.lines().find(|line| !line.trim().is_empty()).unwrap_or("");
            let mut preview: String = first_line.chars().take(PREVIEW_CHARS).collect();
            if first_line.chars().count() > PREVIEW_CHARS {
                preview.push_str("...");
            }
            format!("({chars} chars) {preview}")
        }
        _ => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use coverletter_core::{update, AppState, Endpoint, Msg};

    use super::*;

    fn edit(state: AppState, field: FormField, value: &str) -> AppState {
        update(
            state,
            Msg::FieldEdited {
                field,
                value: value.to_string(),
            },
        )
        .0
    }

    fn ready() -> AppState {
        let state = AppState::new(Endpoint::new("https://letters.example.com/generate"));
        let state = edit(state, FormField::ResumeUrl, "https://x/r.txt");
        edit(
            state,
            FormField::JobDescriptionText,
            "\nSenior Engineer role at a company building storage engines in Rust\nMore",
        )
    }

    #[test]
    fn idle_form_shows_placeholder_and_fields() {
        let lines = render(&AppState::default().view());

        assert!(lines.iter().any(|l| l.contains("resume_url") && l.contains("(empty)")));
        assert!(lines.iter().any(|l| l.contains("word_count") && l.ends_with("300")));
        assert!(lines.contains(&"  [Generate Cover Letter] (unavailable)".to_string()));
        assert!(lines.iter().any(|l| l.contains(PLACEHOLDER)));
    }

    #[test]
    fn long_job_text_is_previewed() {
        let lines = render(&ready().view());
        let jd = lines
            .iter()
            .find(|l| l.contains("job_description_text"))
            .unwrap();

        assert!(jd.contains("(72 chars) Senior Engineer role"));
        assert!(jd.ends_with("..."));
        assert!(lines.contains(&"  [Generate Cover Letter]".to_string()));
    }

    #[test]
    fn loading_hides_placeholder() {
        let (state, _) = update(ready(), Msg::GenerateClicked);
        let lines = render(&state.view());

        assert!(lines.contains(&"  [Generating Letter...] (unavailable)".to_string()));
        assert!(lines.iter().any(|l| l.contains(LOADING)));
        assert!(!lines.iter().any(|l| l.contains(PLACEHOLDER)));
    }

    #[test]
    fn letter_and_copy_ack_are_shown() {
        let (state, _) = update(ready(), Msg::GenerateClicked);
        let (state, _) = update(
            state,
            Msg::GenerationSucceeded {
                cover_letter: "Dear Hiring Manager,\nI am writing...".to_string(),
            },
        );
        let lines = render(&state.view());
        assert!(lines.contains(&"  [Copy Letter]".to_string()));
        assert!(lines.contains(&"Dear Hiring Manager,".to_string()));

        let (state, _) = update(state, Msg::CopyFinished { copied: true });
        assert!(render(&state.view()).contains(&"  [Copied!]".to_string()));
    }

    #[test]
    fn errors_are_shown_verbatim() {
        let state = edit(AppState::default(), FormField::JobDescriptionUrl, "https://jd");
        let (state, _) = update(state, Msg::GenerateClicked);
        let lines = render(&state.view());

        assert!(lines.contains(&"Error:".to_string()));
        assert!(lines.contains(&"  Please provide a Resume URL.".to_string()));
        assert!(!lines.iter().any(|l| l.contains(PLACEHOLDER)));
    }
}
