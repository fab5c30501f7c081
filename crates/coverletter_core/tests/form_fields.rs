use coverletter_core::{
    clamp_word_count, coerce_word_count, update, AppState, Effect, FormField, FormInputs, Msg,
    DEFAULT_WORD_COUNT, MAX_WORD_COUNT, MIN_WORD_COUNT,
};

fn edit(state: AppState, field: FormField, value: &str) -> (AppState, Vec<Effect>) {
    update(
        state,
        Msg::FieldEdited {
            field,
            value: value.to_string(),
        },
    )
}

#[test]
fn clamp_stays_in_range_and_is_idempotent() {
    let samples = [
        i64::MIN,
        -1_000_000,
        -1,
        0,
        1,
        49,
        50,
        51,
        300,
        999,
        1000,
        1001,
        123_456_789,
        i64::MAX,
    ];
    for n in samples.into_iter().chain(-2000..2000) {
        let clamped = clamp_word_count(n);
        assert!((MIN_WORD_COUNT..=MAX_WORD_COUNT).contains(&clamped), "n={n}");
        assert_eq!(clamp_word_count(i64::from(clamped)), clamped, "n={n}");
    }
}

#[test]
fn word_count_coercion_parses_leading_integer() {
    assert_eq!(coerce_word_count("450"), 450);
    assert_eq!(coerce_word_count("  275"), 275);
    assert_eq!(coerce_word_count("+600"), 600);
    assert_eq!(coerce_word_count("320 words"), 320);
    assert_eq!(coerce_word_count("12.9"), 50);
    assert_eq!(coerce_word_count("5000"), 1000);
    assert_eq!(coerce_word_count("-20"), 50);
    assert_eq!(coerce_word_count("99999999999999999999999"), 1000);
}

#[test]
fn non_numeric_word_count_falls_to_lower_bound() {
    for raw in ["", "abc", "  ", "-", "words 300"] {
        assert_eq!(coerce_word_count(raw), MIN_WORD_COUNT, "raw={raw:?}");
    }
}

#[test]
fn string_fields_are_stored_verbatim() {
    let mut inputs = FormInputs::new();
    inputs.set_field(FormField::ResumeUrl, "  https://x/r.txt  ");
    inputs.set_field(FormField::JobDescriptionText, "\nSenior Engineer\n");

    assert_eq!(inputs.resume_url(), "  https://x/r.txt  ");
    assert_eq!(inputs.job_description_text(), "\nSenior Engineer\n");
    assert_eq!(inputs.word_count(), DEFAULT_WORD_COUNT);
}

#[test]
fn every_edit_persists_the_new_full_snapshot() {
    let state = AppState::default();
    let (state, effects) = edit(state, FormField::ResumeUrl, "https://x/r.txt");
    let (mut state, second) = edit(state, FormField::WordCount, "20");

    assert_eq!(effects.len(), 1);
    let Effect::PersistInputs { snapshot } = &second[0] else {
        panic!("expected persist effect, got {second:?}");
    };
    assert_eq!(snapshot.resume_url(), "https://x/r.txt");
    assert_eq!(snapshot.word_count(), MIN_WORD_COUNT);
    assert_eq!(snapshot, state.inputs());
    assert!(state.consume_dirty());
    assert!(!state.consume_dirty());
}

#[test]
fn field_names_parse_and_unknown_names_are_rejected() {
    for field in FormField::ALL {
        assert_eq!(field.name().parse::<FormField>(), Ok(field));
    }
    let err = "cover_letter".parse::<FormField>().unwrap_err();
    assert_eq!(err.to_string(), "unknown form field `cover_letter`");
}
