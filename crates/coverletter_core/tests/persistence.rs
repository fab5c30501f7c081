use coverletter_core::{update, AppState, FormField, FormInputs, Msg, DEFAULT_WORD_COUNT};
use pretty_assertions::assert_eq;

fn init_logging() {
    letter_logging::initialize_for_tests();
}

fn filled_inputs() -> FormInputs {
    let mut inputs = FormInputs::new();
    inputs.set_field(FormField::ResumeUrl, "https://x/r.txt");
    inputs.set_field(FormField::JobDescriptionUrl, " https://jobs.example.com/1 ");
    inputs.set_field(FormField::JobDescriptionText, "Senior Engineer role...");
    inputs.set_field(FormField::WordCount, "450");
    inputs
}

#[test]
fn snapshot_round_trips_field_for_field() {
    init_logging();
    let saved = filled_inputs();
    let json = saved.to_snapshot_json().expect("serialize");

    assert_eq!(FormInputs::restore(Some(&json)), saved);
}

#[test]
fn snapshot_stores_word_count_as_number() {
    let json = filled_inputs().to_snapshot_json().expect("serialize");
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["word_count"], serde_json::json!(450));
    assert_eq!(value["resume_url"], "https://x/r.txt");
}

#[test]
fn string_word_count_loads_as_number() {
    init_logging();
    let restored = FormInputs::restore(Some(r#"{"resume_url":"r","word_count":"725"}"#));
    assert_eq!(restored.word_count(), 725);

    let json = restored.to_snapshot_json().unwrap();
    assert!(json.contains(r#""word_count":725"#), "{json}");
}

#[test]
fn missing_fields_keep_defaults() {
    init_logging();
    let restored = FormInputs::restore(Some(r#"{"job_description_url":"https://jd"}"#));

    assert_eq!(restored.resume_url(), "");
    assert_eq!(restored.job_description_url(), "https://jd");
    assert_eq!(restored.job_description_text(), "");
    assert_eq!(restored.word_count(), DEFAULT_WORD_COUNT);
}

#[test]
fn null_and_unusable_values_fall_back_to_defaults() {
    init_logging();
    let restored = FormInputs::restore(Some(
        r#"{"resume_url":null,"job_description_text":null,"word_count":"lots","extra":true}"#,
    ));
    assert_eq!(restored, FormInputs::new());

    let zero = FormInputs::restore(Some(r#"{"word_count":0}"#));
    assert_eq!(zero.word_count(), DEFAULT_WORD_COUNT);
}

#[test]
fn out_of_range_word_count_is_clamped_on_load() {
    init_logging();
    assert_eq!(FormInputs::restore(Some(r#"{"word_count":5000}"#)).word_count(), 1000);
    assert_eq!(FormInputs::restore(Some(r#"{"word_count":12}"#)).word_count(), 50);
    assert_eq!(FormInputs::restore(Some(r#"{"word_count":420.8}"#)).word_count(), 420);
}

#[test]
fn malformed_snapshot_falls_back_to_defaults() {
    init_logging();
    for raw in ["{not json", "42", "[]", "", r#""text""#] {
        assert_eq!(FormInputs::restore(Some(raw)), FormInputs::new(), "raw={raw:?}");
    }
    assert_eq!(FormInputs::restore(None), FormInputs::new());
}

#[test]
fn array_snapshot_is_not_restored_positionally() {
    init_logging();
    let restored = FormInputs::restore(Some(r#"["https://evil/r","https://jd","text",777]"#));

    assert_eq!(restored, FormInputs::new());
}

#[test]
fn one_bad_field_keeps_the_other_fields() {
    init_logging();
    let restored = FormInputs::restore(Some(
        r#"{"resume_url":"https://x/r.txt","job_description_text":"Senior Engineer role...","word_count":450,"job_description_url":false}"#,
    ));

    assert_eq!(restored.resume_url(), "https://x/r.txt");
    assert_eq!(restored.job_description_url(), "");
    assert_eq!(restored.job_description_text(), "Senior Engineer role...");
    assert_eq!(restored.word_count(), 450);
}

#[test]
fn wrongly_typed_string_field_falls_back_alone() {
    init_logging();
    let restored = FormInputs::restore(Some(r#"{"resume_url":7,"job_description_url":"https://jd"}"#));

    assert_eq!(restored.resume_url(), "");
    assert_eq!(restored.job_description_url(), "https://jd");
    assert_eq!(restored.word_count(), DEFAULT_WORD_COUNT);
}

#[test]
fn restoring_replaces_inputs_without_persisting() {
    init_logging();
    let (mut state, effects) = update(AppState::default(), Msg::InputsRestored(filled_inputs()));

    assert!(effects.is_empty());
    assert_eq!(state.inputs(), &filled_inputs());
    assert_eq!(state.view().inputs, filled_inputs());
    assert!(state.consume_dirty());
}
