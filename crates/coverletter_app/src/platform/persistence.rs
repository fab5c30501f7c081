use coverletter_core::{FormInputs, SNAPSHOT_KEY};
use coverletter_engine::SnapshotStore;
use letter_logging::{letter_error, letter_info, letter_warn};

/// Reads the saved form once at startup. Storage errors and malformed
/// snapshots both end in the defaults.
pub(crate) fn load_inputs(store: &dyn SnapshotStore) -> FormInputs {
    match store.load(SNAPSHOT_KEY) {
        Ok(raw) => {
            let found = raw.is_some();
            let inputs = FormInputs::restore(raw.as_deref());
            if found {
                letter_info!("Loaded saved form inputs");
            }
            inputs
        }
        Err(err) => {
            letter_warn!("Failed to read saved form inputs: {}", err);
            FormInputs::default()
        }
    }
}

pub(crate) fn snapshot_text(inputs: &FormInputs) -> Option<String> {
    match inputs.to_snapshot_json() {
        Ok(text) => Some(text),
        Err(err) => {
            letter_error!("Failed to serialize form inputs: {}", err);
            None
        }
    }
}
