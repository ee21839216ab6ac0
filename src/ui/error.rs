use ngharness::HarnessError;

pub fn format_error(err: &anyhow::Error) -> String {
    match err.downcast_ref::<HarnessError>() {
        Some(HarnessError::SelectionCancelled) => "No files selected. Aborted.\n".to_string(),
        _ => format!("[ERROR] {:#}\n", err),
    }
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let output = serde_json::json!({
            "event": "error",
            "message": format!("{:#}", err),
        });
        let _ = crate::ui::json::emit(output);
        return;
    }

    eprint!("{}", format_error(err));
}
