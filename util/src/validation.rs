use validator::ValidationErrors;

/// Flattens field-level validation messages into a single `;`-separated string.
pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .values()
        .flat_map(|errs| {
            errs.iter()
                .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
        })
        .collect();
    messages.sort();
    messages.join("; ")
}
