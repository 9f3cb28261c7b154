use validator::ValidationErrors;

pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .values()
        .flat_map(|errs| {
            errs.iter()
                .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
        })
        .collect::<Vec<_>>()
        .join("; ")
}

/// Flattens `ValidationErrors` into `(field, message)` pairs so handlers can
/// attach field-level messages alongside the joined summary.
pub fn collect_field_errors(errors: &ValidationErrors) -> Vec<(String, String)> {
    let mut out: Vec<(String, String)> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().filter_map(|e| {
                e.message
                    .as_ref()
                    .map(|m| (field.to_string(), m.to_string()))
            })
        })
        .collect();
    out.sort();
    out
}
