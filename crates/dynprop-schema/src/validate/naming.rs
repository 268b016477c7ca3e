use crate::{MAX_PROPERTY_NAME_LEN, MAX_TYPE_PATH_LEN};

/// Ensure a property identifier is a plausible Rust field name.
pub(crate) fn validate_ident(ident: &str) -> Result<(), String> {
    if ident.is_empty() {
        return Err("ident is empty".to_string());
    }
    if ident.len() > MAX_PROPERTY_NAME_LEN {
        return Err(format!(
            "ident '{ident}' exceeds max length {MAX_PROPERTY_NAME_LEN}"
        ));
    }
    if !ident.is_ascii() {
        return Err(format!("ident '{ident}' must be ASCII"));
    }

    let mut chars = ident.chars();
    let first = chars.next().unwrap_or_default();
    if !(first.is_ascii_alphabetic() || first == '_') {
        return Err(format!("ident '{ident}' must start with a letter or '_'"));
    }
    if let Some(bad) = chars.find(|c| !(c.is_ascii_alphanumeric() || *c == '_')) {
        return Err(format!("ident '{ident}' contains invalid character '{bad}'"));
    }

    Ok(())
}

/// Ensure a type path is `::`-separated idents, each valid on its own.
pub(crate) fn validate_type_path(path: &str) -> Result<(), String> {
    if path.is_empty() {
        return Err("type path is empty".to_string());
    }
    if path.len() > MAX_TYPE_PATH_LEN {
        return Err(format!(
            "type path '{path}' exceeds max length {MAX_TYPE_PATH_LEN}"
        ));
    }

    for segment in path.split("::") {
        if segment == "crate" || segment == "super" || segment == "self" {
            continue;
        }
        validate_ident(segment).map_err(|err| format!("in type path '{path}': {err}"))?;
    }

    Ok(())
}
