use campus_config::CompatConfig;
use campus_core::AppError;

/// Answers an empty collection with "not found" when the compat switch asks for it.
pub fn non_empty<T>(rows: Vec<T>, compat: &CompatConfig, message: &str) -> Result<Vec<T>, AppError> {
    if rows.is_empty() && compat.empty_list_is_error {
        return Err(AppError::not_found(message));
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_core::ErrorKind;

    #[test]
    fn test_empty_list_is_not_found_by_default() {
        let compat = CompatConfig::default();
        let err = non_empty::<i32>(vec![], &compat, "No hay nada.").unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
        assert_eq!(err.client_message(), "No hay nada.");
    }

    #[test]
    fn test_empty_list_allowed_when_switched_off() {
        let compat = CompatConfig {
            empty_list_is_error: false,
            ..CompatConfig::default()
        };
        assert_eq!(non_empty::<i32>(vec![], &compat, "x").unwrap(), Vec::<i32>::new());
    }

    #[test]
    fn test_rows_pass_through() {
        let compat = CompatConfig::default();
        assert_eq!(non_empty(vec![1, 2], &compat, "x").unwrap(), vec![1, 2]);
    }
}
