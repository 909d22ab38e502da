use thiserror::Error;

/// A field the invoice layout prints unconditionally is absent.
///
/// `field` is a dotted path into the payload, e.g. `company.gstin`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("required field `{field}` is missing from the invoice payload")]
pub struct MissingFieldError {
    pub field: &'static str,
}

/// Borrows a required text field, failing when it is `None`.
pub fn required<'a>(
    value: &'a Option<String>,
    field: &'static str,
) -> Result<&'a str, MissingFieldError> {
    value.as_deref().ok_or(MissingFieldError { field })
}

/// Borrows a required list field, failing when it is `None`.
pub fn required_list<'a>(
    value: &'a Option<Vec<String>>,
    field: &'static str,
) -> Result<&'a [String], MissingFieldError> {
    value.as_deref().ok_or(MissingFieldError { field })
}
