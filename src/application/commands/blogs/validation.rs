use crate::{
    application::error::FieldErrors,
    domain::{blog::BlogSlug, errors::DomainResult},
};

pub(super) const REQUIRED: &str = "this field is required";

pub(super) fn required<T>(
    errors: &mut FieldErrors,
    field: &str,
    value: Option<String>,
    parse: impl FnOnce(String) -> DomainResult<T>,
) -> Option<T> {
    if value.is_none() {
        errors.push(field, REQUIRED);
        return None;
    }
    optional(errors, field, value, parse)
}

pub(super) fn optional<T>(
    errors: &mut FieldErrors,
    field: &str,
    value: Option<String>,
    parse: impl FnOnce(String) -> DomainResult<T>,
) -> Option<T> {
    match parse(value?) {
        Ok(parsed) => Some(parsed),
        Err(err) => {
            errors.push_domain(field, err);
            None
        }
    }
}

/// A blank slug counts as "not supplied".
pub(super) fn explicit_slug(errors: &mut FieldErrors, value: Option<String>) -> Option<BlogSlug> {
    let value = value.filter(|slug| !slug.trim().is_empty());
    optional(errors, "slug", value, BlogSlug::new)
}
