mod groups;
mod users;

pub use groups::*;
pub use users::*;

use std::collections::BTreeMap;

use askama::Template;
use axum::response::Html;
use validator::{Validate, ValidationErrors};

use crate::error::AppError;

pub type HtmlResult = Result<Html<String>, AppError>;

pub fn render<T: Template>(template: &T) -> HtmlResult {
    Ok(Html(template.render()?))
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorView {
    pub message: Option<String>,
    pub status: u16,
}

/// First validation message per form field.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn of<T: Validate>(model: &T) -> Self {
        match model.validate() {
            Ok(()) => Self::default(),
            Err(errors) => Self::from(&errors),
        }
    }

    pub fn insert(&mut self, field: &str, message: &str) {
        self.0
            .entry(field.to_string())
            .or_insert_with(|| message.to_string());
    }

    /// Adds the messages of `other` for fields that have none yet.
    pub fn merge(&mut self, other: FieldErrors) {
        for (field, message) in other.0 {
            self.0.entry(field).or_insert(message);
        }
    }

    pub fn get(&self, field: &str) -> &str {
        self.0.get(field).map_or("", String::as_str)
    }

    pub fn has(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&ValidationErrors> for FieldErrors {
    fn from(errors: &ValidationErrors) -> Self {
        let mut fields = Self::default();
        for (field, errs) in errors.field_errors() {
            let field = field.to_string();
            let message = errs
                .iter()
                .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
                .unwrap_or_else(|| format!("Invalid value for {field}."));
            fields.insert(&field, &message);
        }
        fields
    }
}

/// An `<option>` of a `<select>` input.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub text: String,
    pub selected: bool,
}
