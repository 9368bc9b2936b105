//! Form binding that reports unparseable inputs as field errors instead of
//! rejecting the request, so a form can be re-rendered with what was typed.

use axum::{
    async_trait,
    extract::{rejection::FormRejection, FromRequest, Request},
    Form,
};
use serde::de::DeserializeOwned;

use crate::views::FieldErrors;

/// A bound form model plus the fields that could not be bound.
///
/// `T` must deserialize from any subset of its fields (`#[serde(default)]` on
/// the container), so each submitted pair can be checked on its own.
pub struct BoundForm<T> {
    pub model: T,
    pub errors: FieldErrors,
}

impl<T> BoundForm<T>
where
    T: DeserializeOwned + Default,
{
    pub fn bind(pairs: Vec<(String, String)>) -> Self {
        let mut errors = FieldErrors::default();

        let accepted: Vec<(String, String)> = pairs
            .into_iter()
            .filter(|(key, value)| {
                let single = serde_urlencoded::to_string([(key, value)]).unwrap_or_default();
                match serde_urlencoded::from_str::<T>(&single) {
                    Ok(_) => true,
                    Err(e) => {
                        tracing::debug!("Failed to bind form field {}: {}", key, e);
                        errors.insert(key, &binding_message(value));
                        false
                    }
                }
            })
            .collect();

        let model = serde_urlencoded::to_string(&accepted)
            .map_err(|e| e.to_string())
            .and_then(|encoded| serde_urlencoded::from_str::<T>(&encoded).map_err(|e| e.to_string()))
            .unwrap_or_else(|e| {
                tracing::debug!("Failed to bind form: {}", e);
                errors.insert("form", "The submitted form could not be read.");
                T::default()
            });

        Self { model, errors }
    }
}

fn binding_message(value: &str) -> String {
    if value.trim().is_empty() {
        "This field is required.".to_string()
    } else {
        format!("The value '{value}' is not valid.")
    }
}

#[async_trait]
impl<T, S> FromRequest<S> for BoundForm<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = FormRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(pairs) = Form::<Vec<(String, String)>>::from_request(req, state).await?;
        Ok(Self::bind(pairs))
    }
}
