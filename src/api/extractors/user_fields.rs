//! Form field extractor for user writes.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Multipart, Request},
    http::header,
};
use url::form_urlencoded;

use crate::api::handlers::user_handler::UserForm;
use crate::errors::AppError;

/// User fields read from a form body.
///
/// Accepts `application/x-www-form-urlencoded` and `multipart/form-data`.
/// Any other body, or none at all, yields empty fields. When a key repeats,
/// the first value wins.
pub struct UserFields(pub UserForm);

#[async_trait]
impl<S> FromRequest<S> for UserFields
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();

        let mut fields = FieldSet::default();

        if content_type.starts_with("multipart/form-data") {
            let mut multipart = Multipart::from_request(req, state)
                .await
                .map_err(|e| AppError::bad_request(e.body_text()))?;

            while let Some(field) = multipart
                .next_field()
                .await
                .map_err(|e| AppError::bad_request(e.body_text()))?
            {
                let Some(key) = field.name().map(str::to_owned) else {
                    continue;
                };
                let value = field
                    .text()
                    .await
                    .map_err(|e| AppError::bad_request(e.body_text()))?;
                fields.set(&key, value);
            }
        } else if content_type.starts_with("application/x-www-form-urlencoded") {
            let body = Bytes::from_request(req, state)
                .await
                .map_err(|e| AppError::bad_request(e.body_text()))?;

            for (key, value) in form_urlencoded::parse(&body) {
                fields.set(&key, value.into_owned());
            }
        }

        Ok(UserFields(fields.into_form()))
    }
}

#[derive(Default)]
struct FieldSet {
    name: Option<String>,
    surname: Option<String>,
    email: Option<String>,
}

impl FieldSet {
    fn set(&mut self, key: &str, value: String) {
        let slot = match key {
            "name" => &mut self.name,
            "surname" => &mut self.surname,
            "email" => &mut self.email,
            _ => return,
        };
        slot.get_or_insert(value);
    }

    fn into_form(self) -> UserForm {
        UserForm {
            name: self.name.unwrap_or_default(),
            surname: self.surname.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
        }
    }
}
