//! Data Transfer Objects - HTML form bodies submitted by the browser.

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

/// Errors raised while reading a form body by hand.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FormError {
    #[error("missing form field `{0}`")]
    MissingField(&'static str),

    #[error("invalid value {value:?} for form field `{field}`")]
    InvalidValue { field: &'static str, value: String },
}

/// Blank or whitespace-only input means "no value".
fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Body of the create and edit user forms.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserForm {
    #[serde(rename = "first-name")]
    pub first_name: String,
    #[serde(rename = "last-name")]
    pub last_name: String,
    #[serde(rename = "image-url", default)]
    pub image_url: Option<String>,
}

impl UserForm {
    /// The image URL, or `None` when the field was left empty.
    pub fn image_url(&self) -> Option<String> {
        non_blank(self.image_url.clone())
    }
}

/// Body of the create and edit tag forms.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagForm {
    pub name: String,
}

/// Body of the create and edit post forms.
///
/// `tags` is a repeated checkbox field, which `serde_urlencoded` cannot
/// collect into a list, so this form is parsed from the raw body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostForm {
    pub title: String,
    pub content: String,
    pub tag_ids: Vec<i32>,
}

impl PostForm {
    /// Parse an `application/x-www-form-urlencoded` body.
    pub fn from_urlencoded(body: &[u8]) -> Result<Self, FormError> {
        let mut title = None;
        let mut content = None;
        let mut tag_ids = Vec::new();

        for (key, value) in form_urlencoded::parse(body) {
            match key.as_ref() {
                "title" => title = Some(value.into_owned()),
                "content" => content = Some(value.into_owned()),
                "tags" => {
                    let id = value.parse().map_err(|_| FormError::InvalidValue {
                        field: "tags",
                        value: value.to_string(),
                    })?;
                    tag_ids.push(id);
                }
                _ => {}
            }
        }

        Ok(Self {
            title: title.ok_or(FormError::MissingField("title"))?,
            content: content.ok_or(FormError::MissingField("content"))?,
            tag_ids,
        })
    }
}
