//! Typed preference keys.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SchedulingError};

const SEPARATOR: char = ':';

/// Identifies one stored preference.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PreferenceKey {
    /// A dismissible banner, e.g. the closure warning banner
    BannerDismissed { banner: String },

    /// A one-off hint
    HintDismissed { hint: String },

    /// Unsaved text of a form, optionally per edited entity
    Draft {
        form: String,
        entity: Option<String>,
    },
}

impl PreferenceKey {
    /// Storage prefixes of the dismissal kinds.
    pub const DISMISSAL_PREFIXES: [&'static str; 2] = ["banner:", "hint:"];

    pub fn banner(banner: impl Into<String>) -> Self {
        Self::BannerDismissed {
            banner: banner.into(),
        }
    }

    pub fn hint(hint: impl Into<String>) -> Self {
        Self::HintDismissed { hint: hint.into() }
    }

    pub fn draft(form: impl Into<String>, entity: Option<String>) -> Self {
        Self::Draft {
            form: form.into(),
            entity,
        }
    }

    /// Whether this key records a dismissal rather than a draft.
    pub fn is_dismissal(&self) -> bool {
        !matches!(self, Self::Draft { .. })
    }

    /// The namespaced key written to storage.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lessonloop_core::preferences::PreferenceKey;
    ///
    /// assert_eq!(PreferenceKey::banner("closures").storage_key(), "banner:closures");
    /// assert_eq!(
    ///     PreferenceKey::draft("lesson-notes", Some("42".into())).storage_key(),
    ///     "draft:lesson-notes:42"
    /// );
    /// ```
    pub fn storage_key(&self) -> String {
        match self {
            Self::BannerDismissed { banner } => format!("banner{SEPARATOR}{banner}"),
            Self::HintDismissed { hint } => format!("hint{SEPARATOR}{hint}"),
            Self::Draft { form, entity: None } => format!("draft{SEPARATOR}{form}"),
            Self::Draft {
                form,
                entity: Some(entity),
            } => format!("draft{SEPARATOR}{form}{SEPARATOR}{entity}"),
        }
    }

    /// Rejects empty identifiers and identifiers containing `:`, which would
    /// make two different keys share a storage key.
    pub fn validate(&self) -> Result<()> {
        let parts: Vec<(&str, &str)> = match self {
            Self::BannerDismissed { banner } => vec![("banner", banner.as_str())],
            Self::HintDismissed { hint } => vec![("hint", hint.as_str())],
            Self::Draft { form, entity } => {
                let mut parts = vec![("form", form.as_str())];
                if let Some(entity) = entity {
                    parts.push(("entity", entity.as_str()));
                }
                parts
            }
        };

        for (field, value) in parts {
            if value.is_empty() {
                return Err(SchedulingError::invalid_input(field).with_reason("must not be empty"));
            }
            if value.contains(SEPARATOR) {
                return Err(SchedulingError::invalid_input(field)
                    .with_reason(format!("must not contain '{SEPARATOR}'")));
            }
        }
        Ok(())
    }
}

impl fmt::Display for PreferenceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.storage_key())
    }
}
