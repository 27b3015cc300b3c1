/// Positive integer primary key newtype.
macro_rules! entity_id {
    ($name:ident, $label:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(pub i64);

        impl $name {
            pub fn new(id: i64) -> $crate::domain::errors::DomainResult<Self> {
                if id <= 0 {
                    Err($crate::domain::errors::DomainError::Validation(
                        concat!($label, " must be positive").into(),
                    ))
                } else {
                    Ok(Self(id))
                }
            }
        }

        impl From<$name> for i64 {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

/// Required text with an upper bound measured in characters.
macro_rules! bounded_text {
    ($name:ident, $label:literal, $max:expr) => {
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name(String);

        impl $name {
            pub const MAX_CHARS: usize = $max;

            pub fn new(value: impl Into<String>) -> $crate::domain::errors::DomainResult<Self> {
                let value = value.into();
                if value.trim().is_empty() {
                    return Err($crate::domain::errors::DomainError::Validation(
                        concat!($label, " cannot be empty").into(),
                    ));
                }
                if value.chars().count() > Self::MAX_CHARS {
                    return Err($crate::domain::errors::DomainError::Validation(format!(
                        concat!($label, " must be at most {} characters"),
                        Self::MAX_CHARS
                    )));
                }
                Ok(Self(value))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

pub mod admin;
pub mod blog;
pub mod errors;
pub mod media;
pub mod site_setup;
