// src/application/ports/util.rs
pub trait SlugGenerator: Send + Sync {
    /// Lowercase, transliterated, hyphen-separated form of `input`. May be
    /// empty when `input` has no alphanumeric content.
    fn slugify(&self, input: &str) -> String;
}

pub trait SuffixGenerator: Send + Sync {
    /// `len` random characters from `[a-z0-9]`.
    fn suffix(&self, len: usize) -> String;
}
