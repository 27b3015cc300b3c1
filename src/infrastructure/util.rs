use crate::application::ports::util::{SlugGenerator, SuffixGenerator};
use rand::Rng;
use slug::slugify;

const SUFFIX_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        slugify(input)
    }
}

#[derive(Default, Clone)]
pub struct RandomSuffixGenerator;

impl SuffixGenerator for RandomSuffixGenerator {
    fn suffix(&self, len: usize) -> String {
        random_lowercase(len)
    }
}

/// `len` characters drawn uniformly from `[a-z0-9]`.
pub fn random_lowercase(len: usize) -> String {
    let mut rng = rand::rng();
    (0..len)
        .map(|_| char::from(SUFFIX_ALPHABET[rng.random_range(0..SUFFIX_ALPHABET.len())]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_lowercases_and_strips_diacritics() {
        let slugger = DefaultSlugGenerator;
        assert_eq!(slugger.slugify("Hello World"), "hello-world");
        assert_eq!(slugger.slugify("Ação é Fácil!"), "acao-e-facil");
        assert_eq!(slugger.slugify("  many   spaces -- here "), "many-spaces-here");
    }

    #[test]
    fn suffix_has_requested_length_and_alphabet() {
        let suffix = RandomSuffixGenerator.suffix(32);
        assert_eq!(suffix.len(), 32);
        assert!(
            suffix
                .bytes()
                .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
        );
        assert!(RandomSuffixGenerator.suffix(0).is_empty());
    }
}
