use std::fmt;

use crate::{
    config::{MAX_PAGE, MIN_PAGE},
    error::ValidationError,
};

/// A page identifier in `[MIN_PAGE, MAX_PAGE]`.
pub type Page = u8;

/// Validated, read-only sequence of page references.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReferenceString {
    pages: Vec<Page>,
}

impl ReferenceString {
    /// Validates every token, failing on the first one that is not an integer
    /// or lies outside the page range.
    pub fn parse<I, S>(tokens: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let pages = tokens
            .into_iter()
            .map(|token| parse_token(token.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(ReferenceString { pages })
    }

    /// Parses one line of whitespace separated page numbers.
    pub fn parse_line(line: &str) -> Result<Self, ValidationError> {
        Self::parse(line.split_whitespace())
    }

    pub fn from_pages(pages: &[Page]) -> Result<Self, ValidationError> {
        Self::parse(pages.iter().map(|p| p.to_string()))
    }

    /// Samples `length` pages uniformly from the page range.
    pub fn generate(length: i64, rng: &mut fastrand::Rng) -> Result<Self, ValidationError> {
        if length < 0 {
            return Err(ValidationError::NegativeLength { length });
        }
        let pages = std::iter::repeat_with(|| rng.u8(MIN_PAGE..=MAX_PAGE))
            .take(length as usize)
            .collect();
        Ok(ReferenceString { pages })
    }

    pub fn generate_seeded(length: i64, seed: u64) -> Result<Self, ValidationError> {
        Self::generate(length, &mut fastrand::Rng::with_seed(seed))
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<Page> {
        self.pages.get(position).copied()
    }

    /// References strictly after `position`.
    pub fn suffix_after(&self, position: usize) -> &[Page] {
        self.pages.get(position + 1..).unwrap_or(&[])
    }

    pub fn distinct_count(&self) -> usize {
        let mut seen = [false; MAX_PAGE as usize + 1];
        self.pages.iter().for_each(|&p| seen[p as usize] = true);
        seen.iter().filter(|&&s| s).count()
    }
}

fn parse_token(token: &str) -> Result<Page, ValidationError> {
    let value: i64 = token
        .parse()
        .map_err(|_| ValidationError::InvalidToken {
            token: token.to_owned(),
        })?;
    if value < MIN_PAGE as i64 || value > MAX_PAGE as i64 {
        return Err(ValidationError::PageOutOfRange {
            token: token.to_owned(),
        });
    }
    Ok(value as Page)
}

impl fmt::Display for ReferenceString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, page) in self.pages.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{page}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_valid_tokens() {
        let refs = ReferenceString::parse(["1", "0", "9"]).unwrap();
        assert_eq!(refs.pages(), &[1, 0, 9]);
        assert_eq!(refs.len(), 3);
    }

    #[test]
    fn parse_names_first_invalid_token() {
        let err = ReferenceString::parse(["1", "x", "3", "y"]).unwrap_err();
        assert_eq!(err, ValidationError::InvalidToken { token: "x".into() });
    }

    #[test]
    fn parse_rejects_out_of_range() {
        let err = ReferenceString::parse_line("3 10 -1").unwrap_err();
        assert_eq!(err, ValidationError::PageOutOfRange { token: "10".into() });

        let err = ReferenceString::parse_line("-1").unwrap_err();
        assert_eq!(err, ValidationError::PageOutOfRange { token: "-1".into() });
    }

    #[test]
    fn parse_line_handles_extra_whitespace() {
        let refs = ReferenceString::parse_line("  1 2\t3  ").unwrap();
        assert_eq!(refs.pages(), &[1, 2, 3]);
        assert!(ReferenceString::parse_line("").unwrap().is_empty());
    }

    #[test]
    fn generate_stays_in_range() {
        let refs = ReferenceString::generate_seeded(200, 7).unwrap();
        assert_eq!(refs.len(), 200);
        assert!(refs.pages().iter().all(|&p| p <= MAX_PAGE));
        assert_eq!(refs, ReferenceString::generate_seeded(200, 7).unwrap());
    }

    #[test]
    fn generate_rejects_negative_length() {
        let err = ReferenceString::generate_seeded(-1, 0).unwrap_err();
        assert_eq!(err, ValidationError::NegativeLength { length: -1 });
        assert!(ReferenceString::generate_seeded(0, 0).unwrap().is_empty());
    }

    #[test]
    fn suffix_and_display() {
        let refs = ReferenceString::from_pages(&[4, 5, 6]).unwrap();
        assert_eq!(refs.suffix_after(0), &[5, 6]);
        assert_eq!(refs.suffix_after(2), &[] as &[Page]);
        assert_eq!(refs.to_string(), "[4, 5, 6]");
        assert_eq!(refs.distinct_count(), 3);
    }
}
