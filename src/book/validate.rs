use crate::error::{LibraryError, Result};
use chrono::Datelike;
use regex::Regex;
use std::sync::LazyLock;

/// 구텐베르크 성경 인쇄 연도
pub const MIN_YEAR: i32 = 1457;

pub const ISBN_LENGTH: usize = 13;

static ISBN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9]+$").expect("ISBN pattern must compile")
});

pub fn validate_title(title: &str) -> Result<()> {
    require_text("title", title)
}

pub fn validate_author(author: &str) -> Result<()> {
    require_text("author", author)
}

pub fn validate_genre(genre: &str) -> Result<()> {
    require_text("genre", genre)
}

pub fn validate_subject(subject: &str) -> Result<()> {
    require_text("subject", subject)
}

/// 출판 연도를 검사한다.
/// 상한은 호출 시점의 현재 연도로 고정 상수가 아니다.
///
/// # Example
/// ```
/// use library_catalog::book::validate::validate_year;
///
/// assert!(validate_year(1847).is_ok());
/// assert!(validate_year(1456).is_err());
/// ```
pub fn validate_year(year: i32) -> Result<()> {
    let current = chrono::Local::now().year();
    if year < MIN_YEAR || year > current {
        return Err(LibraryError::invalid(format!(
            "year must be between {} and {}, got {}", MIN_YEAR, current, year
        )));
    }
    Ok(())
}

/// ISBN은 공백을 제거한 뒤 정확히 13자리의 영문자 또는 숫자여야 한다.
pub fn validate_isbn(isbn: &str) -> Result<()> {
    let trimmed = isbn.trim();
    if trimmed.is_empty() {
        return Err(LibraryError::invalid("isbn must not be empty"));
    }
    if trimmed.chars().count() != ISBN_LENGTH {
        return Err(LibraryError::invalid(format!(
            "isbn must be {} characters long, got \"{}\"", ISBN_LENGTH, trimmed
        )));
    }
    if !ISBN_PATTERN.is_match(trimmed) {
        return Err(LibraryError::invalid(format!(
            "isbn must contain only letters and digits, got \"{}\"", trimmed
        )));
    }
    Ok(())
}

fn require_text(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(LibraryError::invalid(format!("{} must not be empty", field)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_blank_text_rejected() {
        assert!(validate_title("Carrie").is_ok());
        assert!(validate_author("  Stephen King ").is_ok());

        for blank in ["", "   ", "\t\n"] {
            assert_eq!(validate_title(blank).unwrap_err().kind(), ErrorKind::InvalidArgument);
            assert_eq!(validate_author(blank).unwrap_err().kind(), ErrorKind::InvalidArgument);
            assert!(validate_genre(blank).is_err());
            assert!(validate_subject(blank).is_err());
        }
    }

    #[test]
    fn test_year_bounds() {
        let current = chrono::Local::now().year();

        assert!(validate_year(MIN_YEAR).is_ok());
        assert!(validate_year(current).is_ok());
        assert!(validate_year(MIN_YEAR - 1).is_err());
        assert!(validate_year(current + 1).is_err());
        assert!(validate_year(-5).is_err());
    }

    #[test]
    fn test_isbn_format() {
        assert!(validate_isbn("9780307743657").is_ok());
        assert!(validate_isbn("ABCdef1234567").is_ok());
        assert!(validate_isbn("  9780307743657  ").is_ok());

        let invalid = [
            "",
            "    ",
            "978030774365",
            "97803077436571",
            "978-030774365",
            "978030774365 7",
            "97803077436é5",
        ];
        for isbn in invalid {
            let err = validate_isbn(isbn).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidArgument, "{:?}", isbn);
        }
    }
}
