pub mod compare;
pub mod validate;

use crate::error::{LibraryError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

/// 도서의 대출 상태
/// 상태 전이 규칙은 없으며 [`Book::set_status`]로 어떤 상태든 설정할 수 있다.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    #[default]
    Available,
    Borrowed,
    Reserved,
}

impl TryFrom<&str> for Status {
    type Error = LibraryError;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        match value.trim().to_lowercase().as_str() {
            "available" => Ok(Status::Available),
            "borrowed" => Ok(Status::Borrowed),
            "reserved" => Ok(Status::Reserved),
            _ => Err(LibraryError::invalid(format!("Unknown status: {}", value)))
        }
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Status::Available => write!(f, "AVAILABLE"),
            Status::Borrowed => write!(f, "BORROWED"),
            Status::Reserved => write!(f, "RESERVED"),
        }
    }
}

/// 기술 서적의 난이도
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl TryFrom<&str> for Difficulty {
    type Error = LibraryError;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        match value.trim().to_lowercase().as_str() {
            "beginner" => Ok(Difficulty::Beginner),
            "intermediate" => Ok(Difficulty::Intermediate),
            "advanced" => Ok(Difficulty::Advanced),
            _ => Err(LibraryError::invalid(format!("Unknown difficulty: {}", value)))
        }
    }
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Beginner => write!(f, "BEGINNER"),
            Difficulty::Intermediate => write!(f, "INTERMEDIATE"),
            Difficulty::Advanced => write!(f, "ADVANCED"),
        }
    }
}

/// 도서 종류별 추가 정보
/// 데이터만 확장하며 도서의 동작은 종류와 관계 없이 같다.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Details {
    Fiction {
        genre: String,
    },
    Technical {
        subject: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        difficulty: Option<Difficulty>,
    },
}

impl Details {
    fn validate(&self) -> Result<()> {
        match self {
            Details::Fiction { genre } => validate::validate_genre(genre),
            Details::Technical { subject, .. } => validate::validate_subject(subject),
        }
    }

    fn check_trimmed(&self) -> Result<()> {
        match self {
            Details::Fiction { genre } => require_trimmed("genre", genre),
            Details::Technical { subject, .. } => require_trimmed("subject", subject),
        }
    }

    fn trimmed(self) -> Self {
        match self {
            Details::Fiction { genre } => Details::Fiction { genre: genre.trim().to_owned() },
            Details::Technical { subject, difficulty } => Details::Technical {
                subject: subject.trim().to_owned(),
                difficulty,
            },
        }
    }
}

/// 도서
///
/// 동등성과 해시는 ISBN만으로 결정된다. 같은 ISBN을 가진 두 도서는 다른 필드가 달라도 같은 도서로 취급한다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Book {
    title: String,
    author: String,
    year: i32,
    isbn: String,
    #[serde(default)]
    status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    details: Option<Details>,
}

impl Book {
    /// 일반 도서를 생성한다.
    ///
    /// # Example
    /// ```
    /// use library_catalog::book::{Book, Status};
    ///
    /// let book = Book::new(" Jane Eyre ", "Charlotte Bronte", 1847, "9780141441146").unwrap();
    /// assert_eq!(book.title(), "Jane Eyre");
    /// assert_eq!(book.status(), Status::Available);
    ///
    /// assert!(Book::new("Jane Eyre", "Charlotte Bronte", 1847, "978-0141441146").is_err());
    /// ```
    pub fn new(title: &str, author: &str, year: i32, isbn: &str) -> Result<Self> {
        Self::builder()
            .title(title)
            .author(author)
            .year(year)
            .isbn(isbn)
            .build()
    }

    pub fn fiction(title: &str, author: &str, year: i32, isbn: &str, genre: &str) -> Result<Self> {
        Self::builder()
            .title(title)
            .author(author)
            .year(year)
            .isbn(isbn)
            .details(Details::Fiction { genre: genre.to_owned() })
            .build()
    }

    pub fn technical(
        title: &str,
        author: &str,
        year: i32,
        isbn: &str,
        subject: &str,
        difficulty: Option<Difficulty>,
    ) -> Result<Self> {
        Self::builder()
            .title(title)
            .author(author)
            .year(year)
            .isbn(isbn)
            .details(Details::Technical { subject: subject.to_owned(), difficulty })
            .build()
    }

    pub fn builder() -> BookBuilder {
        BookBuilder::new()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn isbn(&self) -> &str {
        &self.isbn
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn details(&self) -> Option<&Details> {
        self.details.as_ref()
    }

    pub fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    /// 생성자를 거치지 않은 도서(JSON에서 읽은 도서 등)의 모든 필드를 다시 검사한다.
    pub fn validate(&self) -> Result<()> {
        validate::validate_title(&self.title)?;
        validate::validate_author(&self.author)?;
        validate::validate_year(self.year)?;
        validate::validate_isbn(&self.isbn)?;
        if let Some(details) = &self.details {
            details.validate()?;
        }

        // 생성자는 문자열 필드의 공백을 제거해서 저장한다.
        require_trimmed("title", &self.title)?;
        require_trimmed("author", &self.author)?;
        require_trimmed("isbn", &self.isbn)?;
        if let Some(details) = &self.details {
            details.check_trimmed()?;
        }
        Ok(())
    }
}

fn require_trimmed(field: &str, value: &str) -> Result<()> {
    if value.trim() != value {
        return Err(LibraryError::invalid(format!("{} has surrounding whitespace: \"{}\"", field, value)));
    }
    Ok(())
}

impl PartialEq for Book {
    fn eq(&self, other: &Self) -> bool {
        self.isbn == other.isbn
    }
}

impl Eq for Book {}

impl Hash for Book {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.isbn.hash(state);
    }
}

impl AsRef<Book> for Book {
    fn as_ref(&self) -> &Book {
        self
    }
}

impl Display for Book {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} ({}) [{}] {}", self.isbn, self.title, self.year, self.author, self.status)?;
        match &self.details {
            Some(Details::Fiction { genre }) => write!(f, " fiction: {}", genre),
            Some(Details::Technical { subject, difficulty: Some(d) }) => write!(f, " technical: {}, {}", subject, d),
            Some(Details::Technical { subject, difficulty: None }) => write!(f, " technical: {}", subject),
            None => Ok(()),
        }
    }
}

/// Book 빌더
#[derive(Debug, Clone, Default)]
pub struct BookBuilder {
    title: Option<String>,
    author: Option<String>,
    year: Option<i32>,
    isbn: Option<String>,
    details: Option<Details>,
}

impl BookBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = Some(title.to_owned());
        self
    }

    pub fn author(mut self, author: &str) -> Self {
        self.author = Some(author.to_owned());
        self
    }

    pub fn year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn isbn(mut self, isbn: &str) -> Self {
        self.isbn = Some(isbn.to_owned());
        self
    }

    pub fn details(mut self, details: Details) -> Self {
        self.details = Some(details);
        self
    }

    /// 모든 필드를 검사하고 공백을 제거하여 도서를 만든다. 생성된 도서의 상태는 [`Status::Available`]이다.
    pub fn build(self) -> Result<Book> {
        let title = self.title.ok_or_else(|| LibraryError::invalid("title is required"))?;
        let author = self.author.ok_or_else(|| LibraryError::invalid("author is required"))?;
        let year = self.year.ok_or_else(|| LibraryError::invalid("year is required"))?;
        let isbn = self.isbn.ok_or_else(|| LibraryError::invalid("isbn is required"))?;

        validate::validate_title(&title)?;
        validate::validate_author(&author)?;
        validate::validate_year(year)?;
        validate::validate_isbn(&isbn)?;
        if let Some(details) = &self.details {
            details.validate()?;
        }

        Ok(Book {
            title: title.trim().to_owned(),
            author: author.trim().to_owned(),
            year,
            isbn: isbn.trim().to_owned(),
            status: Status::Available,
            details: self.details.map(Details::trimmed),
        })
    }
}
