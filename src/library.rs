mod store;

use crate::book::validate::{validate_author, validate_isbn, validate_title, validate_year};
use crate::book::{compare, Book, Status};
use crate::error::{LibraryError, Result};
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use tracing::{debug, info};

/// 도서 카탈로그
///
/// ISBN을 키로 도서를 보관하는 메모리 저장소로 내부 맵은 외부에 공유되지 않는다.
/// 내부적으로 잠금을 하지 않음으로 여러 스레드에서 사용할 경우 호출하는 쪽에서 접근을 직렬화 해야 한다.
#[derive(Debug, Clone, Default)]
pub struct Library {
    books: HashMap<String, Book>,
}

impl Library {
    pub fn new() -> Self {
        Self { books: HashMap::new() }
    }

    /// 전달 받은 맵을 복사하여 카탈로그를 만든다.
    pub fn with_books(books: &HashMap<String, Book>) -> Self {
        Self { books: books.clone() }
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// 도서를 추가한다. 같은 ISBN의 도서가 이미 있으면 [`LibraryError::DuplicateBook`]을 반환한다.
    ///
    /// # Example
    /// ```
    /// use library_catalog::book::Book;
    /// use library_catalog::library::Library;
    ///
    /// let mut library = Library::new();
    /// let book = Book::new("The Shining", "Stephen King", 1977, "9780307743657").unwrap();
    ///
    /// library.add(book.clone()).unwrap();
    /// assert!(library.add(book).is_err());
    /// assert_eq!(library.find_by_isbn("9780307743657").unwrap().title(), "The Shining");
    /// ```
    pub fn add(&mut self, book: Book) -> Result<()> {
        if self.books.contains_key(book.isbn()) {
            return Err(LibraryError::DuplicateBook(book.isbn().to_owned()));
        }
        debug!("도서 추가 (ISBN: {}, 제목: {})", book.isbn(), book.title());
        self.books.insert(book.isbn().to_owned(), book);
        Ok(())
    }

    pub fn remove(&mut self, isbn: &str) -> Result<()> {
        validate_isbn(isbn)?;
        let isbn = isbn.trim();
        match self.books.remove(isbn) {
            Some(_) => {
                debug!("도서 삭제 (ISBN: {})", isbn);
                Ok(())
            }
            None => Err(LibraryError::BookNotFound(isbn.to_owned())),
        }
    }

    pub fn find_by_isbn(&self, isbn: &str) -> Result<&Book> {
        validate_isbn(isbn)?;
        let isbn = isbn.trim();
        self.books.get(isbn)
            .ok_or_else(|| LibraryError::BookNotFound(isbn.to_owned()))
    }

    /// 저장된 도서의 상태를 변경한다. 상태 전이 규칙은 검사하지 않는다.
    pub fn set_status(&mut self, isbn: &str, status: Status) -> Result<()> {
        validate_isbn(isbn)?;
        let isbn = isbn.trim();
        let book = self.books.get_mut(isbn)
            .ok_or_else(|| LibraryError::BookNotFound(isbn.to_owned()))?;

        debug!("도서 상태 변경 (ISBN: {}, {} -> {})", isbn, book.status(), status);
        book.set_status(status);
        Ok(())
    }

    /// 저자가 일치하는 도서를 찾는다. 앞뒤 공백을 제거하고 대소문자를 무시하여 비교한다.
    pub fn find_by_author(&self, author: &str) -> Result<Vec<&Book>> {
        validate_author(author)?;
        Ok(self.filter(|book| equals_ignore_case(book.author(), author)))
    }

    /// 제목이 일치하는 도서를 찾는다. 앞뒤 공백을 제거하고 대소문자를 무시하여 비교한다.
    pub fn find_by_title(&self, title: &str) -> Result<Vec<&Book>> {
        validate_title(title)?;
        Ok(self.filter(|book| equals_ignore_case(book.title(), title)))
    }

    pub fn get_all(&self) -> HashMap<String, Book> {
        self.books.clone()
    }

    /// `from` 부터 `to` 까지(양 끝 포함) 출판된 도서를 찾는다.
    pub fn find_by_year_range(&self, from: i32, to: i32) -> Result<Vec<&Book>> {
        validate_year(from)?;
        validate_year(to)?;
        if from > to {
            return Err(LibraryError::invalid(format!(
                "start year {} must not be after end year {}", from, to
            )));
        }
        Ok(self.filter(|book| (from..=to).contains(&book.year())))
    }

    pub fn get_all_unique_authors(&self) -> HashSet<String> {
        self.books.values()
            .map(|book| book.author().to_owned())
            .collect()
    }

    /// 상태별 도서 수를 센다. 도서가 없는 상태는 결과에 포함되지 않는다.
    pub fn count_by_status(&self) -> HashMap<Status, usize> {
        let mut counts = HashMap::new();
        for book in self.books.values() {
            *counts.entry(book.status()).or_insert(0) += 1;
        }
        counts
    }

    /// 저자가 일치하는 모든 도서를 삭제하고 삭제된 도서 수를 반환한다.
    pub fn remove_by_author(&mut self, author: &str) -> Result<usize> {
        validate_author(author)?;
        let before = self.books.len();
        self.books.retain(|_, book| !equals_ignore_case(book.author(), author));

        let removed = before - self.books.len();
        if removed > 0 {
            info!("저자 {}의 도서 {}권 삭제", author.trim(), removed);
        }
        Ok(removed)
    }

    pub fn get_sorted_by_year(&self) -> Vec<Book> {
        self.sorted(compare::by_year)
    }

    pub fn get_sorted_by_author(&self) -> Vec<Book> {
        self.sorted(compare::by_author)
    }

    pub fn get_sorted_by_title(&self) -> Vec<Book> {
        self.sorted(compare::by_title)
    }

    pub fn get_sorted_by_title_then_author_then_year(&self) -> Vec<Book> {
        self.sorted(compare::by_title_then_author_then_year)
    }
}

impl Library {
    fn filter<P>(&self, predicate: P) -> Vec<&Book>
    where
        P: Fn(&Book) -> bool
    {
        let mut found: Vec<&Book> = self.books.values()
            .filter(|book| predicate(*book))
            .collect();
        found.sort_by(|a, b| a.isbn().cmp(b.isbn()));
        found
    }

    // 해시맵 순회 순서에 의존하지 않도록 ISBN 순으로 먼저 나열한 뒤 안정 정렬한다.
    fn sorted<F>(&self, compare: F) -> Vec<Book>
    where
        F: Fn(&Book, &Book) -> Ordering
    {
        let mut books: Vec<Book> = self.books.values().cloned().collect();
        books.sort_by(|a, b| a.isbn().cmp(b.isbn()));
        books.sort_by(compare);
        books
    }
}

fn equals_ignore_case(value: &str, query: &str) -> bool {
    value.trim().to_lowercase() == query.trim().to_lowercase()
}
