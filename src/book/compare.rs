//! 도서 정렬 기준
//!
//! 모든 비교 함수는 [`slice::sort_by`]와 함께 사용한다. 안정 정렬이므로 비교 결과가 같은 도서는 입력 순서를 유지한다.

use crate::book::Book;
use std::cmp::Ordering;

/// 출판 연도 오름차순
pub fn by_year(a: &Book, b: &Book) -> Ordering {
    a.year().cmp(&b.year())
}

/// 저자 이름 (대소문자 무시)
pub fn by_author(a: &Book, b: &Book) -> Ordering {
    compare_ignore_case(a.author(), b.author())
}

/// 제목 (대소문자 무시)
pub fn by_title(a: &Book, b: &Book) -> Ordering {
    compare_ignore_case(a.title(), b.title())
}

/// 제목, 저자, 출판 연도 순으로 비교한다. 제목과 저자는 대소문자를 구분한다.
pub fn by_title_then_author_then_year(a: &Book, b: &Book) -> Ordering {
    a.title().cmp(b.title())
        .then_with(|| a.author().cmp(b.author()))
        .then_with(|| by_year(a, b))
}

fn compare_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}
