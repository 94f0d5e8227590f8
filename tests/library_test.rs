use library_catalog::{Book, Library, Status};
use pretty_assertions::assert_eq;
use std::collections::HashMap;

#[test]
fn test_three_books_by_year() {
    let mut library = Library::new();
    library.add(Book::new("Jane Eyre", "Charlotte Bronte", 1847, "9780141441146").unwrap()).unwrap();
    library.add(Book::new("The Shining", "Stephen King", 1977, "9780307743657").unwrap()).unwrap();
    library.add(Book::new("The Running Man", "Richard Bachman", 1982, "9780451197962").unwrap()).unwrap();

    let years: Vec<i32> = library.get_sorted_by_year().iter().map(|b| b.year()).collect();
    assert_eq!(years, vec![1847, 1977, 1982]);

    let in_range: Vec<&str> = library.find_by_year_range(1950, 2000).unwrap()
        .iter()
        .map(|b| b.isbn())
        .collect();
    assert_eq!(in_range, vec!["9780307743657", "9780451197962"]);

    assert_eq!(library.count_by_status(), HashMap::from([(Status::Available, 3)]));
}

#[test]
fn test_remove_by_author_padded_and_uppercase() {
    let mut library = Library::new();
    library.add(Book::new("The Running Man", "Richard Bachman", 1982, "9780451197962").unwrap()).unwrap();
    library.add(Book::new("Thinner", "Richard Bachman", 1984, "9780451161345").unwrap()).unwrap();
    library.add(Book::new("Carrie", "Stephen King", 1974, "9780307743664").unwrap()).unwrap();

    assert_eq!(library.remove_by_author("  RICHARD BACHMAN  ").unwrap(), 2);
    assert_eq!(library.len(), 1);
    assert_eq!(library.remove_by_author("RICHARD BACHMAN").unwrap(), 0);
    assert_eq!(library.len(), 1);
    assert!(library.find_by_isbn("9780307743664").is_ok());
}
