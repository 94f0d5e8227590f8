use crate::book::{Book, Difficulty, Status};
use crate::error::Result;
use crate::library::Library;
use clap::{Parser, Subcommand, ValueEnum};

/// 카탈로그 파일을 다루는 명령행 인자
#[derive(Debug, Parser)]
#[command(name = "library-catalog", version, about = "Manage a JSON book catalog")]
pub struct Argument {
    /// 카탈로그 JSON 파일 경로, 지정하지 않으면 설정 파일의 catalog.path를 사용한다.
    #[arg(short, long, global = true)]
    pub file: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// 빈 카탈로그 파일을 새로 만든다.
    Init,

    /// 도서를 추가한다.
    Add {
        title: String,
        author: String,
        year: i32,
        isbn: String,

        /// 소설의 장르
        #[arg(long, conflicts_with = "subject")]
        genre: Option<String>,

        /// 기술 서적의 주제
        #[arg(long)]
        subject: Option<String>,

        /// 기술 서적의 난이도 (beginner, intermediate, advanced)
        #[arg(long, requires = "subject")]
        difficulty: Option<String>,
    },

    Remove { isbn: String },

    Find { isbn: String },

    ByAuthor { author: String },

    ByTitle { title: String },

    /// 출판 연도 범위(양 끝 포함)로 도서를 찾는다.
    Range { from: i32, to: i32 },

    List {
        #[arg(long, value_enum, default_value_t = SortOrder::Title)]
        sort: SortOrder,
    },

    Authors,

    CountStatus,

    RemoveAuthor { author: String },

    SetStatus { isbn: String, status: String },
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
pub enum SortOrder {
    Year,
    Author,
    Title,
    /// 제목, 저자, 연도 순 (대소문자 구분)
    Composite,
}

/// 명령을 실행하고 출력할 줄들을 반환한다.
/// 카탈로그를 변경하는 명령은 실행 후 같은 파일에 다시 저장한다.
pub fn execute(command: &Command, path: &str) -> Result<Vec<String>> {
    let mut library = Library::new();
    if !matches!(command, Command::Init) {
        library.load_from_file(path)?;
    }

    let lines = match command {
        Command::Init => {
            library.save_to_new_file(path)?;
            vec![format!("Created empty catalog at {}", path)]
        }
        Command::Add { title, author, year, isbn, genre, subject, difficulty } => {
            let book = match (genre, subject) {
                (Some(genre), _) => Book::fiction(title, author, *year, isbn, genre)?,
                (None, Some(subject)) => {
                    let difficulty = difficulty.as_deref()
                        .map(Difficulty::try_from)
                        .transpose()?;
                    Book::technical(title, author, *year, isbn, subject, difficulty)?
                }
                (None, None) => Book::new(title, author, *year, isbn)?,
            };
            let line = format!("Added {}", book);
            library.add(book)?;
            library.save_to_existing_file(path)?;
            vec![line]
        }
        Command::Remove { isbn } => {
            library.remove(isbn)?;
            library.save_to_existing_file(path)?;
            vec![format!("Removed {}", isbn.trim())]
        }
        Command::Find { isbn } => vec![library.find_by_isbn(isbn)?.to_string()],
        Command::ByAuthor { author } => to_lines(library.find_by_author(author)?),
        Command::ByTitle { title } => to_lines(library.find_by_title(title)?),
        Command::Range { from, to } => to_lines(library.find_by_year_range(*from, *to)?),
        Command::List { sort } => {
            let books = match sort {
                SortOrder::Year => library.get_sorted_by_year(),
                SortOrder::Author => library.get_sorted_by_author(),
                SortOrder::Title => library.get_sorted_by_title(),
                SortOrder::Composite => library.get_sorted_by_title_then_author_then_year(),
            };
            to_lines(books)
        }
        Command::Authors => {
            let mut authors: Vec<String> = library.get_all_unique_authors().into_iter().collect();
            authors.sort();
            authors
        }
        Command::CountStatus => {
            let counts = library.count_by_status();
            [Status::Available, Status::Borrowed, Status::Reserved].iter()
                .filter_map(|status| counts.get(status).map(|count| format!("{}: {}", status, count)))
                .collect()
        }
        Command::RemoveAuthor { author } => {
            let removed = library.remove_by_author(author)?;
            if removed > 0 {
                library.save_to_existing_file(path)?;
            }
            vec![format!("Removed {} book(s)", removed)]
        }
        Command::SetStatus { isbn, status } => {
            let status = Status::try_from(status.as_str())?;
            library.set_status(isbn, status)?;
            library.save_to_existing_file(path)?;
            vec![format!("{} is now {}", isbn.trim(), status)]
        }
    };

    Ok(lines)
}

fn to_lines<I>(books: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: AsRef<Book>,
{
    books.into_iter()
        .map(|book| book.as_ref().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn parse(args: &[&str]) -> Argument {
        Argument::try_parse_from(args.iter().copied()).unwrap()
    }

    #[test]
    fn test_argument_parsing() {
        let argument = parse(&["library-catalog", "--file", "books.json", "list", "--sort", "year"]);
        assert_eq!(argument.file.as_deref(), Some("books.json"));
        assert!(matches!(argument.command, Command::List { sort: SortOrder::Year }));

        assert!(Argument::try_parse_from(["library-catalog", "add", "t", "a", "1977", "9780307743657",
            "--genre", "Horror", "--subject", "Rust"]).is_err());
        assert!(Argument::try_parse_from(["library-catalog", "add", "t", "a", "1977", "9780307743657",
            "--difficulty", "advanced"]).is_err());
    }

    #[test]
    fn test_commands_round_trip_through_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        let path = path.to_str().unwrap();

        execute(&Command::Init, path).unwrap();
        execute(&parse(&["c", "add", "The Shining", "Stephen King", "1977", "9780307743657", "--genre", "Horror"]).command, path).unwrap();
        execute(&parse(&["c", "add", "Rust in Action", "Tim McNamara", "2021", "9781617294556",
            "--subject", "Rust", "--difficulty", "intermediate"]).command, path).unwrap();
        execute(&parse(&["c", "set-status", "9780307743657", "borrowed"]).command, path).unwrap();

        let lines = execute(&parse(&["c", "count-status"]).command, path).unwrap();
        assert_eq!(lines, vec!["AVAILABLE: 1", "BORROWED: 1"]);

        let lines = execute(&parse(&["c", "list", "--sort", "year"]).command, path).unwrap();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("9780307743657"));

        let lines = execute(&parse(&["c", "remove-author", "stephen king"]).command, path).unwrap();
        assert_eq!(lines, vec!["Removed 1 book(s)"]);
        assert_eq!(execute(&parse(&["c", "authors"]).command, path).unwrap(), vec!["Tim McNamara"]);
    }

    #[test]
    fn test_init_refuses_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        let path = path.to_str().unwrap();

        execute(&Command::Init, path).unwrap();
        let err = execute(&Command::Init, path).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IoFailure);
    }
}
