pub mod book;
pub mod cli;
pub mod config;
pub mod error;
pub mod library;

pub use book::{Book, BookBuilder, Details, Difficulty, Status};
pub use error::{ErrorKind, LibraryError};
pub use library::Library;
