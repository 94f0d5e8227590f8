use thiserror::Error;

type Source = Box<dyn std::error::Error + Send + Sync + 'static>;

/// 카탈로그 에러의 분류
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ErrorKind {
    /// 잘못된 입력 (필드 값, 중복 ISBN, 없는 ISBN, 파일 경로 등)
    InvalidArgument,

    /// 파일 입출력 및 JSON 변환 실패
    IoFailure,
}

/// Library 모듈에서 사용할 에러 열거
#[derive(Error, Debug)]
pub enum LibraryError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Book with ISBN {0} already exists")]
    DuplicateBook(String),

    #[error("Book with ISBN {0} not found")]
    BookNotFound(String),

    #[error("{message}")]
    File {
        message: String,
        #[source]
        source: Option<Source>,
    },
}

impl LibraryError {
    pub fn invalid(message: impl Into<String>) -> Self {
        LibraryError::InvalidArgument(message.into())
    }

    pub fn file(message: impl Into<String>) -> Self {
        LibraryError::File { message: message.into(), source: None }
    }

    pub fn file_with_source<E>(message: impl Into<String>, source: E) -> Self
    where
        E: Into<Source>
    {
        LibraryError::File { message: message.into(), source: Some(source.into()) }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            LibraryError::InvalidArgument(_)
            | LibraryError::DuplicateBook(_)
            | LibraryError::BookNotFound(_) => ErrorKind::InvalidArgument,
            LibraryError::File { .. } => ErrorKind::IoFailure,
        }
    }
}

pub type Result<T> = std::result::Result<T, LibraryError>;
