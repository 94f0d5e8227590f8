use crate::book::Book;
use crate::error::{LibraryError, Result};
use crate::library::Library;
use serde_json::error::Category;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// 도서 JSON 객체에서 반드시 있어야 하는 필드
const REQUIRED_FIELDS: [&str; 4] = ["title", "author", "year", "isbn"];

impl Library {
    /// 이미 존재하는 파일에 카탈로그 전체를 JSON으로 덮어쓴다.
    pub fn save_to_existing_file(&self, path: &str) -> Result<()> {
        let path = require_path(path)?;
        if !path.exists() {
            return Err(LibraryError::file(format!("File does not exist: {}", path.display())));
        }
        self.write_json(path)
    }

    /// 새 파일을 만들어 카탈로그 전체를 JSON으로 저장한다. 필요한 상위 디렉토리도 함께 만든다.
    pub fn save_to_new_file(&self, path: &str) -> Result<()> {
        let path = require_path(path)?;
        if path.exists() {
            return Err(LibraryError::file(format!("File already exists: {}", path.display())));
        }
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                LibraryError::file_with_source(format!("Cannot create directory: {}", parent.display()), e)
            })?;
        }
        self.write_json(path)
    }

    /// JSON 파일을 읽어 카탈로그의 내용을 통째로 교체한다.
    ///
    /// 빈 파일은 빈 카탈로그로 취급한다. 읽은 도서는 모두 다시 검증하며
    /// 파일 전체가 유효할 때만 기존 내용을 교체한다.
    pub fn load_from_file(&mut self, path: &str) -> Result<()> {
        let path = require_path(path)?;
        if !path.exists() {
            return Err(LibraryError::file(format!("File does not exist: {}", path.display())));
        }

        let bytes = fs::read(path).map_err(|e| {
            LibraryError::file_with_source(format!("Cannot read file: {}", path.display()), e)
        })?;

        if bytes.is_empty() {
            info!("빈 파일을 읽어 카탈로그를 초기화 합니다. ({})", path.display());
            self.books.clear();
            return Ok(());
        }

        let books = parse_books(&bytes)
            .inspect_err(|e| warn!("JSON 파일을 읽을 수 없습니다. ({}): {}", path.display(), e))?;
        validate_loaded(&books)?;

        info!("{}에서 도서 {}권을 읽었습니다.", path.display(), books.len());
        self.books = books;
        Ok(())
    }

    fn write_json(&self, path: &Path) -> Result<()> {
        let ordered: BTreeMap<&String, &Book> = self.books.iter().collect();
        let json = serde_json::to_string_pretty(&ordered)
            .map_err(|e| LibraryError::file_with_source("Cannot serialize catalog", e))?;

        fs::write(path, json).map_err(|e| {
            LibraryError::file_with_source(format!("Cannot write file: {}", path.display()), e)
        })?;

        info!("{}에 도서 {}권을 저장했습니다.", path.display(), self.books.len());
        Ok(())
    }
}

fn require_path(path: &str) -> Result<&Path> {
    if path.trim().is_empty() {
        return Err(LibraryError::invalid("file path must not be empty"));
    }
    Ok(Path::new(path))
}

/// 문법 검사, 필수 필드 검사, 도서 변환 순으로 진행한다.
/// 필수 필드 누락은 알 수 없는 필드 등 다른 구조 오류보다 먼저 보고된다.
fn parse_books(bytes: &[u8]) -> Result<HashMap<String, Book>> {
    let value: Value = serde_json::from_slice(bytes).map_err(|e| match e.classify() {
        Category::Io => LibraryError::file_with_source(format!("Cannot read JSON: {}", e), e),
        Category::Syntax | Category::Eof | Category::Data => {
            LibraryError::file_with_source(format!("Invalid JSON syntax: {}", e), e)
        }
    })?;

    check_required_fields(&value)?;

    serde_json::from_value(value).map_err(|e| {
        LibraryError::file_with_source(format!("Unexpected JSON structure: {}", e), e)
    })
}

// 객체가 아닌 루트나 항목은 도서 변환 단계에서 구조 오류로 처리된다.
fn check_required_fields(value: &Value) -> Result<()> {
    let Some(entries) = value.as_object() else {
        return Ok(());
    };

    for (key, entry) in entries {
        let Some(fields) = entry.as_object() else {
            continue;
        };
        let missing: Vec<&str> = REQUIRED_FIELDS.iter()
            .copied()
            .filter(|field| !fields.contains_key(*field))
            .collect();
        if !missing.is_empty() {
            return Err(LibraryError::file(format!(
                "Missing required fields in JSON: {} has no {}", key, missing.join(", ")
            )));
        }
    }
    Ok(())
}

fn validate_loaded(books: &HashMap<String, Book>) -> Result<()> {
    for (key, book) in books {
        if key != book.isbn() {
            return Err(LibraryError::file(format!(
                "Invalid book data in JSON: key {} does not match isbn {}", key, book.isbn()
            )));
        }
        book.validate().map_err(|e| {
            LibraryError::file_with_source(format!("Invalid book data in JSON: {} ({})", key, e), e)
        })?;
    }
    Ok(())
}
