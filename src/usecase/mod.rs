//! UseCase 層
//!
//! カタログのビジネスロジックを実装するレイヤー。
//! プレゼンテーション側から呼び出され、Domain 層を操作します。

pub mod catalog;
pub mod error;

pub use catalog::{Catalog, CatalogState};
pub use error::CatalogError;
