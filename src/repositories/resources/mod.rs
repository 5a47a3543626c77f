//! 리소스 컬렉션 저장소
//!
//! 페이지 조회와 CRUD만 제공하는 범용 저장소입니다.

mod in_memory_store;
mod page;
mod resource_store;

pub use in_memory_store::InMemoryResourceStore;
pub use page::{Page, PageRequest, Sort, SortDirection};
pub use resource_store::ResourceStore;
