//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 스토리, vly, 모먼트, revly 컬렉션은 모두 같은 [`resources::ResourceStore`] 계약을 따릅니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::resources::{InMemoryResourceStore, PageRequest, ResourceStore};
//!
//! let stories = InMemoryResourceStore::new(ResourceCollection::Stories);
//! let page = stories.find_all(&PageRequest::of(0, 20)).await?;
//! ```

pub mod resources;
