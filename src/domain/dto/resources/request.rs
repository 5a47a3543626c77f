//! 컬렉션 조회 쿼리 파라미터

use serde::Deserialize;
use validator::Validate;

use crate::errors::AppError;
use crate::repositories::resources::{PageRequest, Sort, SortDirection};

/// `?page=0&size=20&sort=title,desc`
#[derive(Debug, Default, Deserialize, Validate)]
pub struct PageQuery {
    /// 0부터 시작하는 페이지 번호
    pub page: Option<u64>,
    #[validate(range(min = 1, max = 2000, message = "size는 1-2000 범위여야 합니다"))]
    pub size: Option<u64>,
    /// `property` 또는 `property,asc|desc`
    pub sort: Option<String>,
}

impl PageQuery {
    pub const DEFAULT_SIZE: u64 = 20;

    pub fn to_page_request(&self) -> Result<PageRequest, AppError> {
        self.validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        let sort = match self.sort.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(parse_sort(raw)?),
        };

        Ok(PageRequest {
            page: self.page.unwrap_or(0),
            size: self.size.unwrap_or(Self::DEFAULT_SIZE),
            sort,
        })
    }
}

fn parse_sort(raw: &str) -> Result<Sort, AppError> {
    let (property, direction) = match raw.split_once(',') {
        Some((property, direction)) => (property.trim(), direction.trim()),
        None => (raw, "asc"),
    };

    if property.is_empty() {
        return Err(AppError::ValidationError(format!("잘못된 정렬 조건: '{}'", raw)));
    }

    let direction = match direction.to_lowercase().as_str() {
        "asc" => SortDirection::Asc,
        "desc" => SortDirection::Desc,
        other => {
            return Err(AppError::ValidationError(format!(
                "정렬 방향은 asc 또는 desc 여야 합니다: '{}'",
                other
            )));
        }
    };

    Ok(Sort {
        property: property.to_string(),
        direction,
    })
}
