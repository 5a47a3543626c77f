//! 페이지 요청과 결과

/// 정렬 방향
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// 단일 속성 정렬 조건
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sort {
    pub property: String,
    pub direction: SortDirection,
}

/// 페이지 요청 (0부터 시작하는 페이지 번호)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub size: u64,
    pub sort: Option<Sort>,
}

impl PageRequest {
    pub fn of(page: u64, size: u64) -> Self {
        Self { page, size, sort: None }
    }

    pub fn with_sort(mut self, property: &str, direction: SortDirection) -> Self {
        self.sort = Some(Sort {
            property: property.to_string(),
            direction,
        });
        self
    }

    /// 건너뛸 요소 수
    pub fn offset(&self) -> u64 {
        self.page.saturating_mul(self.size)
    }
}

/// 페이지 결과
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub number: u64,
    pub size: u64,
    pub total_elements: u64,
    pub total_pages: u64,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, request: &PageRequest, total_elements: u64) -> Self {
        let total_pages = if request.size == 0 {
            0
        } else {
            total_elements.div_ceil(request.size)
        };

        Self {
            content,
            number: request.page,
            size: request.size,
            total_elements,
            total_pages,
        }
    }
}
