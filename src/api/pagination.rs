use serde::{Deserialize, Serialize};

pub const DEFAULT_LIMIT: u64 = 20;
pub const MAX_LIMIT: u64 = 100;

/// Skip/limit window sent as query parameters on list endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct PageRequest {
    pub skip: u64,
    pub limit: u64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl PageRequest {
    /// Builds a window, clamping `limit` into `1..=MAX_LIMIT`.
    #[must_use]
    pub fn new(skip: u64, limit: u64) -> Self {
        Self {
            skip,
            limit: limit.clamp(1, MAX_LIMIT),
        }
    }

    /// Window for a 1-based page number. Page 0 is treated as page 1.
    #[must_use]
    pub fn page(page: u64, page_size: u64) -> Self {
        let limit = page_size.clamp(1, MAX_LIMIT);
        Self {
            skip: page.max(1).saturating_sub(1).saturating_mul(limit),
            limit,
        }
    }

    /// 1-based page number of this window.
    #[must_use]
    pub fn page_number(&self) -> u64 {
        self.skip / self.limit.max(1) + 1
    }

    /// Zero-based index range covered by this window.
    #[must_use]
    pub fn range(&self) -> std::ops::Range<u64> {
        self.skip..self.skip.saturating_add(self.limit)
    }

    /// "Next" is disabled once the window reaches the end of the result set.
    #[must_use]
    pub fn has_next(&self, total: u64) -> bool {
        self.skip.saturating_add(self.limit) < total
    }

    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.skip > 0
    }

    #[must_use]
    pub fn next(&self) -> Self {
        Self {
            skip: self.skip.saturating_add(self.limit),
            limit: self.limit,
        }
    }

    #[must_use]
    pub fn previous(&self) -> Option<Self> {
        self.has_previous().then(|| Self {
            skip: self.skip.saturating_sub(self.limit),
            limit: self.limit,
        })
    }
}

/// Number of pages needed to show `total` items.
#[must_use]
pub fn total_pages(total: u64, page_size: u64) -> u64 {
    let size = page_size.max(1);
    total.div_ceil(size)
}

/// List envelope. The backend names the item array after the resource, so
/// every known name is accepted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    #[serde(
        alias = "users",
        alias = "candidates",
        alias = "interview_rounds",
        alias = "companies",
        alias = "scores"
    )]
    pub items: Vec<T>,
    pub total: u64,
    #[serde(default)]
    pub page: u64,
    #[serde(default)]
    pub page_size: u64,
}

impl<T> Page<T> {
    /// Whether the server holds more items after the given window.
    #[must_use]
    pub fn has_next(&self, request: &PageRequest) -> bool {
        request.has_next(self.total)
    }
}
