use chrono::NaiveDate;

/// Filter values submitted through the date-range forms.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DateRangeQuery {
    pub data_inicial: NaiveDate,
    pub data_final: NaiveDate,
    pub limite: u32,
}

/// Pagination cursor understood by the API: record offset plus page size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageCursor {
    pub offset: u32,
    pub limit: u32,
}

impl PageCursor {
    /// Cursor for the first page at the given page size.
    pub fn first(limit: u32) -> Self {
        Self { offset: 0, limit }
    }

    /// 1-based page number shown by the pager.
    pub fn page_number(&self) -> u32 {
        if self.limit == 0 {
            1
        } else {
            self.offset / self.limit + 1
        }
    }

    /// Whether a previous page exists.
    pub fn has_previous(&self) -> bool {
        self.offset > 0
    }

    /// Whether a further page exists for `total` records.
    pub fn has_next(&self, total: u32) -> bool {
        self.offset + self.limit < total
    }

    /// Cursor for the previous page, floored at the first.
    pub fn retreat(&self) -> Self {
        Self {
            offset: self.offset.saturating_sub(self.limit),
            limit: self.limit,
        }
    }

    /// Cursor for the next page, or the same cursor when none exists.
    pub fn advance(&self, total: u32) -> Self {
        if self.has_next(total) {
            Self {
                offset: self.offset + self.limit,
                limit: self.limit,
            }
        } else {
            *self
        }
    }
}
