use std::fmt;

use crate::constants::{
    ACTION_TXLIST, DEFAULT_END_BLOCK, DEFAULT_OFFSET, DEFAULT_PAGE, DEFAULT_START_BLOCK,
    MODULE_ACCOUNT, PARAM_ACTION, PARAM_ADDRESS, PARAM_API_KEY, PARAM_END_BLOCK, PARAM_MODULE,
    PARAM_OFFSET, PARAM_PAGE, PARAM_SORT, PARAM_START_BLOCK, SORT_ASC, SORT_DESC,
};
use crate::query::QueryParameters;

/// Order in which the explorer returns transactions
///
/// Explorers disagree on the spelling of descending; `Custom` sends any
/// value verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Oldest first (`asc`)
    #[default]
    Ascending,
    /// Newest first (`desc`)
    Descending,
    /// Caller-chosen value
    Custom(String),
}

impl SortOrder {
    /// Value sent as the `sort` parameter
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Ascending => SORT_ASC,
            Self::Descending => SORT_DESC,
            Self::Custom(value) => value.as_str(),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Builder for an `account` / `txlist` request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionListQuery {
    address:     String,
    start_block: u64,
    end_block:   u64,
    sort:        SortOrder,
    offset:      u32,
    page:        u32,
    extra:       QueryParameters,
}

impl TransactionListQuery {
    /// Query for the transactions of `address` with default paging
    #[must_use]
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address:     address.into(),
            start_block: DEFAULT_START_BLOCK,
            end_block:   DEFAULT_END_BLOCK,
            sort:        SortOrder::default(),
            offset:      DEFAULT_OFFSET,
            page:        DEFAULT_PAGE,
            extra:       QueryParameters::new(),
        }
    }

    /// Query for only the most recent transaction of `address`
    #[must_use]
    pub fn latest(address: impl Into<String>) -> Self {
        Self::new(address)
            .sort(SortOrder::Descending)
            .offset(1)
            .page(1)
    }

    /// First block to include
    #[must_use]
    pub fn start_block(mut self, block: u64) -> Self {
        self.start_block = block;
        self
    }

    /// Last block to include
    #[must_use]
    pub fn end_block(mut self, block: u64) -> Self {
        self.end_block = block;
        self
    }

    /// Result ordering
    #[must_use]
    pub fn sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    /// Page size
    #[must_use]
    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }

    /// Page number, starting at 1
    #[must_use]
    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Add an extra parameter; extras win over the fields above
    #[must_use]
    pub fn param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(name, value);
        self
    }

    /// Address being queried
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Flatten into query parameters, authenticating with `api_key`
    #[must_use]
    pub fn into_parameters(self, api_key: &str) -> QueryParameters {
        let mut params = QueryParameters::new()
            .with(PARAM_API_KEY, api_key)
            .with(PARAM_MODULE, MODULE_ACCOUNT)
            .with(PARAM_ACTION, ACTION_TXLIST)
            .with(PARAM_ADDRESS, self.address)
            .with(PARAM_START_BLOCK, self.start_block.to_string())
            .with(PARAM_END_BLOCK, self.end_block.to_string())
            .with(PARAM_SORT, self.sort.as_str())
            .with(PARAM_OFFSET, self.offset.to_string())
            .with(PARAM_PAGE, self.page.to_string());
        params.extend(self.extra.iter());
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_parameters() {
        let params = TransactionListQuery::new("0xabc").into_parameters("KEY");

        let expected = QueryParameters::from([
            ("apikey", "KEY"),
            ("module", "account"),
            ("action", "txlist"),
            ("address", "0xabc"),
            ("startblock", "1"),
            ("endblock", "999999999"),
            ("sort", "asc"),
            ("offset", "10"),
            ("page", "1"),
        ]);
        assert_eq!(params, expected);
    }

    #[test]
    fn test_latest_query() {
        let params = TransactionListQuery::latest("0xabc").into_parameters("KEY");
        assert_eq!(params.get("sort"), Some("desc"));
        assert_eq!(params.get("offset"), Some("1"));
        assert_eq!(params.get("page"), Some("1"));
    }

    #[test]
    fn test_custom_fields_and_extras() {
        let params = TransactionListQuery::new("0xabc")
            .start_block(100)
            .end_block(200)
            .sort(SortOrder::Custom("dsc".to_string()))
            .offset(2)
            .page(3)
            .param("action", "tokentx")
            .into_parameters("KEY");

        assert_eq!(params.get("startblock"), Some("100"));
        assert_eq!(params.get("endblock"), Some("200"));
        assert_eq!(params.get("sort"), Some("dsc"));
        assert_eq!(params.get("offset"), Some("2"));
        assert_eq!(params.get("page"), Some("3"));
        assert_eq!(params.get("action"), Some("tokentx"));
    }

    #[test]
    fn test_sort_order_display() {
        assert_eq!(SortOrder::Ascending.to_string(), "asc");
        assert_eq!(SortOrder::Descending.to_string(), "desc");
        assert_eq!(SortOrder::Custom("dsc".to_string()).to_string(), "dsc");
    }
}
