//! Listing query translation
//!
//! Turns the untrusted, stringly-typed query parameters of `GET /products`
//! into typed, immutable filter/sort/page specifications. Malformed input is
//! never an error here; it degrades to the documented defaults.

use std::str::FromStr;

use serde::Deserialize;
use strum::{Display, EnumString};
use utoipa::IntoParams;

/// Page served when the `page` parameter is absent or unusable
pub const DEFAULT_PAGE: u32 = 1;
/// Page size applied when the `limit` parameter is absent or unusable
pub const DEFAULT_LIMIT: u32 = 10;
/// Ceiling on the page size, bounding response size per request
pub const MAX_LIMIT: u32 = 100;

/// Raw listing parameters as they arrive on the query string
///
/// Every field deserializes as an optional string so that a malformed value
/// (`minPrice=abc`, `page=-3`) can never reject the request at extraction
/// time; interpretation happens in [`ListQuery::from_params`].
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListParams {
    /// Exact category to filter on
    pub category: Option<String>,
    /// Inclusive price lower bound
    pub min_price: Option<String>,
    /// Inclusive price upper bound
    pub max_price: Option<String>,
    /// Sort key, e.g. `price_asc` or `createdAt_desc`
    pub sort_by: Option<String>,
    /// 1-based page number (default 1)
    pub page: Option<String>,
    /// Page size (default 10, max 100)
    pub limit: Option<String>,
}

/// Which records a listing query includes
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSpec {
    pub category: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

/// Fields a listing may be sorted by
///
/// This allow-list is the injection barrier: the raw `sortBy` field name is
/// parsed into the enum and only the enum's serialization ever reaches the
/// store's sort document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "camelCase")]
pub enum SortField {
    Price,
    Name,
    Category,
    CreatedAt,
}

/// Sort order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

/// How a listing is ordered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

/// Which slice of the result set a listing returns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSpec {
    /// 1-based page number, always >= 1
    pub page: u32,
    /// Page size, always in 1..=MAX_LIMIT
    pub limit: u32,
}

impl PageSpec {
    /// Number of records to skip before this page starts
    pub fn skip(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.limit)
    }
}

impl Default for PageSpec {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// A fully parsed listing query
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListQuery {
    pub filter: FilterSpec,
    pub sort: Option<SortSpec>,
    pub page: PageSpec,
}

impl ListQuery {
    /// Parse raw request parameters into a typed query
    ///
    /// Pure function: identical parameters always produce an identical
    /// query. Malformed values degrade to their defaults instead of
    /// failing:
    ///
    /// - `category` applies only when present and non-empty
    /// - `minPrice` / `maxPrice` that do not parse as finite numbers are
    ///   treated as absent; `minPrice > maxPrice` is allowed and simply
    ///   matches nothing
    /// - `sortBy` splits on the first `_`; the field must be one of
    ///   [`SortField`], any direction other than `asc` sorts descending,
    ///   and an unknown field drops the sort entirely
    /// - `page` and `limit` fall back to their defaults when missing,
    ///   unparseable, zero, or negative; `limit` is clamped to
    ///   [`MAX_LIMIT`]
    pub fn from_params(params: &ListParams) -> Self {
        let filter = FilterSpec {
            category: params
                .category
                .as_deref()
                .filter(|c| !c.is_empty())
                .map(str::to_owned),
            min_price: parse_price(params.min_price.as_deref()),
            max_price: parse_price(params.max_price.as_deref()),
        };

        let page = PageSpec {
            page: parse_positive(params.page.as_deref(), DEFAULT_PAGE),
            limit: parse_positive(params.limit.as_deref(), DEFAULT_LIMIT).min(MAX_LIMIT),
        };

        Self {
            filter,
            sort: parse_sort(params.sort_by.as_deref()),
            page,
        }
    }
}

fn parse_price(raw: Option<&str>) -> Option<f64> {
    raw.and_then(|v| v.trim().parse::<f64>().ok())
        // NaN/infinity would poison the range filter
        .filter(|v| v.is_finite())
}

fn parse_positive(raw: Option<&str>, default: u32) -> u32 {
    raw.and_then(|v| v.trim().parse::<u32>().ok())
        .filter(|v| *v >= 1)
        .unwrap_or(default)
}

fn parse_sort(raw: Option<&str>) -> Option<SortSpec> {
    let raw = raw?;
    let (field, direction) = match raw.split_once('_') {
        Some((field, direction)) => (field, direction),
        None => (raw, ""),
    };

    let field = SortField::from_str(field).ok()?;
    let direction = if direction == "asc" {
        SortDirection::Asc
    } else {
        SortDirection::Desc
    };

    Some(SortSpec { field, direction })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> ListParams {
        let mut p = ListParams::default();
        for (key, value) in pairs {
            let value = Some((*value).to_string());
            match *key {
                "category" => p.category = value,
                "minPrice" => p.min_price = value,
                "maxPrice" => p.max_price = value,
                "sortBy" => p.sort_by = value,
                "page" => p.page = value,
                "limit" => p.limit = value,
                other => panic!("unknown parameter {other}"),
            }
        }
        p
    }

    #[test]
    fn test_empty_params_yield_defaults() {
        let query = ListQuery::from_params(&ListParams::default());
        assert_eq!(query.filter, FilterSpec::default());
        assert_eq!(query.sort, None);
        assert_eq!(query.page, PageSpec { page: 1, limit: 10 });
    }

    #[test]
    fn test_category_filter() {
        let query = ListQuery::from_params(&params(&[("category", "Kitchen")]));
        assert_eq!(query.filter.category.as_deref(), Some("Kitchen"));
    }

    #[test]
    fn test_empty_category_is_ignored() {
        let query = ListQuery::from_params(&params(&[("category", "")]));
        assert_eq!(query.filter.category, None);
    }

    #[test]
    fn test_price_bounds() {
        let query = ListQuery::from_params(&params(&[("minPrice", "20"), ("maxPrice", "50.5")]));
        assert_eq!(query.filter.min_price, Some(20.0));
        assert_eq!(query.filter.max_price, Some(50.5));
    }

    #[test]
    fn test_unparseable_price_is_absent() {
        let query = ListQuery::from_params(&params(&[("minPrice", "cheap"), ("maxPrice", "1e3")]));
        assert_eq!(query.filter.min_price, None);
        assert_eq!(query.filter.max_price, Some(1000.0));
    }

    #[test]
    fn test_non_finite_price_is_absent() {
        let query = ListQuery::from_params(&params(&[("minPrice", "NaN"), ("maxPrice", "inf")]));
        assert_eq!(query.filter.min_price, None);
        assert_eq!(query.filter.max_price, None);
    }

    #[test]
    fn test_inverted_price_range_is_kept_as_is() {
        // min > max matches nothing, which is legitimate, not an error
        let query = ListQuery::from_params(&params(&[("minPrice", "60"), ("maxPrice", "10")]));
        assert_eq!(query.filter.min_price, Some(60.0));
        assert_eq!(query.filter.max_price, Some(10.0));
    }

    #[test]
    fn test_sort_ascending() {
        let query = ListQuery::from_params(&params(&[("sortBy", "price_asc")]));
        assert_eq!(
            query.sort,
            Some(SortSpec {
                field: SortField::Price,
                direction: SortDirection::Asc,
            })
        );
    }

    #[test]
    fn test_sort_descending() {
        let query = ListQuery::from_params(&params(&[("sortBy", "price_desc")]));
        assert_eq!(
            query.sort,
            Some(SortSpec {
                field: SortField::Price,
                direction: SortDirection::Desc,
            })
        );
    }

    #[test]
    fn test_sort_unknown_direction_is_descending() {
        let query = ListQuery::from_params(&params(&[("sortBy", "name_upwards")]));
        assert_eq!(
            query.sort,
            Some(SortSpec {
                field: SortField::Name,
                direction: SortDirection::Desc,
            })
        );
    }

    #[test]
    fn test_sort_missing_direction_is_descending() {
        let query = ListQuery::from_params(&params(&[("sortBy", "category")]));
        assert_eq!(
            query.sort,
            Some(SortSpec {
                field: SortField::Category,
                direction: SortDirection::Desc,
            })
        );
    }

    #[test]
    fn test_sort_created_at() {
        let query = ListQuery::from_params(&params(&[("sortBy", "createdAt_asc")]));
        assert_eq!(
            query.sort.map(|s| s.field),
            Some(SortField::CreatedAt)
        );
    }

    #[test]
    fn test_sort_field_outside_allow_list_is_dropped() {
        let query = ListQuery::from_params(&params(&[("sortBy", "bogusfield_asc")]));
        assert_eq!(query.sort, None);

        // an attacker-shaped key never reaches the store
        let query = ListQuery::from_params(&params(&[("sortBy", "$where_asc")]));
        assert_eq!(query.sort, None);
    }

    #[test]
    fn test_pagination_parsing() {
        let query = ListQuery::from_params(&params(&[("page", "5"), ("limit", "25")]));
        assert_eq!(query.page, PageSpec { page: 5, limit: 25 });
        assert_eq!(query.page.skip(), 100);
    }

    #[test]
    fn test_pagination_rejects_zero_and_negative() {
        let query = ListQuery::from_params(&params(&[("page", "0"), ("limit", "-3")]));
        assert_eq!(query.page, PageSpec { page: 1, limit: 10 });
    }

    #[test]
    fn test_pagination_rejects_garbage() {
        let query = ListQuery::from_params(&params(&[("page", "two"), ("limit", "ten")]));
        assert_eq!(query.page, PageSpec { page: 1, limit: 10 });
    }

    #[test]
    fn test_limit_is_clamped() {
        let query = ListQuery::from_params(&params(&[("limit", "5000")]));
        assert_eq!(query.page.limit, MAX_LIMIT);
    }

    #[test]
    fn test_first_page_skips_nothing() {
        let query = ListQuery::from_params(&ListParams::default());
        assert_eq!(query.page.skip(), 0);
    }

    #[test]
    fn test_parsing_is_pure() {
        let input = params(&[
            ("category", "Kitchen"),
            ("minPrice", "20"),
            ("maxPrice", "50"),
            ("sortBy", "price_asc"),
            ("page", "2"),
            ("limit", "5"),
        ]);

        let first = ListQuery::from_params(&input);
        let second = ListQuery::from_params(&input);
        assert_eq!(first, second);
    }

    #[test]
    fn test_sort_field_names_match_wire_format() {
        assert_eq!(SortField::Price.to_string(), "price");
        assert_eq!(SortField::Name.to_string(), "name");
        assert_eq!(SortField::Category.to_string(), "category");
        assert_eq!(SortField::CreatedAt.to_string(), "createdAt");
    }
}
