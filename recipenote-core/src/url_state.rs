//! Query-string codec for filter/sort criteria.
//!
//! Criteria are mirrored into a URL query string so a filtered view can be
//! shared or restored after a reload. Defaults are omitted on encode, so
//! the default criteria encode to the empty string.

use url::form_urlencoded;

use crate::types::{Category, Criteria, SortKey, Status};

/// Read criteria from a query string such as `q=egg&cat=main`.
///
/// Recognized keys are `q`, `cat`, `st` and `sort`; everything else is
/// ignored. Absent or empty `cat`/`st` leave the filter unset, and values
/// outside the closed enums are treated as absent. An unknown `sort` falls
/// back to the default ordering.
pub fn decode(query_string: &str) -> Criteria {
    let mut criteria = Criteria::default();

    for (key, value) in form_urlencoded::parse(query_string.as_bytes()) {
        match key.as_ref() {
            "q" => criteria.query = value.into_owned(),
            "cat" => criteria.category = Category::from_str(&value),
            "st" => criteria.status = Status::from_str(&value),
            "sort" => criteria.sort = SortKey::from_str(&value).unwrap_or_default(),
            _ => {}
        }
    }

    criteria
}

/// Encode criteria as a query string, omitting defaults: `q` only when
/// non-empty, `cat`/`st` only when set, `sort` only when not the default.
pub fn encode(criteria: &Criteria) -> String {
    let mut pairs = form_urlencoded::Serializer::new(String::new());

    if !criteria.query.is_empty() {
        pairs.append_pair("q", &criteria.query);
    }
    if let Some(category) = criteria.category {
        pairs.append_pair("cat", category.as_str());
    }
    if let Some(status) = criteria.status {
        pairs.append_pair("st", status.as_str());
    }
    if criteria.sort != SortKey::default() {
        pairs.append_pair("sort", criteria.sort.as_str());
    }

    pairs.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_omits_defaults() {
        let criteria = Criteria {
            query: "egg".to_string(),
            category: Some(Category::Main),
            status: None,
            sort: SortKey::CreatedDesc,
        };
        assert_eq!(encode(&criteria), "q=egg&cat=main");
    }

    #[test]
    fn test_default_criteria_encode_to_empty_string() {
        assert_eq!(encode(&Criteria::default()), "");
    }

    #[test]
    fn test_decode_applies_defaults() {
        let criteria = decode("");
        assert_eq!(criteria, Criteria::default());

        let criteria = decode("cat=dessert");
        assert_eq!(criteria.query, "");
        assert_eq!(criteria.category, Some(Category::Dessert));
        assert_eq!(criteria.status, None);
        assert_eq!(criteria.sort, SortKey::CreatedDesc);
    }

    #[test]
    fn test_decode_ignores_empty_and_unknown_values() {
        let criteria = decode("cat=&st=snoozed&sort=by-color&flavour=umami");
        assert_eq!(criteria.category, None);
        assert_eq!(criteria.status, None);
        assert_eq!(criteria.sort, SortKey::CreatedDesc);
    }

    #[test]
    fn test_round_trip_preserves_criteria() {
        let criteria = Criteria {
            query: "egg".to_string(),
            category: Some(Category::Main),
            status: None,
            sort: SortKey::CreatedDesc,
        };
        assert_eq!(decode(&encode(&criteria)), criteria);
    }

    #[test]
    fn test_round_trip_preserves_raw_query_text() {
        let criteria = Criteria {
            query: "  green beans & rice  ".to_string(),
            status: Some(Status::Cooked),
            sort: SortKey::TimeAsc,
            ..Criteria::default()
        };
        let encoded = encode(&criteria);
        assert_eq!(decode(&encoded), criteria);
    }

    #[test]
    fn test_non_default_sort_is_encoded() {
        let criteria = Criteria {
            sort: SortKey::TimeDesc,
            ..Criteria::default()
        };
        assert_eq!(encode(&criteria), "sort=time-desc");
    }
}
