//! Filter and sort over the record collection.
//!
//! Both functions are pure: they take the full collection and return a new
//! vector, leaving the input untouched.

use crate::types::{Category, Criteria, Recipe, SortKey, Status};

/// Rank for records without a cook time when sorting ascending.
const UNSPECIFIED_TIME_ASC: i64 = 9_999;

/// Rank for records without a cook time when sorting descending.
/// Unspecified entries sink to the bottom in both directions.
const UNSPECIFIED_TIME_DESC: i64 = -1;

/// Select the records matching the given text query, category and status.
///
/// Text matching is case-insensitive over title, ingredients and notes;
/// category and status are exact matches. A record is included only when
/// all three predicates pass.
pub fn filter_recipes(
    recipes: &[Recipe],
    query: &str,
    category: Option<Category>,
    status: Option<Status>,
) -> Vec<Recipe> {
    let q = query.trim().to_lowercase();

    recipes
        .iter()
        .filter(|r| {
            let text_ok = q.is_empty()
                || r.title.to_lowercase().contains(&q)
                || r.ingredients.iter().any(|i| i.to_lowercase().contains(&q))
                || r.notes.as_deref().unwrap_or_default().to_lowercase().contains(&q);
            let category_ok = category.map_or(true, |c| r.category == c);
            let status_ok = status.map_or(true, |s| r.status == s);
            text_ok && category_ok && status_ok
        })
        .cloned()
        .collect()
}

/// Return a new ordering of the records. The sort is stable, so records
/// with equal keys keep their relative input order.
pub fn sort_recipes(recipes: &[Recipe], sort: SortKey) -> Vec<Recipe> {
    let mut out = recipes.to_vec();
    match sort {
        SortKey::CreatedDesc => out.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortKey::CreatedAsc => out.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        SortKey::TimeAsc => {
            out.sort_by_key(|r| r.cook_time.map(i64::from).unwrap_or(UNSPECIFIED_TIME_ASC))
        }
        SortKey::TimeDesc => out.sort_by(|a, b| {
            let key = |r: &Recipe| r.cook_time.map(i64::from).unwrap_or(UNSPECIFIED_TIME_DESC);
            key(b).cmp(&key(a))
        }),
    }
    out
}

/// Derive the visible list for the given criteria: filter, then sort.
pub fn apply(recipes: &[Recipe], criteria: &Criteria) -> Vec<Recipe> {
    let filtered = filter_recipes(recipes, &criteria.query, criteria.category, criteria.status);
    sort_recipes(&filtered, criteria.sort)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use uuid::Uuid;

    fn recipe(title: &str, cook_time: Option<u32>, created_ms: i64) -> Recipe {
        Recipe {
            id: Uuid::new_v4(),
            title: title.to_string(),
            category: Category::Main,
            status: Status::Want,
            ingredients: Vec::new(),
            steps: Vec::new(),
            cook_time,
            servings: None,
            source_url: None,
            notes: None,
            created_at: DateTime::from_timestamp_millis(created_ms).unwrap(),
        }
    }

    fn titles(recipes: &[Recipe]) -> Vec<&str> {
        recipes.iter().map(|r| r.title.as_str()).collect()
    }

    #[test]
    fn test_filter_matches_title_case_insensitively() {
        let mut curry = recipe("Curry", None, 1);
        curry.ingredients = vec!["rice".to_string()];
        let mut soup = recipe("Soup", None, 2);
        soup.ingredients = vec!["salt".to_string()];

        let out = filter_recipes(&[curry, soup], "cur", None, None);
        assert_eq!(titles(&out), vec!["Curry"]);
    }

    #[test]
    fn test_filter_matches_ingredients_and_notes() {
        let mut curry = recipe("Curry", None, 1);
        curry.ingredients = vec!["Rice".to_string(), "roux".to_string()];
        let mut soup = recipe("Soup", None, 2);
        soup.notes = Some("very SALTY".to_string());

        let recipes = [curry, soup];
        assert_eq!(titles(&filter_recipes(&recipes, "RICE", None, None)), vec!["Curry"]);
        assert_eq!(titles(&filter_recipes(&recipes, "salty", None, None)), vec!["Soup"]);
    }

    #[test]
    fn test_blank_query_passes_everything() {
        let recipes = [recipe("Curry", None, 1), recipe("Soup", None, 2)];
        assert_eq!(filter_recipes(&recipes, "   ", None, None).len(), 2);
    }

    #[test]
    fn test_category_and_status_are_exact_matches() {
        let mut curry = recipe("Curry", None, 1);
        curry.category = Category::Main;
        curry.status = Status::Cooked;
        let mut pudding = recipe("Pudding", None, 2);
        pudding.category = Category::Dessert;

        let recipes = [curry, pudding];
        assert_eq!(
            titles(&filter_recipes(&recipes, "", Some(Category::Dessert), None)),
            vec!["Pudding"]
        );
        assert_eq!(
            titles(&filter_recipes(&recipes, "", None, Some(Status::Cooked))),
            vec!["Curry"]
        );
        // All predicates must pass together
        assert!(filter_recipes(&recipes, "pudding", None, Some(Status::Cooked)).is_empty());
    }

    #[test]
    fn test_sort_created_orders() {
        let recipes = [recipe("a", None, 10), recipe("b", None, 30), recipe("c", None, 20)];
        assert_eq!(titles(&sort_recipes(&recipes, SortKey::CreatedDesc)), vec!["b", "c", "a"]);
        assert_eq!(titles(&sort_recipes(&recipes, SortKey::CreatedAsc)), vec!["a", "c", "b"]);
    }

    #[test]
    fn test_unspecified_cook_time_sorts_last_ascending() {
        let recipes = [recipe("none", None, 1), recipe("ten", Some(10), 2), recipe("thirty", Some(30), 3)];
        assert_eq!(
            titles(&sort_recipes(&recipes, SortKey::TimeAsc)),
            vec!["ten", "thirty", "none"]
        );
    }

    #[test]
    fn test_unspecified_cook_time_sorts_last_descending_too() {
        let recipes = [recipe("none", None, 1), recipe("ten", Some(10), 2), recipe("thirty", Some(30), 3)];
        assert_eq!(
            titles(&sort_recipes(&recipes, SortKey::TimeDesc)),
            vec!["thirty", "ten", "none"]
        );
    }

    #[test]
    fn test_sort_is_stable_on_equal_keys() {
        let recipes = [
            recipe("first", Some(10), 1),
            recipe("second", Some(10), 2),
            recipe("third", Some(10), 3),
        ];
        assert_eq!(
            titles(&sort_recipes(&recipes, SortKey::TimeAsc)),
            vec!["first", "second", "third"]
        );
    }

    #[test]
    fn test_sort_does_not_mutate_input() {
        let recipes = [recipe("a", None, 1), recipe("b", None, 2)];
        let _ = sort_recipes(&recipes, SortKey::CreatedDesc);
        assert_eq!(titles(&recipes), vec!["a", "b"]);
    }

    #[test]
    fn test_apply_filters_then_sorts() {
        let mut quick = recipe("Quick curry", Some(10), 1);
        quick.ingredients = vec!["rice".to_string()];
        let mut slow = recipe("Slow curry", Some(120), 2);
        slow.ingredients = vec!["rice".to_string()];
        let soup = recipe("Soup", Some(5), 3);

        let criteria = Criteria {
            query: "curry".to_string(),
            sort: SortKey::TimeAsc,
            ..Criteria::default()
        };
        let out = apply(&[slow, quick, soup], &criteria);
        assert_eq!(titles(&out), vec!["Quick curry", "Slow curry"]);
    }
}
