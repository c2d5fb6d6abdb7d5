pub mod config;
pub mod debounce;
pub mod query;
pub mod session;
pub mod store;
pub mod types;
pub mod url_state;
pub mod validate;

pub use config::NotebookConfig;
pub use debounce::Debouncer;
pub use query::{filter_recipes, sort_recipes};
pub use session::Notebook;
pub use store::{FileStore, MemoryStore, RecipeStore, StoreError, StringStore};
pub use types::{split_lines, Category, Criteria, Recipe, RecipeDraft, SortKey, Status};
pub use url_state::{decode, encode};
pub use validate::{validate, Field, ValidationReport};
