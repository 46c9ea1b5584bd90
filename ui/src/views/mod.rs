mod categories;
pub use categories::CategoriesView;
