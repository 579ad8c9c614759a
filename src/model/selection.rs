//! Two-level (category, subgenre) selection

use crate::error::SelectionError;
use super::types::Category;

/// Current category and subgenre pick.
///
/// The subgenre is always empty or a member of the current category's list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    category: Option<Category>,
    subgenre: String,
}

impl Selection {
    pub fn category(&self) -> Option<Category> {
        self.category
    }

    pub fn subgenre(&self) -> Option<&str> {
        if self.subgenre.is_empty() {
            None
        } else {
            Some(&self.subgenre)
        }
    }

    /// Set the category and clear the subgenre
    pub fn select_category(&mut self, category: Category) {
        self.category = Some(category);
        self.subgenre.clear();
    }

    /// Set the subgenre if it belongs to the current category
    pub fn select_subgenre(&mut self, subgenre: &str) -> Result<(), SelectionError> {
        let category = self.category.ok_or(SelectionError::NoCategory)?;
        if !category.has_subgenre(subgenre) {
            return Err(SelectionError::UnknownSubgenre {
                category: category.label().to_string(),
                subgenre: subgenre.to_string(),
            });
        }
        self.subgenre = subgenre.to_string();
        Ok(())
    }

    /// Both parts are set, so a content adapter should be shown
    pub fn complete(&self) -> Option<(Category, &str)> {
        Some((self.category?, self.subgenre()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_category_resets_subgenre() {
        for category in Category::ALL {
            let mut selection = Selection::default();
            selection.select_category(Category::Music);
            selection.select_subgenre("Jazz").unwrap();
            selection.select_category(category);
            assert_eq!(selection.category(), Some(category));
            assert_eq!(selection.subgenre(), None);
            assert!(selection.complete().is_none());
        }
    }

    #[test]
    fn test_subgenre_requires_category() {
        let mut selection = Selection::default();
        assert_eq!(selection.select_subgenre("Jazz"), Err(SelectionError::NoCategory));
        assert!(selection.complete().is_none());
    }

    #[test]
    fn test_subgenre_outside_catalog_is_rejected() {
        let mut selection = Selection::default();
        selection.select_category(Category::Books);
        selection.select_subgenre("Poetry").unwrap();

        let err = selection.select_subgenre("Jazz").unwrap_err();
        assert!(matches!(err, SelectionError::UnknownSubgenre { .. }));
        // Rejected pick leaves the previous subgenre in place
        assert_eq!(selection.subgenre(), Some("Poetry"));
    }

    #[test]
    fn test_complete_selection() {
        let mut selection = Selection::default();
        selection.select_category(Category::Trivia);
        assert!(selection.complete().is_none());
        selection.select_subgenre("Sports").unwrap();
        assert_eq!(selection.complete(), Some((Category::Trivia, "Sports")));
    }
}
