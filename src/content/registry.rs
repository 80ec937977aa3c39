use crate::core::TutorialError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One recipe, tip or lesson step: a titled SQL snippet within a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonContentItem {
    pub title: String,
    pub description: String,
    pub sql_text: String,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Category {
    name: String,
    items: Vec<LessonContentItem>,
}

/// On-disk shape: `[{ "category": .., "items": [{ "title", "description", "sql" }] }]`
#[derive(Debug, Deserialize)]
struct CategoryDef {
    category: String,
    items: Vec<ItemDef>,
}

#[derive(Debug, Deserialize)]
struct ItemDef {
    title: String,
    description: String,
    #[serde(default)]
    sql: String,
}

/// Immutable category -> items table. Categories keep declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContentRegistry {
    categories: Vec<Category>,
}

impl ContentRegistry {
    pub fn from_json(json: &str) -> Result<Self, TutorialError> {
        let defs: Vec<CategoryDef> = serde_json::from_str(json)?;
        let mut builder = RegistryBuilder::default();
        for def in defs {
            let items = def
                .items
                .into_iter()
                .map(|item| (item.title, item.description, item.sql))
                .collect();
            builder.category(def.category, items)?;
        }
        Ok(builder.build())
    }

    #[must_use]
    pub fn list_categories(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn get_items(&self, category: &str) -> Result<&[LessonContentItem], TutorialError> {
        self.categories
            .iter()
            .find(|c| c.name == category)
            .map(|c| c.items.as_slice())
            .ok_or_else(|| TutorialError::CategoryNotFound(category.to_string()))
    }

    /// Items of `category` whose title or description contains `search_term`,
    /// ignoring case. An empty term matches everything.
    pub fn filter_items(
        &self,
        category: &str,
        search_term: &str,
    ) -> Result<Vec<&LessonContentItem>, TutorialError> {
        let needle = search_term.to_lowercase();
        Ok(self
            .get_items(category)?
            .iter()
            .filter(|item| {
                item.title.to_lowercase().contains(&needle)
                    || item.description.to_lowercase().contains(&needle)
            })
            .collect())
    }

    pub fn get_item(
        &self,
        category: &str,
        title: &str,
    ) -> Result<Option<&LessonContentItem>, TutorialError> {
        Ok(self.get_items(category)?.iter().find(|item| item.title == title))
    }

    /// Canonical name of a category, matched case-insensitively.
    #[must_use]
    pub fn resolve_category(&self, name: &str) -> Option<&str> {
        self.categories
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
            .map(|c| c.name.as_str())
    }

    #[must_use]
    pub fn item_count(&self) -> usize {
        self.categories.iter().map(|c| c.items.len()).sum()
    }
}

/// Collects categories while enforcing unique category names and unique
/// item titles within a category.
#[derive(Debug, Default)]
pub(crate) struct RegistryBuilder {
    categories: Vec<Category>,
}

impl RegistryBuilder {
    pub(crate) fn category(
        &mut self,
        name: String,
        items: Vec<(String, String, String)>,
    ) -> Result<&mut Self, TutorialError> {
        if self.categories.iter().any(|c| c.name == name) {
            return Err(TutorialError::DuplicateCategory(name));
        }

        let mut seen = HashSet::new();
        let mut built = Vec::with_capacity(items.len());
        for (title, description, sql_text) in items {
            if !seen.insert(title.clone()) {
                return Err(TutorialError::DuplicateItem { category: name, title });
            }
            built.push(LessonContentItem {
                title,
                description,
                sql_text,
                category: name.clone(),
            });
        }

        self.categories.push(Category { name, items: built });
        Ok(self)
    }

    pub(crate) fn build(self) -> ContentRegistry {
        ContentRegistry {
            categories: self.categories,
        }
    }
}
