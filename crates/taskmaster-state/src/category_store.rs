use taskmaster_core::TaskResult;
use taskmaster_domain::Category;
use taskmaster_persistence::{keys, Storage};

use crate::events::{ChangeListener, Notifier, StoreEvent};

/// Owns the category list, in insertion order.
///
/// Deleting or renaming a category leaves tasks filed under the old name as
/// they are.
#[derive(Debug)]
pub struct CategoryStore {
    storage: Storage,
    categories: Vec<Category>,
    notifier: Notifier,
}

impl CategoryStore {
    /// Load categories, seeding the defaults when nothing usable is stored.
    pub fn load(storage: Storage) -> Self {
        let categories = Self::load_or_seed(&storage);
        Self {
            storage,
            categories,
            notifier: Notifier::new(),
        }
    }

    pub fn reload(&mut self) {
        self.categories = Self::load_or_seed(&self.storage);
        self.notifier.notify(StoreEvent::CategoriesChanged);
    }

    fn load_or_seed(storage: &Storage) -> Vec<Category> {
        if let Some(categories) = storage.load_json::<Vec<Category>>(keys::CATEGORIES) {
            tracing::debug!("Loaded {} categories", categories.len());
            return categories;
        }

        let seed = Category::defaults();
        // Persist right away so the seeded ids stay stable across runs.
        if let Err(e) = storage.save_json(keys::CATEGORIES, &seed) {
            tracing::warn!("Could not persist default categories: {}", e);
        }
        tracing::debug!("Seeded {} default categories", seed.len());
        seed
    }

    pub fn subscribe(&mut self, listener: ChangeListener) {
        self.notifier.subscribe(listener);
    }

    pub fn list(&self) -> &[Category] {
        &self.categories
    }

    pub fn get(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Category names in list order, for filter menus.
    pub fn names(&self) -> Vec<String> {
        self.categories.iter().map(|c| c.name.clone()).collect()
    }

    pub fn add(&mut self, name: &str, color: &str) -> TaskResult<Category> {
        let category = Category::new(name, color)?;

        let mut next = self.categories.clone();
        next.push(category.clone());
        self.commit(next)?;

        tracing::debug!("Added category {} '{}'", category.id, category.name);
        Ok(category)
    }

    pub fn edit(
        &mut self,
        id: &str,
        name: &str,
        color: &str,
    ) -> TaskResult<Option<Category>> {
        let Some(index) = self.categories.iter().position(|c| c.id == id) else {
            tracing::debug!("Edit skipped, category {} not found", id);
            return Ok(None);
        };

        let mut next = self.categories.clone();
        next[index].rename(name, color)?;
        let category = next[index].clone();
        self.commit(next)?;

        tracing::debug!("Edited category {}", id);
        Ok(Some(category))
    }

    pub fn delete(&mut self, id: &str) -> TaskResult<bool> {
        if self.get(id).is_none() {
            tracing::debug!("Delete skipped, category {} not found", id);
            return Ok(false);
        }

        let next = self
            .categories
            .iter()
            .filter(|c| c.id != id)
            .cloned()
            .collect();
        self.commit(next)?;

        tracing::debug!("Deleted category {}", id);
        Ok(true)
    }

    fn commit(&mut self, next: Vec<Category>) -> TaskResult<()> {
        self.storage.save_json(keys::CATEGORIES, &next)?;
        self.categories = next;
        self.notifier.notify(StoreEvent::CategoriesChanged);
        Ok(())
    }
}
