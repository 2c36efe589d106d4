use std::collections::HashMap;

use serde::Serialize;
use shared::domain::{Category, CategoryId, Product, ProductId, User, UserId};
use tracing::debug;

/// A product with its category and the category's owner resolved.
///
/// Either side is `None` when the foreign key does not resolve; such rows are
/// kept here and only dropped by the display rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinedProduct {
    pub id: ProductId,
    pub name: String,
    pub category_id: CategoryId,
    pub category: Option<Category>,
    pub owner: Option<User>,
}

impl JoinedProduct {
    pub fn category_title(&self) -> &str {
        self.category
            .as_ref()
            .map_or("", |category| category.title.as_str())
    }

    pub fn owner_id(&self) -> Option<UserId> {
        self.owner.as_ref().map(|owner| owner.id)
    }
}

/// Id lookups over the static users and categories, built once.
#[derive(Debug, Clone, Default)]
pub struct CatalogIndex {
    categories: HashMap<CategoryId, Category>,
    users: HashMap<UserId, User>,
}

impl CatalogIndex {
    pub fn build(users: &[User], categories: &[Category]) -> Self {
        Self {
            categories: categories
                .iter()
                .map(|category| (category.id, category.clone()))
                .collect(),
            users: users.iter().map(|user| (user.id, user.clone())).collect(),
        }
    }

    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.get(&id)
    }

    pub fn user(&self, id: UserId) -> Option<&User> {
        self.users.get(&id)
    }

    pub fn owner_of(&self, category: &Category) -> Option<&User> {
        self.user(category.owner_id)
    }

    pub fn resolve(&self, product: &Product) -> JoinedProduct {
        let category = self.category(product.category_id);
        let owner = category.and_then(|category| self.owner_of(category));

        match (category, owner) {
            (None, _) => debug!(
                product_id = product.id.0,
                category_id = product.category_id.0,
                "product category does not resolve"
            ),
            (Some(category), None) => debug!(
                product_id = product.id.0,
                owner_id = category.owner_id.0,
                "category owner does not resolve"
            ),
            (Some(_), Some(_)) => {}
        }

        JoinedProduct {
            id: product.id,
            name: product.name.clone(),
            category_id: product.category_id,
            category: category.cloned(),
            owner: owner.cloned(),
        }
    }
}

/// Resolves every product against the categories and users, keeping product order.
pub fn join(users: &[User], categories: &[Category], products: &[Product]) -> Vec<JoinedProduct> {
    let index = CatalogIndex::build(users, categories);
    products
        .iter()
        .map(|product| index.resolve(product))
        .collect()
}

#[cfg(test)]
#[path = "tests/join_tests.rs"]
mod tests;
