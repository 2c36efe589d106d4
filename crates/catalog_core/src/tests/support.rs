use shared::domain::{Category, CategoryId, Product, ProductId, Sex, User, UserId};

use crate::join::{join, JoinedProduct};

pub fn user(id: i64, name: &str, sex: Sex) -> User {
    User {
        id: UserId(id),
        name: name.to_string(),
        sex,
    }
}

pub fn category(id: i64, title: &str, icon: &str, owner_id: i64) -> Category {
    Category {
        id: CategoryId(id),
        title: title.to_string(),
        icon: icon.to_string(),
        owner_id: UserId(owner_id),
    }
}

pub fn product(id: i64, name: &str, category_id: i64) -> Product {
    Product {
        id: ProductId(id),
        name: name.to_string(),
        category_id: CategoryId(category_id),
    }
}

pub fn users() -> Vec<User> {
    vec![
        user(1, "Roma", Sex::M),
        user(2, "Anna", Sex::F),
        user(3, "Max", Sex::M),
    ]
}

pub fn categories() -> Vec<Category> {
    vec![
        category(1, "Grocery", "🍞", 2),
        category(2, "Drinks", "🍺", 1),
        category(3, "Fruits", "🍏", 2),
        category(5, "Clothes", "👚", 3),
        // owner 9 does not exist
        category(6, "Toys", "🧸", 9),
    ]
}

pub fn products() -> Vec<Product> {
    vec![
        product(1, "Milk", 2),
        product(2, "Bread", 1),
        product(3, "Eggs", 1),
        product(4, "Jacket", 5),
        product(5, "Sugar", 1),
        product(6, "Banana", 3),
        product(7, "Beer", 2),
        product(8, "Socks", 5),
        product(9, "Apples", 3),
        product(10, "Teddy", 6),
        product(11, "Ghost", 42),
    ]
}

pub fn joined() -> Vec<JoinedProduct> {
    join(&users(), &categories(), &products())
}

pub fn names(rows: &[JoinedProduct]) -> Vec<&str> {
    rows.iter().map(|row| row.name.as_str()).collect()
}
