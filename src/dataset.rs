use once_cell::sync::Lazy;

use crate::models::Recipe;

/// Built-in recipes backing search and detail.
pub static SAMPLE_RECIPES: Lazy<Vec<Recipe>> = Lazy::new(|| {
    vec![
        Recipe {
            id: "1".to_string(),
            title: "Caprese Salad".to_string(),
            ingredients: vec![
                "tomato".to_string(),
                "basil".to_string(),
                "mozzarella".to_string(),
                "olive oil".to_string(),
            ],
            instructions: "Slice tomatoes and mozzarella. Layer with basil leaves. Drizzle olive oil."
                .to_string(),
            image_url: "/placeholder.svg".to_string(),
        },
        Recipe {
            id: "2".to_string(),
            title: "Pasta Pomodoro".to_string(),
            ingredients: vec![
                "pasta".to_string(),
                "tomato".to_string(),
                "garlic".to_string(),
                "basil".to_string(),
            ],
            instructions: "Boil pasta. Sauté garlic in olive oil, add tomatoes, and simmer. Mix with pasta and garnish with basil."
                .to_string(),
            image_url: "/placeholder.svg".to_string(),
        },
        Recipe {
            id: "3".to_string(),
            title: "Bruschetta".to_string(),
            ingredients: vec![
                "bread".to_string(),
                "tomato".to_string(),
                "garlic".to_string(),
                "basil".to_string(),
                "olive oil".to_string(),
            ],
            instructions: "Toast bread slices. Top with a tomato, basil, and garlic mixture. Drizzle with olive oil."
                .to_string(),
            image_url: "/placeholder.svg".to_string(),
        },
    ]
});

#[must_use]
pub fn find_by_id(id: &str) -> Option<&'static Recipe> {
    SAMPLE_RECIPES.iter().find(|r| r.id == id)
}
