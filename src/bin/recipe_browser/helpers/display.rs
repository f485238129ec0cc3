// ABOUTME: Terminal renderer and output formatting for recipe-browser
// ABOUTME: Prints recipe cards, slideshow position, cuisine options and the detail view
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use recipe_browser::models::Recipe;
use recipe_browser::presentation::{RecipeCard, RecipeDetail};
use recipe_browser::view::ViewRenderer;

/// Renderer writing to stdout
///
/// In live mode every callback prints immediately. Otherwise the latest
/// grid is only kept and printed on demand with [`TerminalRenderer::print_view`].
#[derive(Debug, Default)]
pub struct TerminalRenderer {
    live: bool,
    cards: Vec<RecipeCard>,
    view_len: usize,
}

impl TerminalRenderer {
    /// Renderer printing every change as it happens
    pub fn live() -> Self {
        Self {
            live: true,
            ..Self::default()
        }
    }

    /// Renderer that stays silent until asked
    pub fn buffered() -> Self {
        Self::default()
    }

    /// Print the revealed part of the current view
    pub fn print_view(&self) {
        if self.cards.is_empty() {
            println!("\nNo recipes match the current filters.");
            return;
        }

        println!(
            "\nShowing {} of {} recipes",
            self.cards.len(),
            self.view_len
        );
        println!("{}", "=".repeat(72));
        for card in &self.cards {
            print_card(card);
        }
        if self.cards.len() < self.view_len {
            println!("[more] {} more available", self.view_len - self.cards.len());
        }
    }
}

impl ViewRenderer for TerminalRenderer {
    fn on_filtered_view_changed(&mut self, view: &[&Recipe], cursor: usize) {
        self.cards = view
            .iter()
            .take(cursor)
            .map(|&recipe| RecipeCard::from(recipe))
            .collect();
        self.view_len = view.len();
        if self.live {
            self.print_view();
        }
    }

    fn on_slideshow_changed(&mut self, selection: &[&Recipe], index: usize) {
        if !self.live || selection.is_empty() {
            return;
        }
        if let Some(recipe) = index.checked_sub(1).and_then(|i| selection.get(i)) {
            let dots: String = (1..=selection.len())
                .map(|slide| if slide == index { '●' } else { '○' })
                .collect();
            println!("\n[slideshow {dots}] {} ({})", recipe.name, recipe.cuisine);
        }
    }

    fn on_fetch_error(&mut self, message: &str) {
        // Buffered callers get the same failure back from `load`
        if self.live {
            eprintln!("{message}");
        }
    }

    fn on_loading(&mut self, loading: bool) {
        if self.live && loading {
            println!("Loading recipes...");
        }
    }

    fn on_cuisine_options(&mut self, cuisines: &[String]) {
        if self.live {
            println!("Cuisines: {}", cuisines.join(", "));
        }
    }

    fn on_recipe_detail(&mut self, detail: &RecipeDetail) {
        print_detail(detail);
    }
}

/// Print one grid card
pub fn print_card(card: &RecipeCard) {
    println!("#{:<4} {}", card.id, card.name);
    println!(
        "      {} {}  |  {} min  |  {}  |  {}",
        card.stars, card.rating, card.total_minutes, card.difficulty, card.cuisine
    );
    println!("      Ingredients: {}", card.ingredients_preview);
}

/// Print the full detail view
pub fn print_detail(detail: &RecipeDetail) {
    println!("\n{}", detail.name);
    println!("{}", "-".repeat(72));
    println!("{} {} ({} reviews)", detail.stars, detail.rating, detail.review_count);
    println!(
        "Prep {} min, cook {} min  |  {}  |  serves {}  |  {}",
        detail.prep_minutes, detail.cook_minutes, detail.difficulty, detail.servings, detail.cuisine
    );
    println!("Calories per serving: {}", detail.calories_per_serving);

    println!("\nIngredients:");
    for ingredient in &detail.ingredients {
        println!("  • {ingredient}");
    }

    println!("\nInstructions:");
    for (step, instruction) in detail.instructions.iter().enumerate() {
        println!("  {}. {instruction}", step + 1);
    }

    if !detail.tags.is_empty() {
        println!("\nTags: {}", detail.tags.join(", "));
    }
    if !detail.meal_types.is_empty() {
        println!("Meal: {}", detail.meal_types.join(", "));
    }
}

/// Print the cuisine list, one per line
pub fn print_cuisines(cuisines: &[String]) {
    println!("\nCuisines ({}):", cuisines.len());
    for cuisine in cuisines {
        println!("  {cuisine}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(id: u64, name: &str) -> Recipe {
        Recipe {
            id,
            name: name.to_owned(),
            cuisine: "Italian".to_owned(),
            rating: 4.5,
            ..Recipe::default()
        }
    }

    #[test]
    fn test_buffered_renderer_keeps_only_revealed_cards() {
        let recipes = [recipe(1, "Pizza"), recipe(2, "Pasta"), recipe(3, "Risotto")];
        let view: Vec<&Recipe> = recipes.iter().collect();

        let mut renderer = TerminalRenderer::buffered();
        renderer.on_filtered_view_changed(&view, 2);

        assert!(!renderer.live);
        assert_eq!(renderer.view_len, 3);
        let names: Vec<&str> = renderer.cards.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Pizza", "Pasta"]);
    }

    #[test]
    fn test_fetch_error_leaves_buffered_state_alone() {
        let recipes = [recipe(1, "Pizza")];
        let view: Vec<&Recipe> = recipes.iter().collect();

        let mut renderer = TerminalRenderer::buffered();
        renderer.on_filtered_view_changed(&view, 1);
        renderer.on_fetch_error("Error: failed to reach api. Please try refreshing the page.");

        assert_eq!(renderer.cards.len(), 1);
        assert_eq!(renderer.view_len, 1);
    }
}
