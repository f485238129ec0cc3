// ABOUTME: View renderer seam between the page engine and whatever draws it
// ABOUTME: Callbacks for the filtered grid, slideshow, fetch errors, cuisines and detail modal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::models::Recipe;
use crate::presentation::RecipeDetail;

/// Receives page state whenever it changes
///
/// The page engine calls these synchronously while handling an event.
/// Renderers draw `view[..cursor]` for the grid and hide "show more" once
/// `cursor == view.len()`. An empty slideshow selection means the slideshow
/// area is hidden.
pub trait ViewRenderer {
    /// The filtered view or the number of revealed items changed
    fn on_filtered_view_changed(&mut self, view: &[&Recipe], cursor: usize);

    /// The slideshow selection or visible slide changed (`index` is 1-based)
    fn on_slideshow_changed(&mut self, selection: &[&Recipe], index: usize);

    /// The recipe fetch failed; `message` is ready to display
    fn on_fetch_error(&mut self, message: &str);

    /// The recipe fetch started (`true`) or finished (`false`)
    fn on_loading(&mut self, _loading: bool) {}

    /// Options for the cuisine selector, sorted
    fn on_cuisine_options(&mut self, _cuisines: &[String]) {}

    /// A recipe was opened in the detail modal
    fn on_recipe_detail(&mut self, _detail: &RecipeDetail) {}
}
