//! Display surfaces the controller renders into

use crate::render::markup::Markup;

/// Where rendered markup goes
///
/// The main content area is replaced wholesale on every selection change.
pub trait Surface {
    /// Replace the main content container
    fn replace_main(&mut self, markup: Markup);

    /// Replace the sidebar worker list
    fn replace_sidebar(&mut self, markup: Markup);

    /// Whether the current main content has an element with this id
    fn has_element(&self, id: &str) -> bool;
}

/// In-memory surface holding the latest markup
#[derive(Debug, Default, Clone)]
pub struct BufferSurface {
    main: Markup,
    sidebar: Markup,
    replacements: usize,
}

impl BufferSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn main(&self) -> &Markup {
        &self.main
    }

    pub fn sidebar(&self) -> &Markup {
        &self.sidebar
    }

    /// How many times the main content has been replaced
    pub fn replacements(&self) -> usize {
        self.replacements
    }

    pub fn into_parts(self) -> (Markup, Markup) {
        (self.sidebar, self.main)
    }
}

impl Surface for BufferSurface {
    fn replace_main(&mut self, markup: Markup) {
        self.main = markup;
        self.replacements += 1;
    }

    fn replace_sidebar(&mut self, markup: Markup) {
        self.sidebar = markup;
    }

    fn has_element(&self, id: &str) -> bool {
        self.main.as_str().contains(&format!(r#"id="{}""#, id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_surface_replaces_content() {
        let mut surface = BufferSurface::new();
        surface.replace_main(Markup::raw(r#"<canvas id="skillsChart"></canvas>"#));
        assert!(surface.has_element("skillsChart"));

        surface.replace_main(Markup::raw("<p>empty</p>"));
        assert!(!surface.has_element("skillsChart"));
        assert_eq!(surface.replacements(), 2);
        assert_eq!(surface.main().as_str(), "<p>empty</p>");
    }
}
