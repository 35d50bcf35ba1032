use crate::Section;

/// A renderer's output for one section.
///
/// `first_in_group` is set when the section opens its group, so hosts can
/// emit the group heading exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered<T> {
    pub title: T,
    pub content: T,
    pub first_in_group: bool,
}

/// Presentation contract between the reordering core and a host UI.
///
/// The core calls this per section and treats `Output` as opaque — it never
/// inspects what the renderer produced. Implement one renderer per target
/// surface (terminal preview, HTML export, etc.).
pub trait SectionRenderer {
    type Output;

    /// The section's heading (e.g., the school or employer name).
    fn title(&self, section: &Section) -> Self::Output;

    /// The section's body.
    fn content(&self, section: &Section) -> Self::Output;

    /// Renders one section, tagging whether it opens its group.
    fn render(&self, section: &Section, first_in_group: bool) -> Rendered<Self::Output> {
        Rendered {
            title: self.title(section),
            content: self.content(section),
            first_in_group,
        }
    }
}
