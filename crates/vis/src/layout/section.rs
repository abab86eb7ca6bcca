use crate::id::Id;
use crate::layout::Element;
use crate::layout::ElementKind;

/// A titled group of elements.
#[derive(Debug)]
pub struct Section {
    id: Id,
    /// The section heading.
    pub title: String,
    /// A short name used for styling, e.g. `kpis` or `charts`.
    pub class: &'static str,
    /// The elements of the section.
    pub elements: Vec<ElementKind>,
}

impl Section {
    /// Creates an empty section.
    pub fn new(id: Id, title: &str, class: &'static str) -> Section {
        Self {
            id,
            title: title.to_owned(),
            class,
            elements: Vec::new(),
        }
    }

    /// Appends an element.
    pub fn add(mut self, element: ElementKind) -> Section {
        self.elements.push(element);
        self
    }
}

impl Element for Section {
    fn id(&self) -> Id {
        self.id
    }
}
