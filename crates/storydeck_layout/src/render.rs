//! Render tree produced by the content distributor.

use derive_getters::Getters;
use serde::Serialize;
use storydeck_core::LayoutId;

/// Section header shared by every layout.
#[derive(Debug, Clone, PartialEq, Serialize, Getters)]
pub struct Header {
    /// Section title
    title: String,
    /// Section description
    description: String,
}

impl Header {
    pub(crate) fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// One populated structural slot.
#[derive(Debug, Clone, PartialEq, Serialize, Getters)]
pub struct Slot {
    /// Slot name from the layout definition
    name: String,
    /// Items allocated to the slot
    items: Vec<RenderItem>,
}

impl Slot {
    pub(crate) fn new(name: impl Into<String>, items: Vec<RenderItem>) -> Self {
        Self {
            name: name.into(),
            items,
        }
    }

    /// Whether the slot holds only placeholder content.
    pub fn is_placeholder(&self) -> bool {
        self.items
            .iter()
            .all(|item| matches!(item, RenderItem::Placeholder(_)))
    }
}

/// One item of slot content.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "data", rename_all = "kebab-case")]
pub enum RenderItem {
    /// Prose or rendered HTML
    Text(String),
    /// One bullet point
    Bullet(String),
    /// A structured content block
    Block {
        /// Block heading
        heading: String,
        /// Block body
        body: String,
    },
    /// Reference to a chart handed to the chart renderer
    ChartRef {
        /// Chart id
        chart_id: String,
        /// Chart title
        title: String,
    },
    /// Reference to an already-generated slide
    SlideRef {
        /// Slide position in the deck
        index: usize,
        /// Slide title
        title: String,
    },
    /// Deterministic placeholder for an empty structural position
    Placeholder(String),
}

/// A section's content distributed into one layout's structural slots.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use storydeck_core::LayoutId;
/// use storydeck_layout::render;
/// use storydeck_normalize::normalize_section;
///
/// let section = normalize_section(&json!({"id": "s1", "keyPoints": ["a", "b"]}), 0);
/// let tree = render(&section, LayoutId::FullWidth);
/// assert_eq!(*tree.layout(), LayoutId::FullWidth);
/// assert_eq!(tree.slots().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Getters)]
pub struct RenderTree {
    /// Layout the tree was distributed for (after any fallback)
    layout: LayoutId,
    /// Section header
    header: Header,
    /// Populated slots in layout order
    slots: Vec<Slot>,
}

impl RenderTree {
    pub(crate) fn new(layout: LayoutId, header: Header, slots: Vec<Slot>) -> Self {
        Self {
            layout,
            header,
            slots,
        }
    }

    /// Look up a slot by name.
    pub fn slot(&self, name: &str) -> Option<&Slot> {
        self.slots.iter().find(|slot| slot.name() == name)
    }
}
