//! Node types for the produced render tree.

mod element;

pub use element::Element;

use crate::instance::InstanceId;

/// Component name marking a rendered column descriptor.
pub const TABLE_COLUMN: &str = "TableColumn";

/// A node in the render tree produced by header and cell renderers
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Node {
    /// Empty node (renders nothing)
    #[default]
    Empty,

    /// Comment placeholder left behind by conditional content
    Comment(String),

    /// Text content
    Text(String),

    /// Element with classes, inline style and children
    Element(Element),

    /// Ordered sequence of sibling nodes
    Fragment(Vec<Node>),

    /// Named component instance
    Component(Component),
}

/// A component node: a name marker plus the mounted instance it stands for.
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    pub name: String,
    pub instance: Option<InstanceId>,
    pub class: Vec<String>,
    pub children: Vec<Node>,
}

impl Component {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            instance: None,
            class: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn instance(mut self, instance: InstanceId) -> Self {
        self.instance = Some(instance);
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class.push(class.into());
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Whether this component is a column descriptor.
    pub fn is_table_column(&self) -> bool {
        self.name == TABLE_COLUMN
    }
}

impl Node {
    /// Create an empty node
    pub const fn empty() -> Self {
        Self::Empty
    }

    /// Create a comment placeholder
    pub fn comment(text: impl Into<String>) -> Self {
        Self::Comment(text.into())
    }

    /// Create a text node
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(content.into())
    }

    /// Create a fragment from a sequence of nodes
    pub fn fragment(children: Vec<Node>) -> Self {
        Self::Fragment(children)
    }

    /// Create a node standing for a mounted column descriptor
    pub fn table_column(instance: InstanceId) -> Self {
        Self::Component(Component::new(TABLE_COLUMN).instance(instance))
    }

    /// Check if node is empty
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Placeholders (empty or comment nodes) carry no visible content.
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Empty | Self::Comment(_))
    }

    /// Top-level nodes: the items of a fragment, or the node itself.
    pub fn top_level(&self) -> &[Node] {
        match self {
            Self::Fragment(children) => children,
            other => std::slice::from_ref(other),
        }
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Concatenated text of this node and all descendants, in tree order.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Self::Text(content) => out.push_str(content),
            Self::Element(element) => {
                for child in &element.children {
                    child.collect_text(out);
                }
            }
            Self::Fragment(children) => {
                for child in children {
                    child.collect_text(out);
                }
            }
            Self::Component(component) => {
                for child in &component.children {
                    child.collect_text(out);
                }
            }
            Self::Empty | Self::Comment(_) => {}
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

impl From<Component> for Node {
    fn from(component: Component) -> Self {
        Self::Component(component)
    }
}

impl From<Vec<Node>> for Node {
    fn from(children: Vec<Node>) -> Self {
        Self::Fragment(children)
    }
}
