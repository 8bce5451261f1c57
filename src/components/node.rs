//! Structural description produced by components

/// A renderable tree, independent of the terminal backend
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    /// Grouping with no container semantics
    Fragment(Vec<Node>),
    /// Output of a named component
    Component { name: &'static str, body: Box<Node> },
    Heading(String),
    Text(String),
    /// Bulleted list of (title, detail) pairs
    List(Vec<(String, String)>),
    Link { label: String, href: String },
    /// Activatable control
    Button(String),
}

impl Node {
    pub fn component(name: &'static str, body: Node) -> Node {
        Node::Component {
            name,
            body: Box::new(body),
        }
    }

    pub fn text(s: impl Into<String>) -> Node {
        Node::Text(s.into())
    }

    pub fn heading(s: impl Into<String>) -> Node {
        Node::Heading(s.into())
    }

    /// Direct children, looking through fragments and component wrappers
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Fragment(children) => children.as_slice(),
            Node::Component { body, .. } => body.children(),
            _ => &[],
        }
    }

    /// Component name if this node is a component
    pub fn component_name(&self) -> Option<&'static str> {
        match self {
            Node::Component { name, .. } => Some(*name),
            _ => None,
        }
    }

    /// Names of the top-level components under this node, in order
    pub fn child_components(&self) -> Vec<&'static str> {
        self.children()
            .iter()
            .filter_map(Node::component_name)
            .collect()
    }

    /// Concatenated text of every leaf, one line per leaf
    pub fn plain_text(&self) -> String {
        let mut out = Vec::new();
        self.collect_text(&mut out);
        out.join("\n")
    }

    fn collect_text(&self, out: &mut Vec<String>) {
        match self {
            Node::Fragment(children) => children.iter().for_each(|c| c.collect_text(out)),
            Node::Component { body, .. } => body.collect_text(out),
            Node::Heading(s) | Node::Text(s) | Node::Button(s) => out.push(s.clone()),
            Node::List(items) => {
                for (title, detail) in items {
                    out.push(format!("{} {}", title, detail).trim_end().to_string());
                }
            }
            Node::Link { label, href } => out.push(format!("{} {}", label, href)),
        }
    }
}
