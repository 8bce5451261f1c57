//! Component layer - named units producing a structural description
//!
//! The portfolio leaves are stateless and built once from config; the
//! counter owns a single state cell and requests a re-render through an
//! explicit trigger whenever it changes.

pub mod node;
pub mod leaves;
pub mod portfolio;
pub mod counter;

pub use node::Node;
pub use leaves::{About, Footer, Header, Projects};
pub use portfolio::Portfolio;
pub use counter::{Counter, RedrawFlag, RenderTrigger};

/// A named unit that can be rendered into a [`Node`]
pub trait Component {
    fn name(&self) -> &'static str;

    /// Content without the component wrapper
    fn body(&self) -> Node;

    fn render(&self) -> Node {
        Node::component(self.name(), self.body())
    }
}
