//! Root composition: Header, About, Projects, Footer

use super::{About, Component, Footer, Header, Node, Projects};
use crate::config::PortfolioConfig;

/// Owns its four sections and renders them in a fixed order
#[derive(Clone, Debug)]
pub struct Portfolio {
    header: Header,
    about: About,
    projects: Projects,
    footer: Footer,
}

impl Portfolio {
    pub fn new(config: &PortfolioConfig) -> Self {
        Portfolio {
            header: Header::from(config),
            about: About::from(config),
            projects: Projects::from(config),
            footer: Footer::from(config),
        }
    }

    pub fn children(&self) -> [&dyn Component; 4] {
        [&self.header, &self.about, &self.projects, &self.footer]
    }
}

impl Component for Portfolio {
    fn name(&self) -> &'static str {
        "Portfolio"
    }

    fn body(&self) -> Node {
        Node::Fragment(self.children().iter().map(|c| c.render()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_child_order() {
        let portfolio = Portfolio::new(&PortfolioConfig::default());
        let node = portfolio.render();
        assert_eq!(node.component_name(), Some("Portfolio"));
        assert_eq!(
            node.child_components(),
            vec!["Header", "About", "Projects", "Footer"]
        );
    }

    #[test]
    fn test_no_extra_top_level_nodes() {
        let node = Portfolio::new(&PortfolioConfig::default()).render();
        assert_eq!(node.children().len(), 4);
        assert!(node.children().iter().all(|c| c.component_name().is_some()));
    }

    #[test]
    fn test_order_holds_for_empty_content() {
        let config = PortfolioConfig {
            about: Vec::new(),
            projects: Vec::new(),
            links: Vec::new(),
            ..PortfolioConfig::default()
        };
        let node = Portfolio::new(&config).render();
        assert_eq!(
            node.child_components(),
            vec!["Header", "About", "Projects", "Footer"]
        );
    }

    #[test]
    fn test_render_is_idempotent() {
        let portfolio = Portfolio::new(&PortfolioConfig::default());
        assert_eq!(portfolio.render(), portfolio.render());
    }
}
