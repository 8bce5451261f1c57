//! Static portfolio sections

use chrono::Datelike;

use super::{Component, Node};
use crate::config::PortfolioConfig;
use crate::models::{Link, Profile, Project};

/// Name and tagline
#[derive(Clone, Debug)]
pub struct Header {
    profile: Profile,
}

impl Header {
    pub fn new(profile: Profile) -> Self {
        Header { profile }
    }
}

impl Component for Header {
    fn name(&self) -> &'static str {
        "Header"
    }

    fn body(&self) -> Node {
        Node::Fragment(vec![
            Node::heading(self.profile.name.as_str()),
            Node::text(self.profile.tagline.as_str()),
        ])
    }
}

#[derive(Clone, Debug)]
pub struct About {
    paragraphs: Vec<String>,
}

impl About {
    pub fn new(paragraphs: Vec<String>) -> Self {
        About { paragraphs }
    }
}

impl Component for About {
    fn name(&self) -> &'static str {
        "About"
    }

    fn body(&self) -> Node {
        let mut nodes = vec![Node::heading("About me")];
        nodes.extend(self.paragraphs.iter().map(|p| Node::text(p.as_str())));
        Node::Fragment(nodes)
    }
}

#[derive(Clone, Debug)]
pub struct Projects {
    projects: Vec<Project>,
}

impl Projects {
    pub fn new(projects: Vec<Project>) -> Self {
        Projects { projects }
    }
}

impl Component for Projects {
    fn name(&self) -> &'static str {
        "Projects"
    }

    fn body(&self) -> Node {
        let items = self
            .projects
            .iter()
            .map(|p| {
                let detail = match &p.url {
                    Some(url) if p.description.is_empty() => format!("({})", url),
                    Some(url) => format!("- {} ({})", p.description, url),
                    None if p.description.is_empty() => String::new(),
                    None => format!("- {}", p.description),
                };
                (p.title.clone(), detail)
            })
            .collect();
        Node::Fragment(vec![Node::heading("Projects"), Node::List(items)])
    }
}

/// Contact links and copyright line
#[derive(Clone, Debug)]
pub struct Footer {
    owner: String,
    links: Vec<Link>,
    note: String,
    year: i32,
}

impl Footer {
    /// The year is fixed at construction so repeated renders are identical
    pub fn new(owner: &str, links: Vec<Link>, note: &str) -> Self {
        Self::with_year(owner, links, note, chrono::Local::now().year())
    }

    pub fn with_year(owner: &str, links: Vec<Link>, note: &str, year: i32) -> Self {
        Footer {
            owner: owner.to_string(),
            links,
            note: note.to_string(),
            year,
        }
    }
}

impl Component for Footer {
    fn name(&self) -> &'static str {
        "Footer"
    }

    fn body(&self) -> Node {
        let mut nodes: Vec<Node> = self
            .links
            .iter()
            .map(|l| Node::Link {
                label: l.label.clone(),
                href: l.href.clone(),
            })
            .collect();
        let mut copyright = format!("© {} {}", self.year, self.owner);
        if !self.note.is_empty() {
            copyright.push_str(" · ");
            copyright.push_str(&self.note);
        }
        nodes.push(Node::text(copyright));
        Node::Fragment(nodes)
    }
}

impl From<&PortfolioConfig> for Header {
    fn from(config: &PortfolioConfig) -> Self {
        Header::new(config.profile.clone())
    }
}

impl From<&PortfolioConfig> for About {
    fn from(config: &PortfolioConfig) -> Self {
        About::new(config.about.clone())
    }
}

impl From<&PortfolioConfig> for Projects {
    fn from(config: &PortfolioConfig) -> Self {
        Projects::new(config.projects.clone())
    }
}

impl From<&PortfolioConfig> for Footer {
    fn from(config: &PortfolioConfig) -> Self {
        Footer::new(&config.profile.name, config.links.clone(), &config.footer_note)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_shows_profile() {
        let header = Header::new(Profile {
            name: "Ada".into(),
            tagline: "Engines".into(),
        });
        let node = header.render();
        assert_eq!(node.component_name(), Some("Header"));
        assert_eq!(node.plain_text(), "Ada\nEngines");
    }

    #[test]
    fn test_projects_detail_formats() {
        let projects = Projects::new(vec![
            Project::new("A", "first"),
            Project {
                url: Some("https://b.dev".into()),
                ..Project::new("B", "")
            },
            Project::new("C", ""),
        ]);
        match projects.body().children() {
            [Node::Heading(_), Node::List(items)] => {
                assert_eq!(items[0], ("A".to_string(), "- first".to_string()));
                assert_eq!(items[1], ("B".to_string(), "(https://b.dev)".to_string()));
                assert_eq!(items[2], ("C".to_string(), String::new()));
            }
            other => panic!("unexpected projects body: {:?}", other),
        }
    }

    #[test]
    fn test_footer_copyright_line() {
        let footer = Footer::with_year("Ada", vec![Link::new("Mail", "mailto:a@b.c")], "", 2024);
        assert_eq!(footer.render().plain_text(), "Mail mailto:a@b.c\n© 2024 Ada");
    }

    #[test]
    fn test_leaves_are_idempotent() {
        let config = PortfolioConfig::default();
        let leaves: Vec<Box<dyn Component>> = vec![
            Box::new(Header::from(&config)),
            Box::new(About::from(&config)),
            Box::new(Projects::from(&config)),
            Box::new(Footer::from(&config)),
        ];
        for leaf in &leaves {
            assert_eq!(leaf.render(), leaf.render());
        }
    }
}
