use serde::{Deserialize, Serialize};

/// Who the portfolio belongs to
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub tagline: String,
}

impl Default for Profile {
    fn default() -> Self {
        Profile {
            name: String::from("Your Name"),
            tagline: String::from("Web developer in training"),
        }
    }
}

/// A single project card
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub url: Option<String>,
}

impl Project {
    pub fn new(title: &str, description: &str) -> Self {
        Project {
            title: title.to_string(),
            description: description.to_string(),
            url: None,
        }
    }
}

/// Contact or social link shown in the footer
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub href: String,
}

impl Link {
    pub fn new(label: &str, href: &str) -> Self {
        Link {
            label: label.to_string(),
            href: href.to_string(),
        }
    }
}
