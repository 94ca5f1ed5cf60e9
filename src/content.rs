use once_cell::sync::Lazy;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

const SITE_JSON: &str = include_str!("../content/site.json");

static SITE: Lazy<Result<SiteContent, ContentError>> =
    Lazy::new(|| SiteContent::from_json(SITE_JSON));

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Site content is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Site content field `{field}` is empty")]
    EmptyField { field: String },

    #[error("Site content lists no projects")]
    NoProjects,

    #[error("Site content field `{field}` is not a valid link ({value}): {source}")]
    InvalidLink {
        field: String,
        value: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Site content field `{field}` must use the {expected} scheme, found `{found}`")]
    UnexpectedScheme {
        field: String,
        expected: &'static str,
        found: String,
    },
}

/// One showcased work sample. The link is handed to the browser as-is.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct ProjectDescriptor {
    pub title: String,
    pub description: String,
    pub video_url: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Hero {
    pub headline: String,
    pub tagline: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct SiteContent {
    pub owner: String,
    pub profile_url: String,
    pub email: String,
    pub hero: Hero,
    /// Display order is declaration order.
    pub projects: Vec<ProjectDescriptor>,
    pub about: Vec<String>,
    pub contact_blurb: String,
    pub copyright_year: u16,
}

/// The embedded `content/site.json`, parsed on first use.
pub fn site() -> &'static Result<SiteContent, ContentError> {
    &SITE
}

impl SiteContent {
    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        let content: SiteContent = serde_json::from_str(raw)?;
        content.validate()?;
        Ok(content)
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        require("owner", &self.owner)?;
        require("email", &self.email)?;

        check_link("profile_url", &self.profile_url, &["http", "https"])?;
        check_link("email", &self.mailto_href(), &["mailto"])?;

        if self.projects.is_empty() {
            return Err(ContentError::NoProjects);
        }
        for (i, project) in self.projects.iter().enumerate() {
            require(&format!("projects[{i}].title"), &project.title)?;
            require(&format!("projects[{i}].description"), &project.description)?;
            require(&format!("projects[{i}].video_url"), &project.video_url)?;
        }
        Ok(())
    }

    pub fn mailto_href(&self) -> String {
        format!("mailto:{}", self.email)
    }

    pub fn hire_label(&self) -> String {
        format!("Hire {} on Freelancer", self.owner)
    }

    pub fn email_label(&self) -> String {
        format!("Contact {} via email", self.owner)
    }
}

fn require(field: &str, value: &str) -> Result<(), ContentError> {
    if value.trim().is_empty() {
        return Err(ContentError::EmptyField { field: field.to_string() });
    }
    Ok(())
}

fn check_link(field: &str, value: &str, schemes: &[&'static str]) -> Result<(), ContentError> {
    let url = Url::parse(value).map_err(|source| ContentError::InvalidLink {
        field: field.to_string(),
        value: value.to_string(),
        source,
    })?;
    if !schemes.contains(&url.scheme()) {
        return Err(ContentError::UnexpectedScheme {
            field: field.to_string(),
            expected: schemes[0],
            found: url.scheme().to_string(),
        });
    }
    Ok(())
}
