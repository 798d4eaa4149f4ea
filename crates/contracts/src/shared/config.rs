use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SiteConfig {
    pub owner: OwnerConfig,
    pub typing: TypingConfig,
    #[serde(default)]
    pub sections: Vec<SectionConfig>,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
    #[serde(default)]
    pub stats: Vec<StatConfig>,
    /// Бейджи технологий в разделе "обо мне"
    #[serde(default)]
    pub tech_stack: Vec<String>,
    /// Бейджи интересов
    #[serde(default)]
    pub passions: Vec<String>,
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct OwnerConfig {
    pub name: String,
    pub tagline: String,
    #[serde(default)]
    pub about: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub photo: Option<String>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct TypingConfig {
    pub roles: Vec<String>,
    #[serde(default = "default_type_delay")]
    pub type_delay_ms: u32,
    #[serde(default = "default_delete_delay")]
    pub delete_delay_ms: u32,
    #[serde(default = "default_word_pause")]
    pub word_pause_ms: u32,
    #[serde(default = "default_next_word_pause")]
    pub next_word_pause_ms: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SectionConfig {
    pub id: String,
    pub label: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
    #[serde(default)]
    pub icon: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct StatConfig {
    pub label: String,
    /// Текст счётчика как на странице, например "15+"
    pub value: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct StorageConfig {
    #[serde(default = "default_theme_key")]
    pub theme_key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            theme_key: default_theme_key(),
        }
    }
}

fn default_type_delay() -> u32 {
    100
}

fn default_delete_delay() -> u32 {
    50
}

fn default_word_pause() -> u32 {
    2000
}

fn default_next_word_pause() -> u32 {
    500
}

fn default_theme_key() -> String {
    "theme".to_string()
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
tech_stack = ["Rust", "JavaScript", "React", "Node.js", "Python", "PostgreSQL", "MongoDB", "Tailwind CSS"]
passions = ["AI & Automation", "Open Source", "UI/UX Design", "Neuroscience"]

[owner]
name = "Diwakar"
tagline = "Building intelligent, human-friendly software"
about = "I build full-stack web apps and AI-powered automation tools, from voice assistants to real-time dashboards."
email = "hello@example.com"
photo = "./assets/images/profile.jpg"

[typing]
roles = [
    "Full Stack Developer",
    "UI/UX Designer",
    "Problem Solver",
    "Tech Enthusiast",
    "Creative Coder",
]
type_delay_ms = 100
delete_delay_ms = 50
word_pause_ms = 2000
next_word_pause_ms = 500

[[sections]]
id = "home"
label = "Home"

[[sections]]
id = "about"
label = "About"

[[sections]]
id = "projects"
label = "Projects"

[[sections]]
id = "contact"
label = "Contact"

[[socials]]
label = "GitHub"
url = "https://github.com/Diwakar-odds"
icon = "github"

[[stats]]
label = "Projects"
value = "9+"

[[stats]]
label = "Technologies"
value = "20+"

[[stats]]
label = "Years Coding"
value = "3+"

[storage]
theme_key = "theme"
"#;

impl SiteConfig {
    pub fn from_toml_str(contents: &str) -> anyhow::Result<Self> {
        let config: SiteConfig = toml::from_str(contents)?;
        if config.typing.roles.is_empty() {
            log::warn!("site config: typing.roles is empty, hero animation stays blank");
        }
        Ok(config)
    }
}

/// Load the site configuration.
///
/// The site is fully static, so the embedded default is the only source.
pub fn load_site_config() -> anyhow::Result<SiteConfig> {
    log::info!("Using default embedded site configuration");
    SiteConfig::from_toml_str(DEFAULT_CONFIG)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = load_site_config().unwrap();
        assert_eq!(config.typing.roles.len(), 5);
        assert_eq!(config.typing.word_pause_ms, 2000);
        assert_eq!(config.storage.theme_key, "theme");
        let ids: Vec<&str> = config.sections.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["home", "about", "projects", "contact"]);
        assert_eq!(config.tech_stack.first().map(String::as_str), Some("Rust"));
        assert_eq!(config.passions.len(), 4);
    }

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config = SiteConfig::from_toml_str(
            r#"
            [owner]
            name = "A"
            tagline = "B"

            [typing]
            roles = ["One"]
            "#,
        )
        .unwrap();
        assert_eq!(config.typing.type_delay_ms, 100);
        assert_eq!(config.typing.delete_delay_ms, 50);
        assert_eq!(config.typing.next_word_pause_ms, 500);
        assert!(config.sections.is_empty());
        assert!(config.tech_stack.is_empty());
        assert_eq!(config.storage.theme_key, "theme");
    }

    #[test]
    fn test_invalid_config_is_error() {
        assert!(SiteConfig::from_toml_str("[owner]\nname = 1").is_err());
    }
}
