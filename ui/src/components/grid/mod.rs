pub mod contact_card;
pub mod github_card;
pub mod project_card;

pub use contact_card::ContactCard;
pub use github_card::GithubCard;
pub use project_card::{LanguageBar, ProjectCard};
