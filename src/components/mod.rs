pub mod fade_in;
pub mod motion_link;
pub mod header;
pub mod hero;
pub mod project_card;
pub mod project_grid;
pub mod about;
pub mod contact;
pub mod footer;

pub use fade_in::FadeIn;
pub use motion_link::MotionLink;
pub use header::Header;
pub use hero::Hero;
pub use project_card::ProjectCard;
pub use project_grid::ProjectGrid;
pub use about::About;
pub use contact::Contact;
pub use footer::Footer;
