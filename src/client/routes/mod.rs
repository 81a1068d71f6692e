pub mod add;
pub mod home;
pub mod not_found;

pub use add::AddSpacecraft;
pub use home::Home;
pub use not_found::NotFound;
