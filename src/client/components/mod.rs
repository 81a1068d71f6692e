pub mod filter_chips;
pub mod form_input;
pub mod navbar;
pub mod notice;
pub mod page;
pub mod spacecraft_card;
pub mod spacecraft_dialog;
pub mod spacecraft_form;

pub use filter_chips::FilterChips;
pub use form_input::FormInput;
pub use navbar::Navbar;
pub use notice::Notice;
pub use page::Page;
pub use spacecraft_card::SpacecraftCard;
pub use spacecraft_dialog::SpacecraftDialog;
pub use spacecraft_form::SpacecraftForm;
