pub mod home;
pub mod login;

pub use home::{editor_form, home_page};
pub use login::login_page;
