mod admin;
mod home;
mod login;
mod reset_password;

#[derive(Debug, Clone, Copy, Default)]
pub enum Page {
    #[default]
    Home,
    Admin,
}

impl Page {
    pub const fn path(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Admin => "/admin",
        }
    }
}

pub use self::{admin::*, home::*, login::*, reset_password::*};
