mod confirm;
mod credentials;
mod map;
mod navbar;

pub use self::{confirm::*, credentials::*, map::*, navbar::*};
