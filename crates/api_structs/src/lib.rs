mod event;
mod reminder;
mod status;

pub mod dtos {
    pub use crate::event::dtos::*;
    pub use crate::reminder::dtos::*;
}

pub use crate::event::api::*;
pub use crate::reminder::api::*;
pub use crate::status::api::*;
