mod daily;
mod events;
mod indices;
mod listing;
pub(crate) mod macros;

pub mod util;
