//! Section renderers for the storefront page.

mod about;
mod cart;
mod catalog;
mod contacts;
mod footer;
mod header;
mod hero;
mod html;
mod reviews;
mod shell;

pub use about::*;
pub use cart::*;
pub use catalog::*;
pub use contacts::*;
pub use footer::*;
pub use header::*;
pub use hero::*;
pub use html::html_escape;
pub use reviews::*;
pub use shell::*;
