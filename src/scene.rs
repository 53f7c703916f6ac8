pub mod color;
pub mod composition;
pub mod element;
pub mod layout;
pub mod timeline;
