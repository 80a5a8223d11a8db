//! Data models.

pub mod item;
pub mod item_type;
pub mod options;
pub mod user;

pub use item::ContentItem;
pub use item_type::{ContentTypeDefinition, ContentTypeSettings};
pub use options::{ContentOptions, ContentsOrder, ContentsStatus, SortDirection};
pub use user::{User, UserContext};
