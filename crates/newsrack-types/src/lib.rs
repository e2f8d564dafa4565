pub mod error;
pub mod item;
pub mod page;

pub use error::FetchError;
pub use item::{ContentItem, OTHER_CATEGORY};
pub use page::ContentPage;
