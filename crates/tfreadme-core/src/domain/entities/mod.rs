pub mod document;
pub mod item;
pub mod readme;

pub use document::Node;
pub use item::ModuleItem;
pub use readme::Readme;
