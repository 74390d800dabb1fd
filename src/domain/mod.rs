//! Domain models for notion-cli
//!
//! Pure transformations between CLI input and API JSON, without any I/O.

mod id;
mod rich_text;
mod property;
mod block;

pub use id::{page_url, PageId, PAGE_URL_BASE};
pub use rich_text::{plain_text, text_runs};
pub use property::{
    flatten_properties, page_status, page_title, search_title, PropertyNames, PropertyValue,
    TaskFields,
};
pub use block::{render_table_row, results, BlockKind};
