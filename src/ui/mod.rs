pub mod icons;
pub mod output;
pub mod table;
pub mod theme;

pub use icons::Icons;
pub use output::{dim, error, header, info, record_detail, success, warn};
pub use table::{content_preview, records_table};
pub use theme::{theme, Theme};
