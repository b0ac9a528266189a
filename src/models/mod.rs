pub mod record;
pub mod theme;

pub use record::SessionRecord;
pub use theme::Theme;
