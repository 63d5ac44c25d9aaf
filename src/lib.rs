pub mod error;
pub mod formatter;
pub mod options;
pub mod panel;
pub mod repair;
pub mod theme;

pub use crate::error::{Error, ErrorKind};
pub use crate::formatter::{format, format_with_options, FormatResult};
pub use crate::options::{FormatOptions, Indent};
pub use crate::panel::{PanelRegistry, TabId};
pub use crate::theme::{Theme, ThemeStore};

pub type Result<T> = std::result::Result<T, Error>;
