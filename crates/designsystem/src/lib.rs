#![doc = include_str!("../README.md")]
#![warn(clippy::pedantic, missing_docs, unreachable_pub)]

pub mod css;
pub mod defaults;
pub mod edit;
pub mod error;
pub mod events;
pub mod export;
pub mod store;
pub mod table;
pub mod tokens;

pub use css::to_css_variables;
pub use edit::{
    ColorField, ParseEditError, ScalarField, ShadowField, ThemeField, TokenEdit, TypographyField,
};
pub use error::{ExportError, StoreError};
pub use events::{ChangeBus, TokenEvent};
pub use export::{
    Clock, DesignDocument, ExportFormat, Exporter, FixedClock, SystemClock, EXPORT_FILE_NAME,
    EXPORT_MIME_TYPE,
};
pub use store::{Category, MutationPolicy, TokenSet, TokenStore};
pub use table::TokenTable;
