//! `launchpad-ui`: server-side view models for the starter's pages.
//!
//! Everything here is a pure mapping from data to a comparable view structure
//! (plus an HTML writer for it). No HTTP, no IO.

pub mod cell;
pub mod demo;
pub mod forms;
pub mod html;
pub mod key_path;
pub mod table;

pub use cell::{Badge, BadgeVariant, Cell};
pub use forms::{
    ContactForm, ExampleForm, FieldError, FieldErrors, Notification, NotificationLevel, NumberInput,
    ValidExample,
};
pub use key_path::{KeyPath, KeyPathError};
pub use table::{
    Align, CellView, Column, DataTable, HeaderCell, RowView, TableView, DEFAULT_EMPTY_MESSAGE,
    SKELETON_ROWS,
};
