//! Immediate-mode editor for schema-described config documents.
//!
//! Each frame the host hands a `TreeEditor` an object, its document node, a
//! pixel base rectangle and a row/column `Placement` cursor. The editor sizes
//! nested boxes with `layout`, draws through a `GuiBackend`, and applies edits
//! back into the document in place.

pub mod backend;
pub mod config;
pub mod geometry;
pub mod headless;
pub mod layout;
pub mod selector;
pub mod sync;

pub use backend::{FieldStyle, GuiBackend};
pub use config::EditorConfig;
pub use geometry::{Placement, Rect};
pub use headless::{DrawOp, HeadlessBackend};
pub use layout::{field_rows, row_units};
pub use selector::{CollectionState, CycleState, Named, is_valid_name};
pub use sync::TreeEditor;
