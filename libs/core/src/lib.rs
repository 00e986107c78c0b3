//! Interactive component trees for outgoing messages and modals.
//!
//! The crate models the UI building blocks a remote chat service renders (buttons, select menus,
//! sections, containers and friends) as a closed set of typed variants plus a forward-compatible
//! [`UnknownComponent`]. Trees are built with slot-checked constructors, walked in a fixed
//! depth-first order, validated against the legacy or extended budget and round-tripped through
//! the keyed-map wire format.
//!
//! ```
//! use ctree_core::{ActionRow, Button, MessageComponentTree, ValidationMode};
//!
//! let tree = MessageComponentTree::new()
//!     .with_component(ActionRow::of([Button::primary("confirm", "Confirm").id(1)]));
//! tree.validate(ValidationMode::Legacy).expect("fits the legacy budget");
//! assert_eq!(tree.button_by_custom_id("confirm").map(|b| b.unique_id), Some(1));
//! ```
pub mod codec;
pub mod components;
pub mod error;
pub mod flags;
pub mod limits;
pub mod tree;
pub mod validate;

pub use components::*;
pub use error::{ComponentError, LimitRule};
pub use flags::MessageFlag;
pub use limits::ComponentLimits;
pub use tree::{
    ComponentTree, MessageComponentTree, MessageRoot, ModalComponentTree, ModalRoot, Nodes,
    RootKind, TopLevelOf, TreeRoot,
};
pub use validate::{ValidationMode, Validator};

/// Returns the semantic version advertised by this crate.
///
/// ```
/// assert_eq!(ctree_core::version(), env!("CARGO_PKG_VERSION"));
/// ```
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
