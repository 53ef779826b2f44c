//! Table- and column-level metadata: the store interface, labels, and the TOML codec

pub mod codec;
pub mod label;
mod store;
mod style;

pub use codec::{drop_all_metadata, meta_to_toml, toml_to_meta};
pub use label::{find_labels, label, labels, note, set_label, set_note};
pub use store::MetadataStore;
pub use style::{MetaEntry, Style};
