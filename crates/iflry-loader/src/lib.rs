pub mod config;
pub mod content;
pub mod datasets;
pub mod probe;
pub mod store;

#[cfg(test)]
mod test_support;

pub use config::{CONFIG_FILE, load_config, load_config_from_path, load_config_or_default};
pub use content::{
    decode_documents, is_content_file, load_documents, load_documents_from_dir,
    load_documents_strict, load_documents_strict_from_dir, parse_documents, parse_value,
    write_document,
};
pub use datasets::{Datasets, load_dataset, load_datasets, parse_dataset, write_dataset};
pub use probe::PublicDirProbe;
pub use store::{ContentStore, load_member_overrides};
