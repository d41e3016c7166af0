mod fixtures;

mod clipboard_ops;
mod component_transfer;
mod reference_transfer;
