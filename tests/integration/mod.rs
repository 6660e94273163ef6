//! Integration tests for tree construction, ordering, and the files view

mod files_model;
mod ordering_policy;
mod tree_properties;
