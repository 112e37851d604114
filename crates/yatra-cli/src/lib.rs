//! yatra-cli
//! =========
//!
//! Command-line interface for the `yatra-core` tourism data core.
//!
//! This crate primarily provides a binary (`yatra`). The library target only
//! exists so that docs.rs renders this overview. See the README for full
//! usage examples.
//!
//! Quick start
//! -----------
//!
//! ```text
//! cargo install yatra-cli
//! yatra --help
//! yatra stats
//! yatra browse --zone Northern --state Delhi
//! yatra ask "what is the history of the taj mahal"
//! yatra story Onam
//! ```
//!
//! Settings can be kept in a TOML file passed with `--config`; see the
//! README for the recognised keys. For programmatic access use
//! `yatra-core` directly.
#![cfg_attr(docsrs, feature(doc_cfg))]
