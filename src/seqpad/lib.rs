//! # Seqpad Architecture
//!
//! Seqpad manages a markdown knowledge graph made of outline pages: pages carry
//! `key:: value` properties, bullet hierarchies and `##` sections, journals are
//! one page per day, and templates are pages used as skeletons for new ones.
//!
//! Like any UI-agnostic library, the core never prints and never exits. The CLI
//! in `main.rs` is one client; a tool server could be another.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs)                               │
//! │  - Parses arguments, prints results, owns exit codes        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade, returns Result<CmdResult>                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Create / update / journal / context / template decisions │
//! └─────────────────────────────────────────────────────────────┘
//!            │                                     │
//!            ▼                                     ▼
//! ┌──────────────────────────────┐  ┌───────────────────────────┐
//! │  Pure text (parser, outline, │  │  Storage Layer (store/)   │
//! │  format, templates)          │  │  PageStore trait          │
//! └──────────────────────────────┘  └───────────────────────────┘
//! ```
//!
//! ## Whole-document model
//!
//! Every mutating operation reads the target page completely, computes the new
//! text, and writes it back completely. Nothing is cached between calls and
//! nothing is locked, so concurrent writers to one page lose updates; callers
//! that need more must serialize access themselves.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Page operations and the result/message types
//! - [`parser`]: Properties, outline, sections and content flags
//! - [`outline`]: Nested outline items and their rendering
//! - [`format`]: Outline formatting, template merge, append strategies
//! - [`templates`]: Template discovery and name resolution
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types
//! - [`config`]: Per-graph configuration
//! - [`logging`]: Logger bootstrap for binaries
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod model;
pub mod outline;
pub mod parser;
pub mod store;
pub mod templates;
