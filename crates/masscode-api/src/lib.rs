//! massCode API client library
//!
//! A thin async client for the json-server REST API that backs the massCode
//! snippet manager: tags, folders and snippets, with filtered reads and
//! partial updates.
//!
//! # Quick Start
//!
//! For convenient imports, use the prelude:
//!
//! ```
//! use masscode_api_rs::prelude::*;
//! ```

pub mod client;
pub mod error;
pub mod models;
pub mod params;
pub mod prelude;
