//! `FerroListen` directive grammar
//!
//! This crate turns block-structured configuration text into a tree of
//! [`Directive`]s and offers the argument-count helpers tunnel and session
//! parsers use to read them:
//!
//! ```text
//! ngrok {
//!     authtoken {env.NGROK_AUTHTOKEN}
//!     tunnel http {
//!         domain app.example.com
//!         basic_auth {
//!             alice correcthorse
//!         }
//!     }
//! }
//! ```

pub mod args;
pub mod directive;
pub mod lexer;
pub mod parser;

pub use args::parse_bool;
pub use directive::Directive;
pub use parser::{parse, parse_single};
