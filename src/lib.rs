//! # Stemma
//!
//! English stemming for text analysis pipelines.
//!
//! Stemma implements the classic Porter suffix-stripping algorithm as a
//! pure, deterministic function, plus a small token filter layer so the
//! stemmer can sit directly in an analysis chain.
//!
//! ## Features
//!
//! - Pure Rust implementation of the Porter stemmer
//! - Declarative, ordered suffix-rewrite rule tables
//! - Pluggable `Stemmer` trait with a pass-through identity stemmer
//! - Token filter adapter for analysis pipelines
//! - Thread-safe by construction; parallel batch stemming via rayon
//!
//! ## Example
//!
//! ```
//! use stemma::stem::{PorterStemmer, Stemmer};
//!
//! let stemmer = PorterStemmer::new();
//! assert_eq!(stemmer.stem("caresses"), "caress");
//! assert_eq!(stemmer.stem("motoring"), "motor");
//! ```

pub mod error;
pub mod filter;
pub mod stem;
pub mod token;

pub mod prelude {
    pub use crate::error::{Result, StemmaError};
    pub use crate::filter::{Filter, StemFilter};
    pub use crate::stem::{IdentityStemmer, PorterStemmer, Stemmer, stem_batch};
    pub use crate::token::{Token, TokenStream};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
