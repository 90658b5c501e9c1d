//! # lectio-passage
//!
//! The seam between reading portions and whatever serves verse text.
//! Requests are built from [`lectio_allocate::BookPortion`]s; providers
//! are plugged in by the caller and tried in order.
//!
//! ```text
//! BookPortion --PassageRequest::new(portion, "web")--> PassageRequest
//!     --FallbackChain::fetch--> provider 1 -> Failure
//!                               provider 2 -> Success { text, reference }
//!                               (all failed: retry chain in "kjv")
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use lectio_passage::{FallbackChain, PassageRequest};
//!
//! let chain = FallbackChain::new().with_provider(MyProvider::new());
//! let request = PassageRequest::new(&portion.books()[0], "web");
//! let passage = chain.fetch(&request)?;
//! println!("{}\n{}", passage.reference, passage.text);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `request` | Passage request and provider outcome |
//! | `provider` | Provider trait and fallback chain |
//! | `translation` | Translation catalog |
//! | `error` | Error types |

mod error;
mod provider;
mod request;
mod translation;

pub use error::PassageError;
pub use provider::{FallbackChain, FetchedPassage, PassageProvider};
pub use request::{PassageOutcome, PassageRequest};
pub use translation::{DEFAULT_TRANSLATION, TRANSLATIONS, Translation};
