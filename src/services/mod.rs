//! Service layer module
//!
//! Contains the upstream fetcher, the joke/insult decoders and the password generator

pub mod fetcher;
pub mod jokes;
pub mod password;

pub use fetcher::{Fetch, HttpFetcher};
pub use jokes::{JokeService, JokeSource, Language};
