//! Static HTML pages embedded as string constants so the server binary
//! needs no asset files next to it.

pub mod compare;
pub mod index;
