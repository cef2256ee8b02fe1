//! Wire types shared between the document-assistant client and its backend.

pub mod domain;
pub mod shared;
