//! Client event stream vocabulary.

pub mod event;
