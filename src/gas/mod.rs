pub(crate) mod action;
pub(crate) mod client;
pub(crate) mod error;
pub(crate) mod model;

pub(crate) use action::{Action, MatchKey};
pub(crate) use client::GasClient;
pub(crate) use error::GasError;
