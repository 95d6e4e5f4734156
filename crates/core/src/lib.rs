//! Domain logic for the showcase server.
//!
//! Everything here is pure and HTTP-agnostic: the fixed catalogs, compliment
//! sampling, convolution kernels, thumbnail math and artifact naming. The
//! `showcase-api` crate wires these into request handlers.

pub mod animal_facts;
pub mod compliments;
pub mod error;
pub mod filters;
pub mod imaging;
pub mod naming;
