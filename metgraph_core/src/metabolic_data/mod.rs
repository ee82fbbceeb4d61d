//! Module providing the records a metabolic graph is built from, and the
//! [`DataProvider`](provider::DataProvider) trait used to look them up.

pub mod compound;
pub mod pathway;
pub mod provider;
pub mod reaction;
