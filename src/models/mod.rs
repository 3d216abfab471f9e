//! Domain model types for the Traveling Salesman Problem.
//!
//! Provides planar cities and the [`Cities`] trait through which chromosomes
//! read city count and tour length.

mod cities;
mod city;

pub use cities::{Cities, CityList};
pub use city::City;
