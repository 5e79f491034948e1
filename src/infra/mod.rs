//! Инфраструктурный слой вокруг движка: RNG-реализации для раздачи.

pub mod rng;

pub use rng::*;
