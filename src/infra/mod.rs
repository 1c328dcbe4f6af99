//! Инфраструктурный слой вокруг движка: реализации внешних соучастников
//! по умолчанию.
//! - RNG-реализации;
//! - источники карт (перемешанная колода / фиксированная последовательность);
//! - пейсинг;
//! - получатели выплат.

pub mod card_source;
pub mod pacing;
pub mod payout;
pub mod rng;

pub use card_source::*;
pub use pacing::*;
pub use payout::*;
pub use rng::*;
