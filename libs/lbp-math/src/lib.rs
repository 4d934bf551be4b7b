#![no_std]

pub mod allocation;
pub mod distribution;
pub mod full_math;
pub mod liquidity_math;
pub mod position_math;
pub mod price_math;
pub mod tick_math;

pub use allocation::*;
pub use distribution::*;
pub use full_math::*;
pub use liquidity_math::*;
pub use position_math::*;
pub use price_math::*;
pub use tick_math::*;
