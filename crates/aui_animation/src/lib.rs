//! AUI Animation System
//!
//! Duration-based tweens driven by an explicit frame clock.
//!
//! # Features
//!
//! - **Easing**: CSS-style curves plus the accelerate-decelerate curve used by
//!   design-system transitions
//! - **Tweens**: Single-value animations advanced by `tick(dt_ms)`
//! - **Frame clock**: Host-side elapsed-time measurement between frames
//!
//! Nothing in this crate reads the wall clock on its own except
//! [`FrameClock`]; the host decides when frames happen and feeds the
//! elapsed time to [`Tween::tick`].

pub mod clock;
pub mod easing;
pub mod tween;

pub use clock::FrameClock;
pub use easing::Easing;
pub use tween::Tween;
