//! Service layer: composes the pure scheduling core with the store and
//! the messaging gateway.

pub mod dispatch;
pub mod error;
pub mod gateway;
pub mod preview;
pub mod representative;
