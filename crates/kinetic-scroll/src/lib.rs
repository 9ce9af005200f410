//! Kinetic scrolling for touch-style scroll areas
//!
//! The host delivers pointer events and frame ticks; the engine answers with
//! offsets, indicator geometry and edge pressure for the host to paint.
//!
//! ```ignore
//! use kinetic_scroll::{PointerEvent, ScrollCoordinator, TargetId};
//!
//! let mut area = ScrollCoordinator::from_config(TargetId(1), &config);
//! area.set_viewport_size(viewport);
//! area.set_content_size(content);
//!
//! area.handle_event(&event);
//! while area.tick(now) {
//!     paint(area.position(), area.indicator(Axis::Vertical));
//! }
//! ```

pub mod blur;
pub mod coordinator;
pub mod event;
pub mod indicator;
pub mod scroll;
pub mod scroller;
pub mod trace;

pub use blur::{BlurState, Edge};
pub use coordinator::ScrollCoordinator;
pub use event::{PointerEvent, PointerKind, TargetId};
pub use indicator::IndicatorState;
pub use scroller::{Scroller, ScrollerSignal, Velocity};
