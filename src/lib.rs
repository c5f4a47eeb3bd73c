//! Engine for vertical step-progress indicators.
//!
//! A step progress shows a column of labeled steps, each drawn as a shape
//! joined to the next by a connector line, colored by whether the step lies
//! before, at, or after the current step. The host toolkit owns views, text
//! rendering and the event loop; this crate owns the parts with logic:
//!
//! - [`classify`]: past/current/future classification
//! - [`shape`]: outlines for each [`ShapeKind`] inside a bounding square
//! - [`StepProgress`]: configuration, coalesced rebuild/recolor passes and
//!   the index-aligned [`StepNode`] list
//!
//! ```
//! use stepkit::{Color, ShapeKind, StepProgress};
//!
//! let mut progress = StepProgress::new();
//! progress.set_steps(["Only"]);
//! progress.set_first_step_shape(ShapeKind::Circle);
//! progress.set_last_step_shape(ShapeKind::Square);
//! progress.set_tint_color(Some(Color::rgb(0, 122, 255)));
//! progress.run_pending();
//!
//! assert_eq!(progress.nodes()[0].shape_kind(), ShapeKind::Circle);
//! assert!(progress.nodes()[0].is_connector_hidden());
//! ```

pub mod classify;
pub mod color;
pub mod config;
pub mod defaults;
pub mod errors;
pub mod log;
pub mod node;
pub mod palette;
pub mod preview;
pub mod progress;
pub mod scheduler;
pub mod shape;
pub mod text;
pub mod types;

pub use classify::{StepClass, classify};
pub use color::Color;
pub use config::{Change, StepLayout};
pub use errors::{ColorError, ConfigError};
pub use node::{NodeLayout, NodeStyle, StepNode};
pub use palette::{ColorBundle, CurrentColors, ResolvedPalette, StepPalette};
pub use progress::StepProgress;
pub use scheduler::{Pass, PassStats};
pub use shape::{ShapeKind, ShapeOutline, StepShape};
pub use text::{Font, ProportionalMetrics, TextMetrics};
pub use types::{Length, NumericError, Point, Rect, Size};
