//! `evr-plan` — the dispatcher-facing planning session.
//!
//! What used to be a tangle of global mutable UI state (selected mode,
//! marker handles, blocked-road list) lives here as an explicit [`Planner`]
//! struct; every user gesture is a method call on it.  Rendering is not
//! performed directly: the planner drives a [`MapView`] collaborator, so the
//! same session logic runs under a real map widget, a console, or a
//! recording test double.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`state`]   | `Planner`, `SelectionMode`, `ClickOutcome`                |
//! | [`view`]    | `MapView` trait, `NoopView`, `TraceView`, marker/layer kinds |
//! | [`display`] | `RouteDisplay`, `RouteSummary`, ETA scaling               |
//! | [`traffic`] | Seeded traffic simulation over the active route           |
//! | [`error`]   | `PlanError`, `PlanResult<T>`                              |

pub mod display;
pub mod error;
pub mod state;
pub mod traffic;
pub mod view;


pub use display::{adjusted_eta_minutes, RouteDisplay, RouteSource, RouteSummary};
pub use error::{PlanError, PlanResult};
pub use state::{ClickOutcome, Planner, SelectionMode};
pub use traffic::TrafficReport;
pub use view::{LayerKind, MapView, MarkerKind, NoopView, PathStyle, RenderOp, TraceView};
