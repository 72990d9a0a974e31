//! Client-side routing with named routes, history-backed navigation, and
//! reverse path resolution.
//!
//! A [`RouteTable`] maps `/`-separated path patterns (`:name` segments
//! are parameters) to named routes carrying an opaque view reference. A
//! [`Navigator`] owns the current location, records visits in a
//! [`History`] backend, and fans [`LocationChange`] events out to
//! subscribers. Resolution is synchronous and pure: first full match in
//! registration order, exact segment count, parameter values captured as
//! strings.
//!
//! ```
//! use waypoint::{Navigator, Route, RouteTable};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let table = RouteTable::new(vec![
//! 	Route::new("home", "/", "HomeView")?,
//! 	Route::new("teams", "/teams", "TeamsView")?,
//! 	Route::new("team-metrics", "/teams/:id/metrics", "TeamMetricsView")?,
//! ])?;
//!
//! let matched = table.resolve("/teams/42/metrics").expect("registered route");
//! assert_eq!(matched.name(), "team-metrics");
//! assert_eq!(matched.param("id"), Some("42"));
//!
//! let mut nav = Navigator::new(table);
//! nav.on_change(|change| println!("now at {}", change.path));
//! nav.push("/teams/42/metrics")?;
//! assert_eq!(nav.current_view(), Some(&"TeamMetricsView"));
//! # Ok(())
//! # }
//! ```
//!
//! The table is built once at startup and is immutable afterwards; the
//! navigator is an explicitly constructed value to be handed to the
//! rendering layer, not a process-wide global.

pub mod dispatch;
pub mod error;
pub mod history;
pub mod navigator;
pub mod params;
pub mod pattern;
pub mod route;
pub mod table;

pub use dispatch::{LocationChange, LocationSignal, Receiver};
pub use error::{ConfigError, ParamError, RouterError};
pub use history::{History, HistoryEntry, MemoryHistory, NavigationKind};
pub use navigator::{NavigationMode, Navigator};
pub use params::FromParam;
pub use pattern::{Captures, PathPattern};
pub use route::{Route, RouteGuard};
pub use table::{RouteMatch, RouteTable};
