//! Rules of play: groups, captures, ko, and placement legality.
//!
//! Every function here is a pure query over a [`Grid`](crate::board::Grid)
//! except [`resolve_captures`] in [`CaptureMode::Apply`]. Simulations clone
//! the grid (O(1) with `im`) and drop the copy afterwards.

pub mod capture;
pub mod group;
pub mod ko;
pub mod validator;

pub use capture::{find_captures, resolve_captures, CaptureMode};
pub use group::{find_group, has_liberties, liberties, Group};
pub use ko::KoGuard;
pub use validator::{check_placement, has_legal_placement, is_legal, legal_points, IllegalMove};
