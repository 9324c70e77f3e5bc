//! The timesheet engine: pure, synchronous computations over data the
//! db layer has already fetched. No I/O happens in this module tree.

pub mod calendar;
pub mod clock;
pub mod normalize;
pub mod overview;
pub mod week;
