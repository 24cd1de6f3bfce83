//! Activity-selection domain models.
//!
//! Provides the core data types for posing an activity-selection problem
//! and representing its solution.
//!
//! # Domain Mappings
//!
//! | interval-select | Calendaring | Manufacturing | Broadcasting |
//! |-----------------|-------------|---------------|--------------|
//! | Task | Meeting | Machine job | Program slot |
//! | Selection | Booked agenda | Accepted jobs | Air schedule |

mod priority;
mod selection;
mod task;

pub use priority::Priority;
pub use selection::{Choice, Selection};
pub use task::{sample_tasks, Task};
