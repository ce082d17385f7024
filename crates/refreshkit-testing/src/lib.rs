//! Testing utilities and harness for Refreshkit

pub mod robot;
pub mod robot_assertions;

pub use robot::*;
pub use robot_assertions::*;

pub mod prelude {
    pub use crate::robot::RefreshRobot;
    pub use crate::robot_assertions::*;
}
