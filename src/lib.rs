pub mod board;
pub mod evaluate;
pub mod game;
pub mod input_handler;
#[cfg(feature = "instrumentation")]
pub mod instrumentation;
pub mod reachability;
pub mod search;
pub mod validator;
