#[macro_use]
extern crate log;

pub mod behavior;
pub mod block;
pub mod group;
pub mod manager;
pub mod registrations;
pub mod tags;
