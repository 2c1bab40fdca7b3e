//! Movement domain: system modules for runner updates.

pub(crate) mod collisions;
pub(crate) mod commands;
pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use collisions::forward_hazard_contacts;
pub(crate) use commands::apply_runner_commands;
pub(crate) use input::read_input;
pub(crate) use movement::apply_runner_step;
