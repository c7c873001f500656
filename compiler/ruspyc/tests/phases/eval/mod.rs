//! Evaluation through `ruspyc`.

mod closures;
mod end_to_end;
mod errors;
mod loops;
mod modules;
mod session;
