// Pure per-tick simulation rules, free of agent bookkeeping.

pub mod movement;
