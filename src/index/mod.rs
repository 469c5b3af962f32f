// Occurrence index: per-stem report entries.

pub mod entry;
