// Proglog Kernel
//
// Append-only, offset-addressed record storage.

pub mod log;
