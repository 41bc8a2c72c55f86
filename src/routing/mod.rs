// Routing module entry point
// Decides how each request path is answered before any file is read

mod resolver;

pub use resolver::{resolve, Resolution};
