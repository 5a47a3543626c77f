mod resource;

pub use resource::*;
