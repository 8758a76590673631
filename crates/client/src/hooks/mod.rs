mod notifications;
mod refreshable_resource;

pub use notifications::*;
pub use refreshable_resource::*;
