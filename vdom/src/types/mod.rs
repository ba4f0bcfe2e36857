mod attr;
mod class;

pub use attr::AttrValue;
pub use class::ClassList;
