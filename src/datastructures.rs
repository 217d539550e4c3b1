mod typemap;

pub use typemap::TypeMap;
