//! MTL material library parsing.
//!
//! [`MaterialLibrary::parse`] turns the contents of a `.mtl` file into a
//! name-keyed table of [`Material`] records. Each record carries the scalar
//! and color reflectance properties plus a [`TextureMap`] descriptor per
//! texture slot; resolving the named image files is the caller's job.
//!
//! Unknown directives and unknown texture-map options are skipped with a
//! warning. The `spectral` and `xyz` color forms are not supported and
//! abort the parse with [`MtlError::UnsupportedColorSpace`].
//!
//! # Example
//!
//! ```
//! use wavefront_mesh::material::MaterialLibrary;
//!
//! let mtl = MaterialLibrary::parse("newmtl red\nKd 1 0 0\n").unwrap();
//! let red = &mtl.materials["red"];
//! assert_eq!(red.diffuse, [1.0, 0.0, 0.0]);
//! ```

mod error;
mod parser;
mod types;

pub use error::MtlError;
pub use types::{Material, TextureMap, TextureModify};

use std::collections::HashMap;
use std::sync::Arc;

/// A name-keyed table of parsed materials.
///
/// Materials are stored behind `Arc` so a mesh can reference them by index
/// without taking ownership of the library.
#[derive(Debug, Default)]
pub struct MaterialLibrary {
    /// Parsed materials keyed by their `newmtl` name.
    pub materials: HashMap<String, Arc<Material>>,
}

impl MaterialLibrary {
    /// Parse MTL text into a material library.
    ///
    /// The parse cursor (the material currently being filled in) lives only
    /// for the duration of this call; property directives seen before the
    /// first `newmtl` apply to an unretained sentinel and are dropped.
    pub fn parse(data: &str) -> Result<Self, MtlError> {
        parser::parse(data)
    }
}
