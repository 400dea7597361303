//! N-dimensional vector math with GLSL-style swizzle access.
//!
//! A [`Vector`] is a fixed-arity numeric tuple whose components carry positionally
//! aligned single-character names. Components can be read and written through swizzle
//! patterns — strings like `"zyx"` or `"xxy"` over the name alphabet — either strictly
//! via [`Vector::swizzle`] / [`Vector::swizzle_set`], permissively through a
//! [`SwizzleView`], or through the generated fixed accessors (`v.zyx()`).
//!
//! ```
//! use swizzlevec::{vec2, vec3, SwizzleView, Swizzled};
//!
//! let mut v = vec3(1.0, 2.0, 3.0);
//! assert_eq!(v.zyx().unwrap().components(), &[3.0, 2.0, 1.0]);
//!
//! let mut view = SwizzleView::wrap(&mut v);
//! assert_eq!(view.get("xz"), Some(Swizzled::Vec2(vec2(1.0, 3.0))));
//! assert!(view.set("xy", &[10.0, 20.0]));
//! drop(view);
//! assert_eq!(v.components(), &[10.0, 20.0, 3.0]);
//! ```

mod accessors;
mod errors;
mod swizzle;
mod vector;
mod view;

pub use errors::{Result, VectorError};
pub use swizzle::{is_valid_pattern, resolve_indices, SwizzleSource};
pub use vector::{
    vec2, vec3, vec4, Components, Vector, Vector2, Vector2f, Vector3, Vector3f, Vector4, Vector4f, AXIS_NAMES,
};
pub use view::{DynVector, Swizzled, SwizzleView};
