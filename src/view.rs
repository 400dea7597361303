use crate::errors::{Result, VectorError};
use crate::swizzle::{self, SwizzleSource};
use crate::vector::{self, Vector, Vector2, Vector3, Vector4};
use approx::AbsDiffEq;
use num_traits::Float;
use std::ops::{Deref, DerefMut};

/// A vector whose arity is only known at runtime. Produced when a swizzle gather's length
/// is none of the fixed 2/3/4 arities; convertible back into a [`Vector`] via `TryFrom`.
#[derive(Debug, Clone, PartialEq)]
pub struct DynVector<T>
{
    components: Box<[T]>,
    names:      Box<[char]>,
}

impl<T: Float> DynVector<T>
{
    /// Pair up runtime-length names and components. Errs with `ArityMismatch` when the two
    /// sequences disagree in length; panics if the names are not pairwise distinct.
    pub fn from_parts(names: Vec<char>, components: Vec<T>) -> Result<Self>
    {
        if names.len() != components.len() {
            return Err(VectorError::ArityMismatch {
                expected: names.len(),
                found:    components.len(),
            });
        }
        assert!(vector::names_are_distinct(&names), "component names must be pairwise distinct");
        Ok(DynVector {
            components: components.into_boxed_slice(),
            names:      names.into_boxed_slice(),
        })
    }

    pub(crate) fn gather<const N: usize>(vector: &Vector<T, N>, indices: &[usize]) -> Self
    {
        DynVector {
            components: indices.iter().map(|&index| vector.components.0[index]).collect(),
            names:      vector.names[..indices.len()].into(),
        }
    }

    pub fn arity(&self) -> usize { self.components.len() }

    pub fn names(&self) -> &[char] { &self.names }

    pub fn components(&self) -> &[T] { &self.components }

    pub fn get_component(&self, name: char) -> Result<T>
    {
        self.names
            .iter()
            .position(|&n| n == name)
            .map(|index| self.components[index])
            .ok_or(VectorError::UnknownComponent(name))
    }
}

impl<T: Float> SwizzleSource<T> for DynVector<T>
{
    fn arity(&self) -> usize { self.components.len() }

    fn component(&self, index: usize) -> Option<T> { self.components.get(index).copied() }
}

impl<T: Float, const N: usize> TryFrom<DynVector<T>> for Vector<T, N>
{
    type Error = VectorError;

    fn try_from(value: DynVector<T>) -> std::result::Result<Self, VectorError>
    {
        if value.arity() != N {
            return Err(VectorError::ArityMismatch {
                expected: N,
                found:    value.arity(),
            });
        }
        Ok(Vector::with_names(
            std::array::from_fn(|i| value.names[i]),
            std::array::from_fn(|i| value.components[i]),
        ))
    }
}

impl<T> AbsDiffEq for DynVector<T>
where
    T: AbsDiffEq,
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> T::Epsilon { T::default_epsilon() }

    fn abs_diff_eq(&self, other: &Self, epsilon: T::Epsilon) -> bool
    {
        self.components.len() == other.components.len()
            && self
                .components
                .iter()
                .zip(other.components.iter())
                .all(|(a, b)| T::abs_diff_eq(a, b, epsilon))
    }
}

/// What a dynamic swizzle read yields: a scalar for length-1 patterns, a fixed-arity
/// vector for lengths 2 to 4, and a [`DynVector`] for anything longer.
#[derive(Debug, Clone, PartialEq)]
pub enum Swizzled<T>
{
    Scalar(T),
    Vec2(Vector2<T>),
    Vec3(Vector3<T>),
    Vec4(Vector4<T>),
    Dyn(DynVector<T>),
}

/// A borrowing access layer over one [`Vector`]. Declared members forward through
/// `Deref`/`DerefMut`; everything else goes through [`SwizzleView::get`] and
/// [`SwizzleView::set`] with the permissive property-probing semantics: an invalid
/// pattern reads as `None` and writes as `false`, never as an error.
pub struct SwizzleView<'a, T: Float, const N: usize>
{
    vector: &'a mut Vector<T, N>,
}

impl<'a, T: Float, const N: usize> SwizzleView<'a, T, N>
{
    pub fn wrap(vector: &'a mut Vector<T, N>) -> Self { SwizzleView { vector } }

    pub fn get(&self, key: &str) -> Option<Swizzled<T>>
    {
        let indices = swizzle::resolve_indices(&self.vector.names, key).ok()?;
        Some(match indices.len() {
            1 => Swizzled::Scalar(self.vector.components.0[indices[0]]),
            2 => Swizzled::Vec2(self.vector.swizzle::<2>(key).expect("resolved pattern of length 2")),
            3 => Swizzled::Vec3(self.vector.swizzle::<3>(key).expect("resolved pattern of length 3")),
            4 => Swizzled::Vec4(self.vector.swizzle::<4>(key).expect("resolved pattern of length 4")),
            _ => Swizzled::Dyn(DynVector::gather(self.vector, &indices)),
        })
    }

    pub fn set(&mut self, key: &str, source: &(impl SwizzleSource<T> + ?Sized)) -> bool
    {
        self.vector.swizzle_set(key, source).is_ok()
    }
}

impl<T: Float, const N: usize> Deref for SwizzleView<'_, T, N>
{
    type Target = Vector<T, N>;

    fn deref(&self) -> &Vector<T, N> { self.vector }
}

impl<T: Float, const N: usize> DerefMut for SwizzleView<'_, T, N>
{
    fn deref_mut(&mut self) -> &mut Vector<T, N> { self.vector }
}
