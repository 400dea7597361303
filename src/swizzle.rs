use crate::errors::{Result, VectorError};
use crate::vector::Vector;
use num_traits::Float;

/// True iff `pattern` is a swizzle over `names`: 1 to `names.len()` characters, each drawn
/// from `names`. Validity is set membership, not positional equality, so repeats (`"xx"`)
/// and reorderings (`"zyx"`) pass.
pub fn is_valid_pattern(names: &[char], pattern: &str) -> bool
{
    let length = pattern.chars().count();
    length >= 1 && length <= names.len() && pattern.chars().all(|c| names.contains(&c))
}

/// Resolve `pattern` to the indices into `names` it refers to, in pattern order
pub fn resolve_indices(names: &[char], pattern: &str) -> Result<Vec<usize>>
{
    if !is_valid_pattern(names, pattern) {
        return Err(VectorError::InvalidSwizzle(pattern.to_string()));
    }
    Ok(pattern
        .chars()
        .map(|c| names.iter().position(|&n| n == c).expect("pattern was validated against the name set"))
        .collect())
}

/// Anything a swizzle scatter can read per-index numeric components from
pub trait SwizzleSource<T>
{
    fn arity(&self) -> usize;

    fn component(&self, index: usize) -> Option<T>;
}

impl<T: Float, const N: usize> SwizzleSource<T> for Vector<T, N>
{
    fn arity(&self) -> usize { N }

    fn component(&self, index: usize) -> Option<T> { self.components().get(index).copied() }
}

impl<T: Float, const N: usize> SwizzleSource<T> for [T; N]
{
    fn arity(&self) -> usize { N }

    fn component(&self, index: usize) -> Option<T> { self.get(index).copied() }
}

impl<T: Float> SwizzleSource<T> for [T]
{
    fn arity(&self) -> usize { self.len() }

    fn component(&self, index: usize) -> Option<T> { self.get(index).copied() }
}

impl<T: Float, const N: usize> Vector<T, N>
{
    /// Gather the components `pattern` names, in pattern order, into a vector of arity M.
    /// The result takes the first M names of this vector's name set, so a standard-named
    /// source yields `x y`, `x y z`, ... regardless of the pattern's own order.
    pub fn swizzle<const M: usize>(&self, pattern: &str) -> Result<Vector<T, M>>
    {
        let indices = resolve_indices(&self.names, pattern)?;
        if indices.len() != M {
            return Err(VectorError::DimensionMismatch {
                expected: indices.len(),
                found:    M,
            });
        }
        let components = std::array::from_fn(|i| self.components.0[indices[i]]);
        let names = std::array::from_fn(|i| self.names[i]);
        Ok(Vector::with_names(names, components))
    }

    /// Scatter `source` into the components `pattern` names: position i of the pattern
    /// receives component i of the source. Validates the pattern and the source arity up
    /// front, so a failed call never leaves a partial write behind.
    pub fn swizzle_set(&mut self, pattern: &str, source: &(impl SwizzleSource<T> + ?Sized)) -> Result<()>
    {
        let indices = resolve_indices(&self.names, pattern)?;
        if source.arity() != indices.len() {
            return Err(VectorError::DimensionMismatch {
                expected: indices.len(),
                found:    source.arity(),
            });
        }
        let values: Vec<T> = (0..indices.len())
            .map(|i| {
                source.component(i).ok_or(VectorError::DimensionMismatch {
                    expected: indices.len(),
                    found:    i,
                })
            })
            .collect::<Result<_>>()?;
        for (&index, value) in indices.iter().zip(values) {
            self.components.0[index] = value;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::vector::{vec2, vec3};

    const XYZ: [char; 3] = ['x', 'y', 'z'];

    #[test]
    fn repeats_and_reorderings_are_valid()
    {
        assert!(is_valid_pattern(&XYZ, "xx"));
        assert!(is_valid_pattern(&XYZ, "zyx"));
        assert!(is_valid_pattern(&XYZ, "y"));
    }

    #[test]
    fn empty_foreign_and_oversized_patterns_are_invalid()
    {
        assert!(!is_valid_pattern(&XYZ, ""));
        assert!(!is_valid_pattern(&XYZ, "a"));
        assert!(!is_valid_pattern(&XYZ, "xya"));
        assert!(!is_valid_pattern(&XYZ, "xyzx"));
    }

    #[test]
    fn indices_come_back_in_pattern_order()
    {
        assert_eq!(resolve_indices(&XYZ, "zyx").unwrap(), vec![2, 1, 0]);
        assert_eq!(resolve_indices(&XYZ, "xx").unwrap(), vec![0, 0]);
        assert_eq!(
            resolve_indices(&XYZ, "w"),
            Err(VectorError::InvalidSwizzle(String::from("w")))
        );
    }

    #[test]
    fn gather_reverses_components()
    {
        let v = vec3(1.0, 2.0, 3.0);
        let reversed = v.swizzle::<3>("zyx").unwrap();
        assert_eq!(reversed.components(), &[3.0, 2.0, 1.0]);
        assert_eq!(reversed.names(), &['x', 'y', 'z']);
    }

    #[test]
    fn gather_with_repetition_duplicates_the_source_component()
    {
        let v = vec3(1.0, 2.0, 3.0);
        assert_eq!(v.swizzle::<2>("xx").unwrap(), vec2(1.0, 1.0));
    }

    #[test]
    fn gather_arity_must_match_the_pattern()
    {
        let v = vec3(1.0, 2.0, 3.0);
        assert_eq!(
            v.swizzle::<3>("xy"),
            Err(VectorError::DimensionMismatch { expected: 2, found: 3 })
        );
        assert_eq!(
            v.swizzle::<2>("ab"),
            Err(VectorError::InvalidSwizzle(String::from("ab")))
        );
    }

    #[test]
    fn scatter_updates_only_the_named_components()
    {
        let mut v = vec3(1.0, 2.0, 3.0);
        v.swizzle_set("xy", &vec2(10.0, 20.0)).unwrap();
        assert_eq!(v.components(), &[10.0, 20.0, 3.0]);
    }

    #[test]
    fn scatter_accepts_arrays_and_slices()
    {
        let mut v = vec3(1.0, 2.0, 3.0);
        v.swizzle_set("zx", &[30.0, 10.0]).unwrap();
        assert_eq!(v.components(), &[10.0, 2.0, 30.0]);

        let source = vec![5.0];
        v.swizzle_set("y", source.as_slice()).unwrap();
        assert_eq!(v.components(), &[10.0, 5.0, 30.0]);
    }

    #[test]
    fn failed_scatter_leaves_the_target_untouched()
    {
        let mut v = vec3(1.0, 2.0, 3.0);
        assert_eq!(
            v.swizzle_set("xy", &vec3(1.0, 2.0, 3.0)),
            Err(VectorError::DimensionMismatch { expected: 2, found: 3 })
        );
        assert_eq!(
            v.swizzle_set("ab", &vec2(0.0, 0.0)),
            Err(VectorError::InvalidSwizzle(String::from("ab")))
        );
        assert_eq!(v.components(), &[1.0, 2.0, 3.0]);
    }
}
